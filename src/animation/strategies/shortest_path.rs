//! Shortest-path rotation: every hand takes the short way round.

use crate::glyph::DigitAngles;
use crate::util::angle::{normalize_angle, shortest_delta};
use crate::util::easing::ease_in_out_cubic;

/// Each of the twelve hands rotates independently by at most half a turn,
/// all of them starting and finishing together.
pub fn shortest_path(from: &DigitAngles, to: &DigitAngles, t: f32) -> DigitAngles {
    let eased = ease_in_out_cubic(t);
    from.zip_clocks(to, |_, start, end| {
        start.zip_hands(end, |a, b| rotate_shortest(a, b, eased))
    })
}

/// `from` advanced by `eased` of the shortest rotation towards `to`.
#[inline]
pub(super) fn rotate_shortest(from: f32, to: f32, eased: f32) -> f32 {
    normalize_angle(from + shortest_delta(from, to) * eased)
}
