//! Wind-up: one extra full clockwise revolution before settling.

use crate::glyph::DigitAngles;
use crate::util::angle::{clockwise_delta, normalize_angle, FULL_TURN};
use crate::util::easing::ease_in_out_cubic;

/// Every hand travels its clockwise distance plus a full turn, so even an
/// unchanged hand spins once around the dial.
pub fn wind_up(from: &DigitAngles, to: &DigitAngles, t: f32) -> DigitAngles {
    let eased = ease_in_out_cubic(t);
    from.zip_clocks(to, |_, start, end| {
        start.zip_hands(end, |a, b| {
            normalize_angle(a + (clockwise_delta(a, b) + FULL_TURN) * eased)
        })
    })
}
