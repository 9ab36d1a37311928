//! Synchronized sweep: all hands turn clockwise and land together.

use crate::glyph::DigitAngles;
use crate::util::angle::{clockwise_delta, normalize_angle};
use crate::util::easing::ease_in_out_cubic;

/// Every hand rotates clockwise only, covering its clockwise distance by
/// `t = 1`. Hands with further to go sweep faster; hands already on target
/// stay still.
pub fn synchronized_sweep(
    from: &DigitAngles,
    to: &DigitAngles,
    t: f32,
) -> DigitAngles {
    let eased = ease_in_out_cubic(t);
    from.zip_clocks(to, |_, start, end| {
        start.zip_hands(end, |a, b| {
            normalize_angle(a + clockwise_delta(a, b) * eased)
        })
    })
}
