//! Easing curve for digit transitions.
//!
//! Every transition strategy remaps linear time through the same symmetric
//! cubic ease-in-out (slow-fast-slow).

/// Cubic ease-in-out.
///
/// Input t is clamped to [0.0, 1.0].
/// `ease(0) = 0`, `ease(0.5) = 0.5`, `ease(1) = 1`, monotonic in between.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let back = -2.0 * t + 2.0;
        1.0 - back * back * back / 2.0
    }
}
