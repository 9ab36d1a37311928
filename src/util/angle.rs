//! Angle math for clock hands.
//!
//! Angles are degrees measured clockwise from the 12 o'clock position. Values
//! in flight may leave `[0, 360)`; only sampled output is normalized.

/// One full revolution in degrees.
pub const FULL_TURN: f32 = 360.0;

/// Half a revolution in degrees.
pub const HALF_TURN: f32 = 180.0;

/// Reduce any finite angle into `[0, 360)`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Signed minimal rotation from `from` to `to`, in `(-180, 180]`.
///
/// Positive means clockwise. A tie at exactly half a turn resolves to
/// `+180` (clockwise).
#[inline]
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    let delta = normalize_angle(to - from);
    if delta > HALF_TURN {
        delta - FULL_TURN
    } else {
        delta
    }
}

/// Non-negative rotation going clockwise from `from` to `to`, in `[0, 360)`.
///
/// Zero when the angles coincide.
#[inline]
pub fn clockwise_delta(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}
