//! Clock-face poses for the 2x3 digit grid.
//!
//! A digit is drawn by six analog clocks laid out in two columns and three
//! rows, labeled `a b / c d / e f`. Each clock contributes an hour and a
//! minute hand; together the twelve hands trace a segment-display glyph.

mod table;

use serde::{Deserialize, Serialize};

pub use table::{
    builtin_glyph, DigitGlyphTable, DIGITS, DOWN, LEFT, NEUTRAL, RIGHT, UP,
};

use crate::error::ClockArtError;
use crate::util::angle::{normalize_angle, shortest_delta};

/// Number of clocks in one digit grid.
pub const CLOCK_COUNT: usize = 6;

/// Clock columns per digit grid.
pub const COLUMNS: usize = 2;

/// Clock rows per digit grid.
pub const ROWS: usize = 3;

/// Grid labels in storage order.
pub const CLOCK_LABELS: [char; CLOCK_COUNT] = ['a', 'b', 'c', 'd', 'e', 'f'];

/// Hand angles of a single analog clock face, in degrees clockwise from 12.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClockAngles {
    /// Hour hand angle.
    pub hour: f32,
    /// Minute hand angle.
    pub minute: f32,
}

impl ClockAngles {
    /// Clock with the given hand angles.
    pub const fn new(hour: f32, minute: f32) -> Self {
        Self { hour, minute }
    }

    /// Both hands reduced into `[0, 360)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        self.map_hands(normalize_angle)
    }

    /// Apply `f` to both hands.
    #[must_use]
    pub fn map_hands(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self {
            hour: f(self.hour),
            minute: f(self.minute),
        }
    }

    /// Combine matching hands of `self` and `other` with `f(self, other)`.
    #[must_use]
    pub fn zip_hands(
        self,
        other: Self,
        mut f: impl FnMut(f32, f32) -> f32,
    ) -> Self {
        Self {
            hour: f(self.hour, other.hour),
            minute: f(self.minute, other.minute),
        }
    }

    fn is_finite(self) -> bool {
        self.hour.is_finite() && self.minute.is_finite()
    }
}

/// Pose of a whole digit grid: exactly six clocks in `a..f` order.
///
/// The fixed-size array makes a wrongly sized pose unrepresentable. Data
/// arriving as a slice or from a config file goes through
/// [`DigitAngles::from_slice`], which rejects any other length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<ClockAngles>", into = "Vec<ClockAngles>")]
pub struct DigitAngles([ClockAngles; CLOCK_COUNT]);

impl DigitAngles {
    /// Pose from six clocks in `a..f` order.
    pub const fn new(clocks: [ClockAngles; CLOCK_COUNT]) -> Self {
        Self(clocks)
    }

    /// Every clock showing the same hands.
    pub const fn uniform(clock: ClockAngles) -> Self {
        Self([clock; CLOCK_COUNT])
    }

    /// Validate a clock list of unknown length.
    ///
    /// Fails with [`ClockArtError::ClockCount`] unless exactly six clocks are
    /// given, and with [`ClockArtError::NonFiniteAngle`] if any hand is NaN
    /// or infinite.
    pub fn from_slice(clocks: &[ClockAngles]) -> Result<Self, ClockArtError> {
        let array: [ClockAngles; CLOCK_COUNT] =
            clocks.try_into().map_err(|_| ClockArtError::ClockCount {
                expected: CLOCK_COUNT,
                actual: clocks.len(),
            })?;
        let pose = Self(array);
        pose.validate()?;
        Ok(pose)
    }

    /// Check that every hand angle is finite.
    pub fn validate(&self) -> Result<(), ClockArtError> {
        for (clock, label) in self.0.iter().zip(CLOCK_LABELS) {
            if !clock.is_finite() {
                let value = if clock.hour.is_finite() {
                    clock.minute
                } else {
                    clock.hour
                };
                return Err(ClockArtError::NonFiniteAngle {
                    clock: label,
                    value,
                });
            }
        }
        Ok(())
    }

    /// The six clocks in `a..f` order.
    pub fn clocks(&self) -> &[ClockAngles; CLOCK_COUNT] {
        &self.0
    }

    /// Clock at grid index `0..6`.
    pub fn clock(&self, index: usize) -> Option<ClockAngles> {
        self.0.get(index).copied()
    }

    /// Clock by grid label (`'a'..='f'`).
    pub fn clock_by_label(&self, label: char) -> Option<ClockAngles> {
        CLOCK_LABELS
            .iter()
            .position(|&l| l == label)
            .map(|i| self.0[i])
    }

    /// Iterate the clocks in `a..f` order.
    pub fn iter(&self) -> impl Iterator<Item = &ClockAngles> {
        self.0.iter()
    }

    /// Every hand reduced into `[0, 360)`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self(self.0.map(ClockAngles::normalized))
    }

    /// Build a new pose clock by clock from `self` and `other`.
    ///
    /// `f` receives the grid index and the matching clocks of both poses.
    #[must_use]
    pub fn zip_clocks(
        &self,
        other: &Self,
        mut f: impl FnMut(usize, ClockAngles, ClockAngles) -> ClockAngles,
    ) -> Self {
        Self(std::array::from_fn(|i| f(i, self.0[i], other.0[i])))
    }

    /// Whether every hand of `self` lies within `tolerance` degrees of the
    /// matching hand of `other`, comparing around the dial.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| {
            let close = |x: f32, y: f32| {
                shortest_delta(x, y).abs() <= tolerance
            };
            close(a.hour, b.hour) && close(a.minute, b.minute)
        })
    }
}

impl From<[ClockAngles; CLOCK_COUNT]> for DigitAngles {
    fn from(clocks: [ClockAngles; CLOCK_COUNT]) -> Self {
        Self(clocks)
    }
}

impl TryFrom<Vec<ClockAngles>> for DigitAngles {
    type Error = ClockArtError;

    fn try_from(clocks: Vec<ClockAngles>) -> Result<Self, Self::Error> {
        Self::from_slice(&clocks)
    }
}

impl From<DigitAngles> for Vec<ClockAngles> {
    fn from(pose: DigitAngles) -> Self {
        pose.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let five = [ClockAngles::default(); 5];
        match DigitAngles::from_slice(&five) {
            Err(ClockArtError::ClockCount { expected, actual }) => {
                assert_eq!(expected, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("expected ClockCount error, got {other:?}"),
        }

        let seven = vec![ClockAngles::default(); 7];
        assert!(DigitAngles::try_from(seven).is_err());
    }

    #[test]
    fn test_from_slice_rejects_non_finite() {
        let mut clocks = [ClockAngles::new(90.0, 180.0); 6];
        clocks[3].minute = f32::NAN;
        match DigitAngles::from_slice(&clocks) {
            Err(ClockArtError::NonFiniteAngle { clock, value }) => {
                assert_eq!(clock, 'd');
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteAngle error, got {other:?}"),
        }
    }

    #[test]
    fn test_clock_by_label_follows_grid_order() {
        let pose = DigitAngles::new(std::array::from_fn(|i| {
            ClockAngles::new(i as f32 * 10.0, 0.0)
        }));
        assert_eq!(pose.clock_by_label('a'), Some(ClockAngles::new(0.0, 0.0)));
        assert_eq!(pose.clock_by_label('f'), Some(ClockAngles::new(50.0, 0.0)));
        assert_eq!(pose.clock_by_label('g'), None);
        assert_eq!(pose.clock(6), None);
    }

    #[test]
    fn test_normalized_wraps_every_hand() {
        let pose = DigitAngles::uniform(ClockAngles::new(-90.0, 450.0));
        let n = pose.normalized();
        assert!(n.iter().all(|c| *c == ClockAngles::new(270.0, 90.0)));
    }

    #[test]
    fn test_approx_eq_compares_around_the_dial() {
        let a = DigitAngles::uniform(ClockAngles::new(359.9995, 0.0));
        let b = DigitAngles::uniform(ClockAngles::new(0.0, 0.0005));
        assert!(a.approx_eq(&b, 1e-2));
        let c = DigitAngles::uniform(ClockAngles::new(10.0, 0.0));
        assert!(!a.approx_eq(&c, 1e-2));
    }

    #[test]
    fn test_json_shape_is_a_list_of_six() {
        let pose = DigitAngles::uniform(ClockAngles::new(90.0, 180.0));
        let json = serde_json::to_value(pose).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(6));
        assert_eq!(json[0]["hour"], 90.0);

        let short = serde_json::json!([{ "hour": 0.0, "minute": 0.0 }]);
        let err = serde_json::from_value::<DigitAngles>(short).unwrap_err();
        assert!(err.to_string().contains("needs 6 clocks, got 1"));
    }
}
