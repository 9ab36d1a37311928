//! Built-in digit glyphs and the per-digit override table.

use rustc_hash::FxHashMap;

use super::{ClockAngles, DigitAngles};
use crate::error::ClockArtError;

/// Hand pointing at 12.
pub const UP: f32 = 0.0;
/// Hand pointing at 3.
pub const RIGHT: f32 = 90.0;
/// Hand pointing at 6.
pub const DOWN: f32 = 180.0;
/// Hand pointing at 9.
pub const LEFT: f32 = 270.0;

/// Resting pose for clocks a glyph does not use (both hands at 7:30).
pub const NEUTRAL: ClockAngles = ClockAngles::new(225.0, 225.0);

/// Every digit character with a built-in glyph, in order.
pub const DIGITS: [char; 10] =
    ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const fn c(hour: f32, minute: f32) -> ClockAngles {
    ClockAngles::new(hour, minute)
}

const N: ClockAngles = NEUTRAL;

#[rustfmt::skip]
const GLYPHS: [DigitAngles; 10] = [
    // ┌──┐
    // │  │
    // └──┘
    DigitAngles::new([
        c(RIGHT, DOWN), c(LEFT, DOWN),
        c(UP, DOWN),    c(UP, DOWN),
        c(UP, RIGHT),   c(UP, LEFT),
    ]),
    //    │
    //    │
    //    │
    DigitAngles::new([
        N, c(DOWN, DOWN),
        N, c(UP, DOWN),
        N, c(UP, UP),
    ]),
    // ──┐
    // ──┘
    // └──
    DigitAngles::new([
        c(RIGHT, RIGHT), c(LEFT, DOWN),
        c(RIGHT, DOWN),  c(UP, LEFT),
        c(UP, RIGHT),    c(LEFT, LEFT),
    ]),
    // ──┐
    // ──┤
    // ──┘
    DigitAngles::new([
        c(RIGHT, RIGHT), c(LEFT, DOWN),
        c(RIGHT, RIGHT), c(UP, DOWN),
        c(RIGHT, RIGHT), c(UP, LEFT),
    ]),
    // │  │
    // └──┤
    //    │
    DigitAngles::new([
        c(DOWN, DOWN), c(DOWN, DOWN),
        c(UP, RIGHT),  c(UP, DOWN),
        N,             c(UP, UP),
    ]),
    // ┌──
    // └──┐
    // ──┘
    DigitAngles::new([
        c(RIGHT, DOWN),  c(LEFT, LEFT),
        c(UP, RIGHT),    c(LEFT, DOWN),
        c(RIGHT, RIGHT), c(UP, LEFT),
    ]),
    // ┌──
    // ├──┐
    // └──┘
    DigitAngles::new([
        c(RIGHT, DOWN), c(LEFT, LEFT),
        c(UP, RIGHT),   c(LEFT, DOWN),
        c(UP, RIGHT),   c(UP, LEFT),
    ]),
    // ──┐
    //   │
    //   │
    DigitAngles::new([
        c(RIGHT, RIGHT), c(LEFT, DOWN),
        N,               c(UP, DOWN),
        N,               c(UP, UP),
    ]),
    // ┌──┐
    // ├──┤
    // └──┘
    DigitAngles::new([
        c(RIGHT, DOWN), c(LEFT, DOWN),
        c(UP, RIGHT),   c(UP, DOWN),
        c(UP, RIGHT),   c(UP, LEFT),
    ]),
    // ┌──┐
    // └──┤
    // ──┘
    DigitAngles::new([
        c(RIGHT, DOWN),  c(LEFT, DOWN),
        c(UP, RIGHT),    c(UP, DOWN),
        c(RIGHT, RIGHT), c(UP, LEFT),
    ]),
];

/// Built-in pose for a digit character, `None` outside `'0'..='9'`.
pub fn builtin_glyph(digit: char) -> Option<DigitAngles> {
    digit
        .to_digit(10)
        .and_then(|d| GLYPHS.get(d as usize))
        .copied()
}

/// Digit-to-pose lookup with optional per-digit custom designs.
///
/// Overrides shadow the built-in glyph for their digit until reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DigitGlyphTable {
    overrides: FxHashMap<char, DigitAngles>,
}

impl DigitGlyphTable {
    /// Table with only the built-in glyphs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pose used to draw `digit`: its override if set, else the built-in.
    pub fn get(&self, digit: char) -> Result<DigitAngles, ClockArtError> {
        if let Some(custom) = self.overrides.get(&digit) {
            return Ok(*custom);
        }
        builtin_glyph(digit).ok_or(ClockArtError::UnknownGlyph(digit))
    }

    /// The pose for clocks that show nothing.
    pub fn neutral(&self) -> DigitAngles {
        DigitAngles::uniform(NEUTRAL)
    }

    /// Install a custom design for `digit`. Hands are stored in `[0, 360)`.
    pub fn set_custom(
        &mut self,
        digit: char,
        pose: DigitAngles,
    ) -> Result<(), ClockArtError> {
        if builtin_glyph(digit).is_none() {
            return Err(ClockArtError::UnknownGlyph(digit));
        }
        pose.validate()?;
        if self.overrides.insert(digit, pose.normalized()).is_some() {
            log::debug!("replaced custom glyph for '{digit}'");
        }
        Ok(())
    }

    /// Whether `digit` currently uses a custom design.
    pub fn is_custom(&self, digit: char) -> bool {
        self.overrides.contains_key(&digit)
    }

    /// Drop the custom design for `digit`, returning to the built-in.
    pub fn reset(&mut self, digit: char) {
        let _ = self.overrides.remove(&digit);
    }

    /// Drop every custom design.
    pub fn reset_all(&mut self) {
        self.overrides.clear();
    }

    /// Effective `(digit, pose)` pairs for all ten digits in order.
    pub fn entries(&self) -> impl Iterator<Item = (char, DigitAngles)> + '_ {
        DIGITS.iter().filter_map(move |&d| self.get(d).ok().map(|p| (d, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_has_a_glyph() {
        for d in DIGITS {
            assert!(builtin_glyph(d).is_some(), "missing glyph for {d}");
        }
        assert!(builtin_glyph('a').is_none());
        assert!(builtin_glyph(':').is_none());
    }

    #[test]
    fn test_one_uses_neutral_left_column() {
        let one = builtin_glyph('1').unwrap();
        assert_eq!(one.clock_by_label('a'), Some(NEUTRAL));
        assert_eq!(one.clock_by_label('c'), Some(NEUTRAL));
        assert_eq!(one.clock_by_label('e'), Some(NEUTRAL));
        assert_eq!(one.clock_by_label('b'), Some(c(180.0, 180.0)));
        assert_eq!(one.clock_by_label('d'), Some(c(0.0, 180.0)));
        assert_eq!(one.clock_by_label('f'), Some(c(0.0, 0.0)));
    }

    #[test]
    fn test_glyph_angles_are_canonical() {
        for (_, pose) in DigitGlyphTable::new().entries() {
            assert_eq!(pose.normalized(), pose);
        }
    }

    #[test]
    fn test_override_shadows_builtin_until_reset() {
        let mut table = DigitGlyphTable::new();
        let custom = DigitAngles::uniform(c(RIGHT, LEFT));

        table.set_custom('7', custom).unwrap();
        assert!(table.is_custom('7'));
        assert_eq!(table.get('7').unwrap(), custom);
        assert_eq!(table.get('8').unwrap(), builtin_glyph('8').unwrap());

        table.reset('7');
        assert!(!table.is_custom('7'));
        assert_eq!(table.get('7').unwrap(), builtin_glyph('7').unwrap());
    }

    #[test]
    fn test_reset_all_clears_every_override() {
        let mut table = DigitGlyphTable::new();
        table.set_custom('0', table.neutral()).unwrap();
        table.set_custom('9', table.neutral()).unwrap();
        table.reset_all();
        assert_eq!(table, DigitGlyphTable::new());
    }

    #[test]
    fn test_custom_glyph_is_stored_normalized() {
        let mut table = DigitGlyphTable::new();
        table
            .set_custom('5', DigitAngles::uniform(c(450.0, -90.0)))
            .unwrap();
        assert_eq!(
            table.get('5').unwrap(),
            DigitAngles::uniform(c(RIGHT, LEFT))
        );
    }

    #[test]
    fn test_unknown_digit_is_rejected() {
        let mut table = DigitGlyphTable::new();
        assert!(matches!(
            table.get('x'),
            Err(ClockArtError::UnknownGlyph('x'))
        ));
        assert!(table.set_custom('x', table.neutral()).is_err());
    }
}
