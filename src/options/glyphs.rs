use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ClockArtError;
use crate::glyph::{DigitAngles, DigitGlyphTable};

/// Custom digit designs, keyed by the digit character.
///
/// ```toml
/// [glyphs.overrides]
/// "7" = [
///     { hour = 90, minute = 270 }, { hour = 270, minute = 180 },
///     { hour = 225, minute = 225 }, { hour = 0, minute = 180 },
///     { hour = 225, minute = 225 }, { hour = 0, minute = 0 },
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GlyphOptions {
    /// Digit key (`"0"`..`"9"`) to six-clock pose.
    pub overrides: BTreeMap<String, DigitAngles>,
}

impl GlyphOptions {
    /// Build a glyph table with these overrides applied.
    pub fn to_table(&self) -> Result<DigitGlyphTable, ClockArtError> {
        let mut table = DigitGlyphTable::new();
        for (key, pose) in &self.overrides {
            let mut chars = key.chars();
            let (Some(digit), None) = (chars.next(), chars.next()) else {
                return Err(ClockArtError::OptionsParse(format!(
                    "glyph override key {key:?} is not a single digit"
                )));
            };
            table.set_custom(digit, *pose)?;
        }
        Ok(table)
    }
}
