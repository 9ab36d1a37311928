//! Runtime options with TOML file support.
//!
//! Animation, clock, and glyph settings are consolidated here. Options
//! deserialize from TOML; every section uses `#[serde(default)]`, so a file
//! may set a single field and leave the rest at their defaults.

mod animation;
mod clock;
mod glyphs;

use std::path::Path;

pub use animation::AnimationOptions;
pub use clock::ClockOptions;
pub use glyphs::GlyphOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ClockArtError;
use crate::glyph::DigitGlyphTable;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Digit transition parameters.
    pub animation: AnimationOptions,
    /// Simulated clock and frame pacing.
    pub clock: ClockOptions,
    /// Custom digit designs.
    #[schemars(skip)]
    pub glyphs: GlyphOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(text: &str) -> Result<Self, ClockArtError> {
        let options: Self = toml::from_str(text)
            .map_err(|e| ClockArtError::OptionsParse(e.to_string()))?;
        // Reject bad glyph data here rather than on first display
        let _ = options.glyph_table()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ClockArtError> {
        let content = std::fs::read_to_string(path).map_err(ClockArtError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Glyph table with the configured overrides applied.
    pub fn glyph_table(&self) -> Result<DigitGlyphTable, ClockArtError> {
        self.glyphs.to_table()
    }
}
