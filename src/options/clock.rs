use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::display::MIN_SPEED;

/// Simulated clock and frame pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Clock", inline)]
#[serde(default)]
pub struct ClockOptions {
    /// Simulated seconds per real second. Out-of-range values are clamped.
    #[schemars(title = "Speed", range(min = 1, max = 60), extend("step" = 1))]
    pub speed: u32,
    /// Frame rate of the host loop.
    #[schemars(title = "Target FPS", range(min = 1, max = 240), extend("step" = 1))]
    pub target_fps: u32,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            speed: MIN_SPEED,
            target_fps: 60,
        }
    }
}
