use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{TransitionStrategy, DEFAULT_DURATION};

/// Digit transition parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Interpolation algorithm for digit changes.
    #[schemars(title = "Strategy")]
    pub strategy: TransitionStrategy,
    /// Transition length in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub duration_ms: u64,
}

impl AnimationOptions {
    /// Transition length as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            strategy: TransitionStrategy::default(),
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
        }
    }
}
