use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::intensity::IntensityLevel;

/// Client configuration.
///
/// Everything here has a sensible default so a missing config file is
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Intensity level a new conversation starts with.
    #[serde(default)]
    pub default_intensity: IntensityLevel,
    /// Delay before the simulated assistant reply is appended, in
    /// milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

fn default_reply_delay_ms() -> u64 {
    500
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_intensity: IntensityLevel::default(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl ClientConfig {
    /// Returns the reply delay as a `Duration`.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}
