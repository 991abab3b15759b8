//! Voice-record toggle state.

use serde::{Deserialize, Serialize};

/// State of the voice-record toggle.
///
/// Purely a two-state flag: actual audio capture is not implemented,
/// and toggling has no effect beyond its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingState {
    /// Not recording.
    Idle,
    /// Recording toggle is on.
    Recording,
}

impl Default for RecordingState {
    fn default() -> Self {
        RecordingState::Idle
    }
}

impl RecordingState {
    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            RecordingState::Idle => RecordingState::Recording,
            RecordingState::Recording => RecordingState::Idle,
        }
    }
}
