//! Intensity levels for the assistant's rhetorical stance.
//!
//! An intensity level selects how forcefully the assistant argues against
//! a purchase. The set is closed: five system-defined levels, each with a
//! display label and a short description shown in the level picker.
//!
//! The selected level is carried as explicit engine configuration so a
//! reply policy can condition on it later; the current reply generation
//! does not read it.

use serde::{Deserialize, Serialize};

/// The assistant's rhetorical stance when arguing against a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Just a friendly reminder.
    GentleNudge,
    /// Let's talk this through.
    FriendlyDebate,
    /// I really think you should reconsider.
    StubbornFriend,
    /// But have you considered...
    DevilsAdvocate,
    /// I will destroy your arguments.
    HardcoreSteelmanning,
}

impl Default for IntensityLevel {
    fn default() -> Self {
        IntensityLevel::StubbornFriend
    }
}

impl IntensityLevel {
    /// Returns every level, in escalating order.
    pub fn all() -> [IntensityLevel; 5] {
        [
            IntensityLevel::GentleNudge,
            IntensityLevel::FriendlyDebate,
            IntensityLevel::StubbornFriend,
            IntensityLevel::DevilsAdvocate,
            IntensityLevel::HardcoreSteelmanning,
        ]
    }

    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            IntensityLevel::GentleNudge => "Gentle Nudge",
            IntensityLevel::FriendlyDebate => "Friendly Debate",
            IntensityLevel::StubbornFriend => "Stubborn Friend",
            IntensityLevel::DevilsAdvocate => "Devil's Advocate",
            IntensityLevel::HardcoreSteelmanning => "Hardcore Steelmanning",
        }
    }

    /// Returns the short description shown under the label.
    pub fn description(&self) -> &'static str {
        match self {
            IntensityLevel::GentleNudge => "Just a friendly reminder",
            IntensityLevel::FriendlyDebate => "Let's talk this through",
            IntensityLevel::StubbornFriend => "I really think you should reconsider",
            IntensityLevel::DevilsAdvocate => "But have you considered...",
            IntensityLevel::HardcoreSteelmanning => "I will destroy your arguments",
        }
    }

    /// Looks up a level by its display label.
    ///
    /// # Returns
    ///
    /// - `Some(level)` if the label matches one of the five levels
    /// - `None` otherwise
    pub fn from_label(label: &str) -> Option<IntensityLevel> {
        Self::all().into_iter().find(|level| level.label() == label)
    }
}

impl std::fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
