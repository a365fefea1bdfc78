//! Interaction mode and state enumerations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The answer mode the user selected for the current interaction cycle.
///
/// The mode determines which prompt template and local fallback table the
/// resolver uses. It is immutable once a cycle starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Short motivational fortune.
    Prediction,
    /// Voice question answered strictly yes or no.
    Question,
    /// Short sarcastic remark.
    Joke,
    /// Birth-data-driven daily reading; bypasses the shake machine.
    Daily,
    /// No mode selected yet.
    None,
}

impl Mode {
    /// True for the mode that captures voice input while the control is held.
    pub fn uses_voice_input(&self) -> bool {
        matches!(self, Mode::Question)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Prediction => "prediction",
            Mode::Question => "question",
            Mode::Joke => "joke",
            Mode::Daily => "daily",
            Mode::None => "none",
        };
        write!(f, "{name}")
    }
}

/// The state of the interaction machine. Exactly one is active per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Voice capture is running while the user holds the input control.
    Recording,
    /// A mode is armed and a shake event will start the animation.
    WaitingForShake,
    /// The animation timeline is running to completion.
    Animating,
    /// A resolved result is on display.
    ShowingResult,
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InteractionState::Idle => "idle",
            InteractionState::Recording => "recording",
            InteractionState::WaitingForShake => "waiting-for-shake",
            InteractionState::Animating => "animating",
            InteractionState::ShowingResult => "showing-result",
        };
        write!(f, "{name}")
    }
}
