//! The interaction session: modes, state machine and its collaborators.

pub mod animation;
pub mod event;
pub mod haptics;
pub mod manager;
pub mod mode;
pub mod transcript;


pub use animation::AnimationTimeline;
pub use event::SessionEvent;
pub use haptics::{HapticSink, NullHaptics};
pub use manager::{InteractionSession, ModeSelection};
pub use mode::{InteractionState, Mode};
pub use transcript::{NullTranscriber, SlotTranscriber, Transcriber, TranscriptSlot};
