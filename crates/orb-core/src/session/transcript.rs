//! Voice transcription collaborator interface and the single-slot handoff.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Black-box speech-to-text collaborator.
///
/// The session calls `start` on entering the recording state, `stop` on
/// leaving it, and reads `latest_text` exactly once at animation completion.
/// A missing or broken speech engine degrades the question mode to the
/// unrecognized sentinel; it never crashes the interaction cycle.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Begins capturing speech. Clears any previously captured text.
    async fn start(&self, language_hint: &str);
    /// Stops capturing speech.
    async fn stop(&self);
    /// Returns the most recent transcription, empty if none.
    async fn latest_text(&self) -> String;
}

/// Single-writer/single-reader cell holding the latest transcription.
///
/// The speech engine writes into it from its recognition callbacks; the
/// session reads it once per cycle. One active recording at a time means no
/// queue or backpressure is needed.
#[derive(Clone, Default)]
pub struct TranscriptSlot {
    text: Arc<Mutex<String>>,
}

impl TranscriptSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the slot with newly recognized text.
    pub async fn publish(&self, text: impl Into<String>) {
        *self.text.lock().await = text.into();
    }

    /// Clears the slot.
    pub async fn clear(&self) {
        self.text.lock().await.clear();
    }

    /// Returns the current text without clearing it.
    pub async fn peek(&self) -> String {
        self.text.lock().await.clone()
    }
}

/// Transcriber backed by a [`TranscriptSlot`].
///
/// Hosts push recognized text into the slot from their speech engine; this
/// adapter gives the session the start/stop/read contract over it.
#[derive(Clone, Default)]
pub struct SlotTranscriber {
    slot: TranscriptSlot,
}

impl SlotTranscriber {
    pub fn new(slot: TranscriptSlot) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> TranscriptSlot {
        self.slot.clone()
    }
}

#[async_trait]
impl Transcriber for SlotTranscriber {
    async fn start(&self, _language_hint: &str) {
        // A new capture must never replay text from the previous one.
        self.slot.clear().await;
    }

    async fn stop(&self) {}

    async fn latest_text(&self) -> String {
        self.slot.peek().await
    }
}

/// Transcriber for hosts without a speech engine; always returns empty text.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTranscriber;

#[async_trait]
impl Transcriber for NullTranscriber {
    async fn start(&self, _language_hint: &str) {}

    async fn stop(&self) {}

    async fn latest_text(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_clears_previous_capture() {
        let transcriber = SlotTranscriber::default();
        transcriber.slot().publish("old question").await;
        transcriber.start("en-US").await;
        assert_eq!(transcriber.latest_text().await, "");
    }

    #[tokio::test]
    async fn latest_text_returns_published_value() {
        let transcriber = SlotTranscriber::default();
        transcriber.start("en-US").await;
        transcriber.slot().publish("will it rain").await;
        transcriber.stop().await;
        assert_eq!(transcriber.latest_text().await, "will it rain");
    }
}
