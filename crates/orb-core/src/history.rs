//! In-memory result history and chat transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::mode::Mode;

/// One completed interaction. Never mutated after creation; lifetime is the
/// app session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub mode: Mode,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    pub fn new(mode: Mode, text: impl Into<String>) -> Self {
        Self {
            mode,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of completed interactions, most recent first.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    items: Vec<HistoryItem>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a completed interaction.
    pub fn prepend(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One message in the free-form chat flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub is_from_user: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_user: true,
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_user: false,
        }
    }
}

/// Number of trailing messages included when building provider requests.
pub const CHAT_WINDOW: usize = 6;

/// Append-only conversation log.
///
/// The full sequence is retained for display; only the bounded recent window
/// is sent to providers.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The last [`CHAT_WINDOW`] messages, oldest first.
    pub fn recent_window(&self) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(CHAT_WINDOW);
        &self.messages[start..]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_most_recent_first() {
        let mut log = HistoryLog::new();
        log.prepend(HistoryItem::new(Mode::Prediction, "first"));
        log.prepend(HistoryItem::new(Mode::Joke, "second"));
        assert_eq!(log.items()[0].text, "second");
        assert_eq!(log.items()[1].text, "first");
    }

    #[test]
    fn chat_window_is_bounded_but_log_is_not() {
        let mut log = ChatLog::new();
        for i in 0..10 {
            log.push(ChatMessage::user(format!("msg {i}")));
        }
        assert_eq!(log.len(), 10);
        let window = log.recent_window();
        assert_eq!(window.len(), CHAT_WINDOW);
        assert_eq!(window[0].text, "msg 4");
        assert_eq!(window[CHAT_WINDOW - 1].text, "msg 9");
    }

    #[test]
    fn chat_window_of_short_log_is_whole_log() {
        let mut log = ChatLog::new();
        log.push(ChatMessage::user("hi"));
        log.push(ChatMessage::agent("hello"));
        assert_eq!(log.recent_window().len(), 2);
    }
}
