//! Session events published to the presentation layer.

use serde::Serialize;

use crate::history::HistoryItem;
use crate::session::mode::InteractionState;

/// In-process notifications the presentation layer renders from.
///
/// No wire format is required; the serde derive exists for hosts that bridge
/// events across a process boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    /// The interaction machine moved to a new state.
    StateChanged { state: InteractionState },
    /// One animation frame should be displayed.
    Frame { index: u32 },
    /// The cycle completed and this text is the result.
    ResultReady { text: String },
    /// A completed interaction was recorded.
    HistoryAppended { item: HistoryItem },
}
