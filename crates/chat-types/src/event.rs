use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Events emitted by the chat client core.
/// The UI drains these each frame for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A new message was appended to the history (user or placeholder).
    MessageAppended { message: Message },

    /// An existing message changed. Fired for every streaming delta and
    /// once more when the message is sealed (`streaming` goes false).
    MessageUpdated {
        id: String,
        content: String,
        streaming: bool,
    },

    /// The "currently sending" flag flipped. Drives the send/cancel controls.
    SendingChanged { sending: bool },

    /// The whole history was replaced (session restore or thread deletion).
    HistoryReplaced { messages: Vec<Message> },

    /// Prompt suggestions produced by a sibling component.
    SuggestionsUpdated { items: Vec<String> },
}
