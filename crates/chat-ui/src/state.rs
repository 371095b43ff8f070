//! UI-level state that drives rendering.
//! This is a read-only projection of the chat client state,
//! updated each frame by draining the EventBus.

use chat_types::event::ChatEvent;
use chat_types::message::Message;

/// State visible to UI panels
pub struct UiState {
    /// Displayed conversation, in arrival order
    pub messages: Vec<Message>,
    /// True while a send is in flight; disables the send control
    pub sending: bool,
    /// Prompt suggestion chips below the input
    pub suggestions: Vec<String>,
    /// Input field content
    pub input_text: String,
    /// Whether the preferences panel is open
    pub show_preferences: bool,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            sending: false,
            suggestions: Vec::new(),
            input_text: String::new(),
            show_preferences: false,
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::MessageAppended { message } => {
                    self.messages.push(message);
                }
                ChatEvent::MessageUpdated {
                    id,
                    content,
                    streaming,
                } => {
                    if let Some(m) = self.messages.iter_mut().find(|m| m.id == id) {
                        m.content = content;
                        m.streaming = streaming;
                    }
                }
                ChatEvent::SendingChanged { sending } => {
                    self.sending = sending;
                    self.status_text = if sending {
                        "Assistant is replying...".to_string()
                    } else {
                        "Ready".to_string()
                    };
                }
                ChatEvent::HistoryReplaced { messages } => {
                    self.messages = messages;
                }
                ChatEvent::SuggestionsUpdated { items } => {
                    self.suggestions = items;
                }
            }
        }
    }

    /// True while an assistant bubble is still filling in.
    pub fn has_streaming_message(&self) -> bool {
        self.messages.iter().any(|m| m.streaming)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
