pub mod chat;
pub mod preferences;

pub use chat::{chat_panel, ChatAction};
pub use preferences::{preferences_panel, PreferencesAction, SaveFeedback};
