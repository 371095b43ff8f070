use serde::{Deserialize, Serialize};

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single message in the conversation history.
///
/// User and system messages are fully formed at creation and never mutated.
/// Assistant messages start as an empty placeholder with `streaming = true`
/// and are filled incrementally, then sealed exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: String,
    /// Transient: true only while the assistant reply is still arriving.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub streaming: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: new_message_id("u"),
            role: Role::User,
            content: text.into(),
            created_at: now_rfc3339(),
            streaming: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: new_message_id("a"),
            role: Role::Assistant,
            content: text.into(),
            created_at: now_rfc3339(),
            streaming: false,
        }
    }

    /// The mutable assistant entry appended at send time.
    pub fn assistant_placeholder() -> Self {
        Self {
            id: new_message_id("a"),
            role: Role::Assistant,
            content: String::new(),
            created_at: now_rfc3339(),
            streaming: true,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            id: new_message_id("s"),
            role: Role::System,
            content: text.into(),
            created_at: now_rfc3339(),
            streaming: false,
        }
    }
}

/// Client-side message id: prefix + millisecond timestamp + random suffix.
/// The suffix keeps ids unique under rapid sequential creation.
pub fn new_message_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let salt = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}{}", prefix, millis, &salt[..6])
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
