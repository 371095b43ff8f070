//! Request shapes consumed by the backend. The response side is handled
//! generically (content-type classification + JSON field extraction), so
//! only the outbound bodies get concrete types.

use serde::{Deserialize, Serialize};
use crate::message::{Message, Role};

/// Body of `POST /chat?stream=true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub thread_id: String,
    pub message: String,
}

/// Body of `POST /message` — fire-and-forget persistence of one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    pub user_id: String,
    pub thread_id: String,
    pub role: String,
    pub content: String,
}

impl MessageRecord {
    pub fn new(user_id: &str, thread_id: &str, role: Role, content: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            thread_id: thread_id.to_string(),
            role: role.as_str().to_string(),
            content: content.to_string(),
        }
    }

    pub fn for_message(user_id: &str, thread_id: &str, message: &Message) -> Self {
        Self::new(user_id, thread_id, message.role, &message.content)
    }
}
