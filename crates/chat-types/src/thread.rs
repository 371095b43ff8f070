use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    Active,
    Paused,
    Archived,
}

/// A conversation thread. Thread selection lives outside the streaming core;
/// this type is the shape handed in by that collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub thread_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ThreadStatus,
    pub created_at: String,
    pub last_active_at: String,
}

impl Thread {
    pub fn new(thread_id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            thread_id: thread_id.into(),
            title: title.into(),
            description: String::new(),
            status: ThreadStatus::Active,
            created_at: now.clone(),
            last_active_at: now,
        }
    }
}
