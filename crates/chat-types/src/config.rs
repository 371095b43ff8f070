use serde::{Deserialize, Serialize};

/// Client configuration for the chat transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL, no trailing slash.
    pub api_base: String,
    /// Abort a streaming body read that stays silent for this long.
    /// `None` disables the timeout.
    pub stream_idle_timeout_ms: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000".to_string(),
            stream_idle_timeout_ms: Some(30_000),
        }
    }
}
