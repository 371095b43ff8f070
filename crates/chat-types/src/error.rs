use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    /// Non-2xx response. The raw body text is kept so the fallback policy
    /// can extract a human-readable detail from it.
    #[error("HTTP {status}")]
    Http { status: u16, body: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Stream idle for {0}ms")]
    IdleTimeout(u64),

    #[error("Cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
