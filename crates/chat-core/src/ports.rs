//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use std::future::Future;
use std::pin::Pin;
use async_trait::async_trait;
use futures::Stream;
use chat_types::{
    Result,
    wire::{ChatRequest, MessageRecord},
};

// ─── Chat Transport Port ─────────────────────────────────────

/// Raw body chunks from a streaming response. A chunk may split a UTF-8
/// sequence or an SSE frame at any byte; the decoder reassembles them.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>>>>>;

/// A successful (2xx) chat response, classified by content-type.
pub enum ChatBody {
    /// `content-type: text/event-stream` — live SSE bytes.
    EventStream(ByteStream),
    /// Anything else — the raw body text, expected to be a single JSON
    /// object carrying a `reply` or `message` field.
    Json(String),
}

#[async_trait(?Send)]
pub trait ChatPort {
    /// `POST {base}/chat?stream=true`. Non-2xx statuses surface as
    /// `ChatError::Http` with the body text preserved.
    async fn send_chat(&self, req: &ChatRequest) -> Result<ChatBody>;

    /// `POST {base}/message`. The response body is ignored by callers.
    async fn persist_message(&self, record: &MessageRecord) -> Result<()>;
}

// ─── Task Spawner Port ───────────────────────────────────────

pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Spawns a detached task on the single-threaded runtime.
/// Browser impl is `wasm_bindgen_futures::spawn_local`; tests drive
/// tasks inline.
pub trait SpawnPort {
    fn spawn(&self, task: LocalTask);
}

// ─── Local Store Port ────────────────────────────────────────

/// Keys for locally persisted client state. Typed so the core never touches
/// ambient string-keyed storage directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    UserId,
    Preferences,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::UserId => "user_id",
            StoreKey::Preferences => "preferences",
        }
    }
}

/// Minimal get/set/clear over typed keys. Browser impl wraps
/// `window.localStorage`; an in-memory impl backs tests and headless runs.
pub trait LocalStorePort {
    fn get(&self, key: StoreKey) -> Option<String>;
    fn set(&self, key: StoreKey, value: &str);
    fn clear(&self, key: StoreKey);
}
