//! Browser adapters for the chat-core ports.
//!
//! Everything here touches wasm-bindgen APIs; the core stays pure.

pub mod http;
pub mod spawn;
pub mod storage;

pub use http::GlooChatBackend;
pub use spawn::LocalSpawner;
pub use storage::{auto_detect_store, BrowserLocalStore, MemoryStore};
