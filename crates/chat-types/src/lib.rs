pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod prefs;
pub mod thread;
pub mod wire;


pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
