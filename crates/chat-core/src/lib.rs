pub mod delta;
pub mod event_bus;
pub mod fallback;
pub mod persist;
pub mod ports;
pub mod session;
pub mod sse;
pub mod store;
