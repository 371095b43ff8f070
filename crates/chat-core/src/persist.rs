//! Fire-and-forget message persistence.
//!
//! Contract: non-blocking, at-most-once, no retry. A failed write is logged
//! at debug and dropped — chat responsiveness takes priority over
//! persistence durability, and a failure must never block, delay, or alter
//! the streaming path.

use std::rc::Rc;
use chat_types::wire::MessageRecord;
use crate::ports::{ChatPort, SpawnPort};

#[derive(Clone)]
pub struct PersistQueue {
    port: Rc<dyn ChatPort>,
    spawner: Rc<dyn SpawnPort>,
}

impl PersistQueue {
    pub fn new(port: Rc<dyn ChatPort>, spawner: Rc<dyn SpawnPort>) -> Self {
        Self { port, spawner }
    }

    /// Hand one record to the backend without awaiting the result.
    pub fn enqueue(&self, record: MessageRecord) {
        let port = self.port.clone();
        self.spawner.spawn(Box::pin(async move {
            if let Err(e) = port.persist_message(&record).await {
                log::debug!("message persistence dropped ({} {}): {}", record.role, record.thread_id, e);
            }
        }));
    }
}
