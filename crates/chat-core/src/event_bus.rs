//! Queue of `ChatEvent`s flowing from the client core to the rendering
//! layer.
//!
//! Everything runs on the browser's one thread, so a `VecDeque` behind
//! `Rc<RefCell>` is enough. The client pushes events at any point during a
//! send; the egui layer empties the queue once per frame and applies the
//! whole batch to its projection of the conversation. Nothing blocks and
//! nothing is delivered twice.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chat_types::event::ChatEvent;

/// Handle to a shared event queue. Cloning is cheap; every clone feeds and
/// drains the same queue.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Queue one event. `drain` hands events back in emit order, which the
    /// UI relies on (a placeholder must appear before its updates).
    pub fn emit(&self, event: ChatEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Take every queued event, oldest first, leaving the queue empty.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Whether a drain would return anything; drives repaint requests.
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
