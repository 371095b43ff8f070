//! Local store backends.
//!
//! `BrowserLocalStore` wraps `window.localStorage`; `MemoryStore` backs
//! headless runs and tests. Auto-detection falls back to memory when
//! localStorage is blocked (private browsing, storage policies).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chat_core::ports::{LocalStorePort, StoreKey};

/// Namespace prefix so the client's keys never collide with other apps on
/// the same origin.
const KEY_PREFIX: &str = "chat.";

pub struct BrowserLocalStore {
    storage: web_sys::Storage,
}

impl BrowserLocalStore {
    /// Fails when localStorage is unavailable or access is denied.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }

    fn full_key(key: StoreKey) -> String {
        format!("{}{}", KEY_PREFIX, key.as_str())
    }
}

impl LocalStorePort for BrowserLocalStore {
    fn get(&self, key: StoreKey) -> Option<String> {
        self.storage.get_item(&Self::full_key(key)).ok().flatten()
    }

    fn set(&self, key: StoreKey, value: &str) {
        if let Err(e) = self.storage.set_item(&Self::full_key(key), value) {
            log::warn!("localStorage write failed for {}: {:?}", key.as_str(), e);
        }
    }

    fn clear(&self, key: StoreKey) {
        let _ = self.storage.remove_item(&Self::full_key(key));
    }
}

/// Not persistent across page reloads; identity and preferences reset.
pub struct MemoryStore {
    data: RefCell<HashMap<StoreKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorePort for MemoryStore {
    fn get(&self, key: StoreKey) -> Option<String> {
        self.data.borrow().get(&key).cloned()
    }

    fn set(&self, key: StoreKey, value: &str) {
        self.data.borrow_mut().insert(key, value.to_string());
    }

    fn clear(&self, key: StoreKey) {
        self.data.borrow_mut().remove(&key);
    }
}

/// Pick the best available store. Returns a trait object so callers are
/// backend-agnostic.
pub fn auto_detect_store() -> Rc<dyn LocalStorePort> {
    match BrowserLocalStore::open() {
        Some(store) => {
            log::info!("Local store backend: localStorage");
            Rc::new(store)
        }
        None => {
            log::warn!("localStorage unavailable, falling back to memory");
            Rc::new(MemoryStore::new())
        }
    }
}
