//! WASM-target tests for chat-platform (Node.js runtime).
//!
//! Exercises MemoryStore and the URL/localStorage-free pieces under
//! wasm32-unknown-unknown via `wasm-pack test --node`. Fetch-backed
//! tests require a browser and a live backend.

use wasm_bindgen_test::*;

use chat_core::ports::{LocalStorePort, SpawnPort, StoreKey};
use chat_core::store::{load_preferences, resolve_user_id, save_preferences};
use chat_platform::spawn::LocalSpawner;
use chat_platform::storage::MemoryStore;
use chat_types::prefs::{TonePreference, UserPreferences};

use std::cell::Cell;
use std::rc::Rc;

// ─── MemoryStore Tests ───────────────────────────────────

#[wasm_bindgen_test]
fn memory_store_get_missing() {
    let store = MemoryStore::new();
    assert!(store.get(StoreKey::UserId).is_none());
}

#[wasm_bindgen_test]
fn memory_store_set_and_get() {
    let store = MemoryStore::new();
    store.set(StoreKey::UserId, "u1");
    assert_eq!(store.get(StoreKey::UserId), Some("u1".to_string()));
}

#[wasm_bindgen_test]
fn memory_store_overwrite() {
    let store = MemoryStore::new();
    store.set(StoreKey::UserId, "first");
    store.set(StoreKey::UserId, "second");
    assert_eq!(store.get(StoreKey::UserId), Some("second".to_string()));
}

#[wasm_bindgen_test]
fn memory_store_clear() {
    let store = MemoryStore::new();
    store.set(StoreKey::Preferences, "{}");
    store.clear(StoreKey::Preferences);
    assert!(store.get(StoreKey::Preferences).is_none());
}

#[wasm_bindgen_test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::new();
    store.set(StoreKey::UserId, "u1");
    store.set(StoreKey::Preferences, "{}");
    store.clear(StoreKey::UserId);
    assert!(store.get(StoreKey::UserId).is_none());
    assert_eq!(store.get(StoreKey::Preferences), Some("{}".to_string()));
}

// ─── Identity / Preferences over MemoryStore ─────────────

#[wasm_bindgen_test]
fn anonymous_identity_is_stable() {
    let store = MemoryStore::new();
    let id = resolve_user_id(&store);
    assert!(id.starts_with("anon"));
    assert_eq!(resolve_user_id(&store), id);
}

#[wasm_bindgen_test]
fn preferences_roundtrip() {
    let store = MemoryStore::new();
    let prefs = UserPreferences {
        default_tone: TonePreference::Direct,
        ..UserPreferences::default()
    };
    save_preferences(&store, &prefs);
    assert_eq!(load_preferences(&store), prefs);
}

// ─── Spawner Tests ───────────────────────────────────────

#[wasm_bindgen_test]
async fn spawner_runs_task() {
    let ran = Rc::new(Cell::new(false));
    let flag = ran.clone();
    LocalSpawner.spawn(Box::pin(async move {
        flag.set(true);
    }));

    // Yield so the spawned microtask gets to run.
    gloo_timers::future::TimeoutFuture::new(0).await;
    assert!(ran.get());
}
