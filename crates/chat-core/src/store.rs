//! Locally persisted client identity and preferences, resolved through the
//! typed `LocalStorePort` rather than ambient key-value storage.

use chat_types::message::new_message_id;
use chat_types::prefs::UserPreferences;
use crate::ports::{LocalStorePort, StoreKey};

/// Return the stored user id, or mint and store an anonymous one.
pub fn resolve_user_id(store: &dyn LocalStorePort) -> String {
    if let Some(id) = store.get(StoreKey::UserId) {
        if !id.is_empty() {
            return id;
        }
    }
    let id = new_message_id("anon");
    store.set(StoreKey::UserId, &id);
    log::info!("minted anonymous user id");
    id
}

/// Load stored preferences; defaults when missing or unreadable.
pub fn load_preferences(store: &dyn LocalStorePort) -> UserPreferences {
    store
        .get(StoreKey::Preferences)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

pub fn save_preferences(store: &dyn LocalStorePort, prefs: &UserPreferences) {
    match serde_json::to_string(prefs) {
        Ok(json) => store.set(StoreKey::Preferences, &json),
        Err(e) => log::warn!("failed to serialize preferences: {}", e),
    }
}
