//! Fallback/error policy — what the placeholder gets sealed with when the
//! backend cannot deliver a real reply.

use chat_types::prefs::{DepthLevel, TonePreference, UserPreferences};

/// Fixed marker text for a user-cancelled stream.
pub const ABORT_MARKER: &str = "(stream aborted)";

/// Suffix distinguishing an offline fallback from a server-reported error.
pub const OFFLINE_SUFFIX: &str = " (offline fallback)";

/// Deterministic local reply used whenever the backend is unreachable or
/// errors. Pure function of the user text and stored preferences; never
/// empty, performs no I/O.
pub fn canned_reply(text: &str, prefs: &UserPreferences) -> String {
    let lowered = text.to_lowercase();
    if lowered.contains("decide") || lowered.contains("decision") || lowered.contains("choice") {
        return "Let's simplify this. What decision are you actually trying to make?".to_string();
    }
    if prefs.default_tone == TonePreference::Direct {
        return "Let's simplify this. What decision are you actually trying to make?".to_string();
    }
    if prefs.depth_level == DepthLevel::Deep {
        return "Let me reflect this back. It sounds like you're torn between safety and growth. \
                What's driving that tension right now?"
            .to_string();
    }
    "I'm hearing a few competing thoughts here. Want to slow down and look at them one by one?"
        .to_string()
}

/// Canned reply plus a parenthetical server error detail, for non-2xx
/// responses.
pub fn server_error_reply(text: &str, prefs: &UserPreferences, detail: &str) -> String {
    format!("{}\n\n({})", canned_reply(text, prefs), detail)
}

/// Canned reply with the offline suffix, for transport failures.
pub fn offline_reply(text: &str, prefs: &UserPreferences) -> String {
    format!("{}{}", canned_reply(text, prefs), OFFLINE_SUFFIX)
}

/// Human-readable detail for a non-2xx response: the JSON body's `reply` or
/// `message` field when parseable, else a generic status-coded message.
pub fn http_error_detail(status: u16, body: Option<&str>) -> String {
    if let Some(body) = body {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(reply) = extract_reply_field(&value) {
                return reply;
            }
        }
    }
    format!("Assistant error ({})", status)
}

/// Pull the reply text out of a non-streaming JSON body: `reply` wins over
/// `message`; anything else is treated as malformed.
pub fn extract_reply(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    extract_reply_field(&value)
}

fn extract_reply_field(value: &serde_json::Value) -> Option<String> {
    for field in ["reply", "message"] {
        if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}
