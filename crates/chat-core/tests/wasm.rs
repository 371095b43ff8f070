//! Browser-target smoke tests. The full behavioral suite runs natively in
//! `src/tests.rs`; these verify the pure pipeline pieces compile and behave
//! identically under wasm32.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use chat_core::delta::reduce_frame;
use chat_core::fallback::{self, ABORT_MARKER, OFFLINE_SUFFIX};
use chat_core::sse::FrameDecoder;
use chat_types::prefs::UserPreferences;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn decoder_reassembles_split_frames() {
    let mut decoder = FrameDecoder::new();
    assert!(decoder.feed(b"data: {\"delta\": \"he").is_empty());
    let frames = decoder.feed(b"llo\"}\n\n");
    assert_eq!(frames.len(), 1);

    let reduction = reduce_frame(&frames[0]);
    assert_eq!(reduction.increments, vec!["hello"]);
    assert!(!reduction.done);
}

#[wasm_bindgen_test]
fn done_sentinel_terminates() {
    let reduction = reduce_frame("data: [DONE]");
    assert!(reduction.done);
    assert!(reduction.increments.is_empty());
}

#[wasm_bindgen_test]
fn fallback_replies_are_never_empty() {
    let prefs = UserPreferences::default();
    assert!(!fallback::canned_reply("hi", &prefs).is_empty());
    assert!(fallback::offline_reply("hi", &prefs).ends_with(OFFLINE_SUFFIX));
    assert_eq!(ABORT_MARKER, "(stream aborted)");
}

#[wasm_bindgen_test]
fn http_detail_prefers_server_reply() {
    assert_eq!(
        fallback::http_error_detail(429, Some(r#"{"reply": "rate limited"}"#)),
        "rate limited"
    );
    assert_eq!(fallback::http_error_detail(500, None), "Assistant error (500)");
}
