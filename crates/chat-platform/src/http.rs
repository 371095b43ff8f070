//! HTTP chat backend adapter.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility. A 2xx
//! response is classified by its `content-type`: `text/event-stream`
//! bodies are surfaced as a live byte stream read chunk by chunk off the
//! underlying `ReadableStream`, anything else as raw body text.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::ReadableStreamDefaultReader;

use chat_core::ports::{ByteStream, ChatBody, ChatPort};
use chat_types::{
    ChatError, Result,
    config::ClientConfig,
    wire::{ChatRequest, MessageRecord},
};

/// Backend client speaking the therapy-assistant wire protocol over fetch.
pub struct GlooChatBackend {
    config: ClientConfig,
}

impl GlooChatBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base.trim_end_matches('/'), path)
    }
}

#[async_trait(?Send)]
impl ChatPort for GlooChatBackend {
    async fn send_chat(&self, req: &ChatRequest) -> Result<ChatBody> {
        let url = self.url("/chat?stream=true");

        let response = Request::post(&url)
            .header("Accept", "text/event-stream")
            .json(req)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.ok().filter(|t| !t.is_empty());
            return Err(ChatError::Http { status, body });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .unwrap_or_default();

        if is_event_stream(&content_type) {
            Ok(ChatBody::EventStream(body_stream(
                &response,
                self.config.stream_idle_timeout_ms,
            )?))
        } else {
            let text = response
                .text()
                .await
                .map_err(|e| ChatError::Network(e.to_string()))?;
            Ok(ChatBody::Json(text))
        }
    }

    async fn persist_message(&self, record: &MessageRecord) -> Result<()> {
        let url = self.url("/message");

        let response = Request::post(&url)
            .json(record)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ChatError::Http {
                status: response.status(),
                body: response.text().await.ok().filter(|t| !t.is_empty()),
            });
        }
        Ok(())
    }
}

/// Media types are case-insensitive and may carry parameters
/// (`Text/Event-Stream; charset=utf-8` must still stream).
fn is_event_stream(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .contains("text/event-stream")
}

/// Owns the body reader and tells the browser to release the connection
/// when dropped mid-stream. Dropping the byte stream is how a cancelled or
/// superseded send lets go of the response body, so the cancel has to
/// happen here, not in the read loop.
struct BodyReader {
    reader: ReadableStreamDefaultReader,
    finished: bool,
}

impl BodyReader {
    fn new(reader: ReadableStreamDefaultReader) -> Self {
        Self {
            reader,
            finished: false,
        }
    }
}

impl Drop for BodyReader {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.reader.cancel();
        }
    }
}

/// Wrap the response's `ReadableStream` as a Rust byte stream. Each read is
/// raced against the idle timeout; a timeout ends the stream with
/// `ChatError::IdleTimeout` and the reader guard cancels the body.
fn body_stream(response: &Response, idle_timeout_ms: Option<u32>) -> Result<ByteStream> {
    let raw = response
        .body()
        .ok_or_else(|| ChatError::Network("streaming response had no body".to_string()))?;
    let reader = BodyReader::new(raw.get_reader().unchecked_into());

    let stream = futures::stream::unfold(Some(reader), move |guard| async move {
        let mut guard = guard?;
        match read_chunk(&guard.reader, idle_timeout_ms).await {
            Ok(Some(bytes)) => Some((Ok(bytes), Some(guard))),
            Ok(None) => {
                // Clean end: the browser already closed the body.
                guard.finished = true;
                None
            }
            Err(e) => Some((Err(e), None)),
        }
    });
    Ok(Box::pin(stream))
}

/// One `reader.read()` round trip. `Ok(None)` is a clean end of stream.
async fn read_chunk(
    reader: &ReadableStreamDefaultReader,
    idle_timeout_ms: Option<u32>,
) -> Result<Option<Vec<u8>>> {
    let read = JsFuture::from(reader.read());

    let result = match idle_timeout_ms {
        Some(ms) => {
            match future::select(Box::pin(read), Box::pin(TimeoutFuture::new(ms))).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => {
                    log::warn!("stream idle for {}ms, aborting read", ms);
                    return Err(ChatError::IdleTimeout(ms as u64));
                }
            }
        }
        None => read.await,
    };

    let value = result.map_err(|e| ChatError::Network(js_error_text(&e)))?;

    let done = Reflect::get(&value, &JsValue::from_str("done"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(true);
    if done {
        return Ok(None);
    }

    let chunk = Reflect::get(&value, &JsValue::from_str("value"))
        .map_err(|e| ChatError::Network(js_error_text(&e)))?;
    Ok(Some(Uint8Array::new(&chunk).to_vec()))
}

fn js_error_text(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use futures::StreamExt;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn event_stream_content_type_is_case_insensitive() {
        assert!(is_event_stream("text/event-stream"));
        assert!(is_event_stream("Text/Event-Stream; charset=utf-8"));
        assert!(is_event_stream("TEXT/EVENT-STREAM"));
        assert!(!is_event_stream("application/json"));
        assert!(!is_event_stream("text/html"));
    }

    #[wasm_bindgen_test]
    async fn body_stream_reads_whole_body() {
        let raw = web_sys::Response::new_with_opt_str(Some("data: hi\n\n")).unwrap();
        let response = Response::from(raw);

        let mut stream = body_stream(&response, None).unwrap();
        let mut collected = Vec::new();
        while let Some(chunk) = stream.next().await {
            collected.extend(chunk.unwrap());
        }
        assert_eq!(String::from_utf8(collected).unwrap(), "data: hi\n\n");
    }

    #[wasm_bindgen_test]
    async fn dropped_reader_cancels_the_body() {
        let raw = web_sys::Response::new_with_opt_str(Some("data: never read\n\n")).unwrap();
        let body = raw.body().unwrap();
        let reader: ReadableStreamDefaultReader = body.get_reader().unchecked_into();
        let handle = reader.clone();

        let guard = BodyReader::new(reader);
        drop(guard);

        // A cancelled reader resolves every read as done, without data.
        let result = JsFuture::from(handle.read()).await.unwrap();
        let done = Reflect::get(&result, &JsValue::from_str("done"))
            .unwrap()
            .as_bool()
            .unwrap_or(false);
        assert!(done);
    }
}
