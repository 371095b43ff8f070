//! Message lifecycle state machine.
//!
//! `ChatClient` owns the ordered message log and at most one in-flight
//! stream session. A send appends the user message, appends an empty
//! assistant placeholder with `streaming = true`, then runs the exchange:
//! each delta mutates the placeholder in place, and the placeholder is
//! sealed exactly once — with real content, fallback content, or the abort
//! marker.
//!
//! Single-threaded: all mutation happens between await points, guarded by
//! short-lived RefCell borrows so `cancel()` can run while a send is
//! suspended on I/O.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable, Aborted};
use futures::StreamExt;

use chat_types::{
    ChatError,
    event::ChatEvent,
    message::{Message, Role},
    prefs::UserPreferences,
    wire::{ChatRequest, MessageRecord},
};

use crate::delta::reduce_frame;
use crate::event_bus::EventBus;
use crate::fallback::{self, ABORT_MARKER};
use crate::persist::PersistQueue;
use crate::ports::{ByteStream, ChatBody, ChatPort};
use crate::sse::FrameDecoder;

/// Where the current send is, if anywhere. A message's own terminal state
/// lives on the message (`streaming = false`); the client returns to `Idle`
/// for the next send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPhase {
    Idle,
    AwaitingResponse,
    Streaming,
    NonStreamingPending,
}

/// Conversation scope and preferences for one send, resolved by external
/// collaborators (thread selection, stored identity).
#[derive(Debug, Clone)]
pub struct SendContext {
    pub user_id: String,
    pub thread_id: String,
    pub preferences: UserPreferences,
}

/// The ephemeral state of one outstanding request. Dropped when the stream
/// ends so later cancellation attempts are no-ops.
struct StreamSession {
    seq: u64,
    message_id: String,
    abort: AbortHandle,
}

struct ClientState {
    messages: Vec<Message>,
    phase: SendPhase,
    session: Option<StreamSession>,
    next_seq: u64,
}

/// The streaming chat client. Clone-cheap via Rc; clones share state.
#[derive(Clone)]
pub struct ChatClient {
    state: Rc<RefCell<ClientState>>,
    port: Rc<dyn ChatPort>,
    persist: PersistQueue,
    bus: EventBus,
}

impl ChatClient {
    pub fn new(port: Rc<dyn ChatPort>, persist: PersistQueue, bus: EventBus) -> Self {
        Self {
            state: Rc::new(RefCell::new(ClientState {
                messages: Vec::new(),
                phase: SendPhase::Idle,
                session: None,
                next_seq: 1,
            })),
            port,
            persist,
            bus,
        }
    }

    /// Snapshot of the message log, for rendering.
    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().messages.clone()
    }

    pub fn phase(&self) -> SendPhase {
        self.state.borrow().phase
    }

    /// True while a send is in progress. The UI disables the send control
    /// on this flag.
    pub fn is_sending(&self) -> bool {
        self.state.borrow().phase != SendPhase::Idle
    }

    /// True while there is a stream that `cancel()` would abort.
    pub fn can_cancel(&self) -> bool {
        self.state.borrow().session.is_some()
    }

    /// Replace the history with a restored session's messages.
    pub fn load_history(&self, messages: Vec<Message>) {
        self.cancel();
        self.state.borrow_mut().messages = messages.clone();
        self.bus.emit(ChatEvent::HistoryReplaced { messages });
    }

    /// Drop the whole history (thread deletion collaborator).
    pub fn clear_history(&self) {
        self.cancel();
        self.state.borrow_mut().messages.clear();
        self.bus.emit(ChatEvent::HistoryReplaced { messages: Vec::new() });
    }

    /// Abort the in-flight stream, if any. The placeholder is sealed with
    /// the abort marker synchronously, so the at-most-one-streaming-message
    /// invariant holds before the aborted task is ever polled again.
    /// Idempotent; a no-op once the session is gone.
    pub fn cancel(&self) {
        let session = self.state.borrow_mut().session.take();
        let Some(session) = session else { return };
        session.abort.abort();
        self.seal(&session.message_id, ABORT_MARKER.to_string());
        self.state.borrow_mut().phase = SendPhase::Idle;
        self.bus.emit(ChatEvent::SendingChanged { sending: false });
    }

    /// Issue one chat exchange. Resolves once the assistant placeholder is
    /// sealed; every failure class is converted into sealed content, so this
    /// never returns an error.
    pub async fn send(&self, raw: &str, ctx: &SendContext) {
        let text = raw.trim().to_string();
        if text.is_empty() {
            return;
        }

        // A new send supersedes any in-flight stream before touching history.
        self.cancel();

        let user_msg = Message::user(text.clone());
        self.persist.enqueue(MessageRecord::for_message(
            &ctx.user_id,
            &ctx.thread_id,
            &user_msg,
        ));
        self.append(user_msg);

        let placeholder = Message::assistant_placeholder();
        let assistant_id = placeholder.id.clone();
        self.append(placeholder);

        let (abort, registration) = AbortHandle::new_pair();
        let seq = {
            let mut st = self.state.borrow_mut();
            let seq = st.next_seq;
            st.next_seq += 1;
            st.session = Some(StreamSession {
                seq,
                message_id: assistant_id.clone(),
                abort,
            });
            st.phase = SendPhase::AwaitingResponse;
            seq
        };
        self.bus.emit(ChatEvent::SendingChanged { sending: true });

        let exchange = self.run_exchange(&text, ctx, &assistant_id);
        let echo = match Abortable::new(exchange, registration).await {
            Ok(echo) => echo,
            // cancel() already sealed the placeholder with the abort marker.
            Err(Aborted) => None,
        };

        if let Some(content) = echo {
            self.persist.enqueue(MessageRecord::new(
                &ctx.user_id,
                &ctx.thread_id,
                Role::Assistant,
                &content,
            ));
        }

        // Only clear the session if it is still ours; a superseding send
        // must not be clobbered by this one's epilogue.
        let still_ours = {
            let mut st = self.state.borrow_mut();
            if st.session.as_ref().map(|s| s.seq) == Some(seq) {
                st.session = None;
                st.phase = SendPhase::Idle;
                true
            } else {
                false
            }
        };
        if still_ours {
            self.bus.emit(ChatEvent::SendingChanged { sending: false });
        }
    }

    /// Run the request and seal the placeholder. Returns the final content
    /// when it should be echoed back to the backend.
    async fn run_exchange(
        &self,
        text: &str,
        ctx: &SendContext,
        assistant_id: &str,
    ) -> Option<String> {
        let req = ChatRequest {
            user_id: ctx.user_id.clone(),
            thread_id: ctx.thread_id.clone(),
            message: text.to_string(),
        };

        let body = match self.port.send_chat(&req).await {
            Ok(body) => body,
            Err(ChatError::Http { status, body }) => {
                let detail = fallback::http_error_detail(status, body.as_deref());
                log::warn!("chat request rejected: HTTP {} ({})", status, detail);
                self.seal(
                    assistant_id,
                    fallback::server_error_reply(text, &ctx.preferences, &detail),
                );
                return None;
            }
            Err(ChatError::Cancelled) => {
                self.seal(assistant_id, ABORT_MARKER.to_string());
                return None;
            }
            Err(e) => {
                log::warn!("chat request failed: {}", e);
                self.seal(assistant_id, fallback::offline_reply(text, &ctx.preferences));
                return None;
            }
        };

        match body {
            ChatBody::EventStream(stream) => {
                self.consume_stream(stream, text, ctx, assistant_id).await
            }
            ChatBody::Json(body) => {
                self.set_phase(SendPhase::NonStreamingPending);
                let reply = fallback::extract_reply(&body)
                    .unwrap_or_else(|| fallback::canned_reply(text, &ctx.preferences));
                self.seal(assistant_id, reply.clone());
                Some(reply)
            }
        }
    }

    /// Decode SSE frames from the live body and reflect each increment into
    /// the placeholder, in arrival order.
    async fn consume_stream(
        &self,
        mut stream: ByteStream,
        text: &str,
        ctx: &SendContext,
        assistant_id: &str,
    ) -> Option<String> {
        self.set_phase(SendPhase::Streaming);

        let mut decoder = FrameDecoder::new();
        let mut accumulated = String::new();
        let mut done = false;

        while !done {
            match stream.next().await {
                None => break,
                Some(Err(ChatError::Cancelled)) => {
                    self.seal(assistant_id, ABORT_MARKER.to_string());
                    return None;
                }
                Some(Err(e)) => {
                    log::warn!("stream interrupted: {}", e);
                    self.seal(assistant_id, fallback::offline_reply(text, &ctx.preferences));
                    return None;
                }
                Some(Ok(chunk)) => {
                    for frame in decoder.feed(&chunk) {
                        let reduction = reduce_frame(&frame);
                        for increment in reduction.increments {
                            accumulated.push_str(&increment);
                            self.update_streaming(assistant_id, &accumulated);
                        }
                        if reduction.done {
                            done = true;
                            break;
                        }
                    }
                }
            }
        }

        // [DONE] before any content still seals with readable text.
        let final_content = if accumulated.is_empty() {
            fallback::canned_reply(text, &ctx.preferences)
        } else {
            accumulated
        };
        self.seal(assistant_id, final_content.clone());
        Some(final_content)
    }

    fn append(&self, message: Message) {
        self.state.borrow_mut().messages.push(message.clone());
        self.bus.emit(ChatEvent::MessageAppended { message });
    }

    fn update_streaming(&self, id: &str, content: &str) {
        let updated = {
            let mut st = self.state.borrow_mut();
            match st.messages.iter_mut().find(|m| m.id == id) {
                Some(m) if m.streaming => {
                    m.content = content.to_string();
                    true
                }
                _ => false,
            }
        };
        if updated {
            self.bus.emit(ChatEvent::MessageUpdated {
                id: id.to_string(),
                content: content.to_string(),
                streaming: true,
            });
        }
    }

    /// Terminal, one-time transition: fix the final content and drop the
    /// streaming flag. A message already sealed is never touched again.
    fn seal(&self, id: &str, content: String) {
        let sealed = {
            let mut st = self.state.borrow_mut();
            match st.messages.iter_mut().find(|m| m.id == id) {
                Some(m) if m.streaming => {
                    m.content = content.clone();
                    m.streaming = false;
                    true
                }
                _ => false,
            }
        };
        if sealed {
            self.bus.emit(ChatEvent::MessageUpdated {
                id: id.to_string(),
                content,
                streaming: false,
            });
        }
    }

    fn set_phase(&self, phase: SendPhase) {
        self.state.borrow_mut().phase = phase;
    }
}
