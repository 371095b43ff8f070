//! Delta reducer — interprets one SSE frame's `data:` payloads.

use serde::Deserialize;

/// Payload marking the end of the stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// What one frame contributed to the reply.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FrameReduction {
    /// Content increments, in line order.
    pub increments: Vec<String>,
    /// True once the `[DONE]` sentinel was seen; nothing after it counts.
    pub done: bool,
}

#[derive(Deserialize)]
struct DeltaPayload {
    #[serde(default)]
    delta: Option<String>,
}

/// Extract content increments from a raw frame. Only trimmed lines starting
/// with `data:` are significant. A JSON payload contributes its non-empty
/// `delta` field; a payload that fails to parse as JSON is appended verbatim
/// so no content is lost on non-JSON event producers.
pub fn reduce_frame(frame: &str) -> FrameReduction {
    let mut reduction = FrameReduction::default();

    for line in frame.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some(rest) = trimmed.strip_prefix("data:") else {
            continue;
        };
        let payload = rest.trim();
        if payload == DONE_SENTINEL {
            reduction.done = true;
            break;
        }
        match serde_json::from_str::<DeltaPayload>(payload) {
            Ok(DeltaPayload { delta: Some(delta) }) if !delta.is_empty() => {
                reduction.increments.push(delta);
            }
            Ok(_) => {}
            Err(_) => reduction.increments.push(payload.to_string()),
        }
    }

    reduction
}
