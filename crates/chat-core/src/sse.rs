//! Incremental SSE frame decoder.
//!
//! Consumes raw byte chunks from a streaming response body and yields
//! complete event frames (text blocks terminated by a blank line). Handles
//! multi-byte UTF-8 sequences and frame delimiters split across chunk
//! boundaries, so the emitted frame sequence is independent of how the
//! transport happened to chunk the bytes.

const FRAME_DELIMITER: &str = "\n\n";

pub struct FrameDecoder {
    /// Undecoded trailing bytes — at most one partial UTF-8 sequence.
    pending: Vec<u8>,
    /// Decoded text awaiting a frame boundary.
    buffer: String,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Feed one chunk of bytes; returns every frame completed by it, in
    /// arrival order. An incomplete trailing frame stays buffered.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        self.decode_pending();

        let mut frames = Vec::new();
        while let Some(idx) = self.buffer.find(FRAME_DELIMITER) {
            let frame = self.buffer[..idx].to_string();
            self.buffer.drain(..idx + FRAME_DELIMITER.len());
            frames.push(frame);
        }
        frames
    }

    /// Text decoded but not yet terminated by a blank line. Discarded when
    /// the stream ends, matching browser TextDecoder + split semantics.
    pub fn partial(&self) -> &str {
        &self.buffer
    }

    /// Move every complete UTF-8 prefix of `pending` into `buffer`,
    /// holding back a trailing incomplete sequence and replacing invalid
    /// sequences with U+FFFD.
    fn decode_pending(&mut self) {
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    self.buffer.push_str(text);
                    self.pending.clear();
                    return;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    if let Ok(text) = std::str::from_utf8(&self.pending[..valid]) {
                        self.buffer.push_str(text);
                    }
                    match e.error_len() {
                        // Truly invalid bytes: replace and keep decoding.
                        Some(bad) => {
                            self.buffer.push('\u{FFFD}');
                            self.pending.drain(..valid + bad);
                        }
                        // Incomplete sequence at the end: wait for more bytes.
                        None => {
                            self.pending.drain(..valid);
                            return;
                        }
                    }
                }
            }
        }
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}
