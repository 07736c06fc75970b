//! Server-Sent Events parser for streamed chat-completion responses
//!
//! The provider emits `data: <json>` lines terminated by the
//! `data: [DONE]` sentinel. This parser:
//! 1. Buffers incoming bytes; lines are split at the byte level so a
//!    multi-byte character straddling a transport chunk is never torn
//! 2. Retains the trailing unterminated fragment for the next chunk
//! 3. Filters for lines starting with `data: `
//! 4. Stops at the `[DONE]` sentinel
//! 5. Skips lines that do not decode; parsing is best-effort

use bytes::{Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use std::pin::Pin;

use crate::llm::core::error::LlmError;

use super::types::ChatCompletionChunk;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// Parse a stream of bytes as chat-completion chunks
pub fn parse_sse_stream(
    byte_stream: Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send + Sync>>,
) -> Pin<Box<dyn Stream<Item = Result<ChatCompletionChunk, LlmError>> + Send + Sync>> {
    // Buffer for partial lines; done is sticky once the sentinel is seen
    let mut buffer = BytesMut::new();
    let mut done = false;

    let event_stream = byte_stream.flat_map(move |chunk_result| {
        if done {
            return futures::stream::iter(Vec::new());
        }

        let chunk = match chunk_result {
            Ok(bytes) => bytes,
            Err(e) => {
                return futures::stream::iter(vec![Err(LlmError::StreamError(e.to_string()))]);
            }
        };

        buffer.extend_from_slice(&chunk);

        // Process complete lines; the unterminated tail stays buffered
        let mut events = Vec::new();
        while let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
            let line_bytes = buffer.split_to(newline_pos + 1);

            let line = match std::str::from_utf8(&line_bytes[..newline_pos]) {
                Ok(line) => line.trim_end(),
                Err(_) => continue,
            };

            let data = match line.strip_prefix(DATA_PREFIX) {
                Some(data) => data,
                None => continue,
            };

            if data == DONE_SENTINEL {
                done = true;
                buffer.clear();
                break;
            }

            match serde_json::from_str::<ChatCompletionChunk>(data) {
                Ok(chunk) => events.push(Ok(chunk)),
                Err(e) => {
                    // Best-effort parse: a malformed line never aborts the stream
                    tracing::debug!(error = %e, line = %data, "skipping malformed stream line");
                }
            }
        }

        futures::stream::iter(events)
    });

    Box::pin(event_stream)
}
