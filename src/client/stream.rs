//! Streaming consumer for the generation endpoints
//!
//! Turns the SSE response body into a sequence of accumulated-text
//! updates. Every update carries the full text so far, not a delta, so
//! any single event is independently renderable and a consumer simply
//! replaces what it displays.

use bytes::{Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Deserialize;
use std::pin::Pin;

use crate::sse::DONE_SENTINEL;

const DATA_PREFIX: &str = "data: ";

/// Events observed while a generation is in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// The full accumulated text so far (replace, not append)
    Update(String),
    /// Terminal failure; no further events follow
    Failed(String),
}

/// Stream of generation events
pub type GenerationStream = Pin<Box<dyn Stream<Item = GenerationEvent> + Send>>;

/// One frame of the generation SSE body
#[derive(Debug, Deserialize)]
struct StreamFrame {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Parse an SSE byte stream into accumulated-text updates
///
/// Lines are split at the byte level so multi-byte characters straddling
/// a transport chunk are never torn; the unterminated tail stays buffered.
/// Lines without the `data: ` prefix, and payloads that do not decode,
/// are skipped silently. The sequence ends at the `[DONE]` sentinel, at
/// transport end-of-data, or after a single `Failed` event.
pub fn read_events<S>(byte_stream: S) -> GenerationStream
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut byte_stream = Box::pin(byte_stream);
        let mut buffer = BytesMut::new();
        let mut accumulated = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(bytes) => bytes,
                Err(e) => {
                    yield GenerationEvent::Failed(e.to_string());
                    return;
                }
            };

            buffer.extend_from_slice(&chunk);

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
                    return;
                }

                let frame = match serde_json::from_str::<StreamFrame>(data) {
                    Ok(frame) => frame,
                    Err(_) => continue,
                };

                if let Some(message) = frame.error {
                    yield GenerationEvent::Failed(message);
                    return;
                }

                if let Some(fragment) = frame.content {
                    if !fragment.is_empty() {
                        accumulated.push_str(&fragment);
                        yield GenerationEvent::Update(accumulated.clone());
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn events_from(chunks: Vec<&'static [u8]>) -> GenerationStream {
        read_events(stream::iter(
            chunks
                .into_iter()
                .map(|c| Ok::<_, reqwest::Error>(Bytes::from_static(c))),
        ))
    }

    async fn collect(chunks: Vec<&'static [u8]>) -> Vec<GenerationEvent> {
        events_from(chunks).collect().await
    }

    #[tokio::test]
    async fn test_updates_carry_full_accumulation() {
        let data = b"data: {\"content\":\"A\"}\n\ndata: {\"content\":\"B\"}\n\ndata: [DONE]\n\n";
        let events = collect(vec![data]).await;
        assert_eq!(
            events,
            vec![
                GenerationEvent::Update("A".to_string()),
                GenerationEvent::Update("AB".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_garbage_line_is_skipped() {
        let data =
            b"data: {\"content\":\"A\"}\n\ngarbage\ndata: {\"content\":\"B\"}\n\ndata: [DONE]\n\n";
        let events = collect(vec![data]).await;
        assert_eq!(
            events,
            vec![
                GenerationEvent::Update("A".to_string()),
                GenerationEvent::Update("AB".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_undecodable_payload_is_skipped() {
        let data = b"data: {\"content\":\"A\"}\n\ndata: {broken\n\ndata: {\"content\":\"B\"}\n\ndata: [DONE]\n\n";
        let events = collect(vec![data]).await;
        assert_eq!(
            events,
            vec![
                GenerationEvent::Update("A".to_string()),
                GenerationEvent::Update("AB".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_content_produces_no_event() {
        let data = b"data: {\"content\":\"\"}\n\ndata: {\"content\":\"A\"}\n\ndata: [DONE]\n\n";
        let events = collect(vec![data]).await;
        assert_eq!(events, vec![GenerationEvent::Update("A".to_string())]);
    }

    #[tokio::test]
    async fn test_error_frame_is_terminal() {
        let data = b"data: {\"content\":\"A\"}\n\ndata: {\"error\":\"Failed to generate\"}\n\ndata: {\"content\":\"B\"}\n\n";
        let events = collect(vec![data]).await;
        assert_eq!(
            events,
            vec![
                GenerationEvent::Update("A".to_string()),
                GenerationEvent::Failed("Failed to generate".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_connection_close_without_sentinel() {
        // Transport end-of-data is a clean termination, not a failure
        let data = b"data: {\"content\":\"A\"}\n\n";
        let events = collect(vec![data]).await;
        assert_eq!(events, vec![GenerationEvent::Update("A".to_string())]);
    }

    #[tokio::test]
    async fn test_chunking_does_not_affect_output() {
        // However the transport splits the bytes — including through the
        // middle of a multi-byte character — the observed accumulation
        // sequence is identical
        let full: &'static [u8] =
            "data: {\"content\":\"مرحباً \"}\n\ndata: {\"content\":\"بك\"}\n\ndata: [DONE]\n\n"
                .as_bytes();
        let expected = collect(vec![full]).await;
        assert_eq!(
            expected,
            vec![
                GenerationEvent::Update("مرحباً ".to_string()),
                GenerationEvent::Update("مرحباً بك".to_string()),
            ]
        );

        for split in 1..full.len() {
            let (a, b) = full.split_at(split);
            let events = collect(vec![a, b]).await;
            assert_eq!(events, expected, "split at byte {}", split);
        }
    }
}
