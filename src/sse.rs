//! SSE frames for the generation endpoints
//!
//! Frames are plain `data:` lines with no event name, so any SSE-aware
//! consumer (including the line parser in `client::stream`) can read them:
//!
//! ```text
//! data: {"content":"<fragment>"}
//!
//! data: [DONE]
//! ```

use warp::sse::Event;

/// Sentinel payload closing a successful stream
pub const DONE_SENTINEL: &str = "[DONE]";

/// Create a frame carrying one text fragment
pub fn content_event(content: &str) -> Event {
    let payload = serde_json::json!({ "content": content });
    Event::default().data(payload.to_string())
}

/// Create a frame carrying a mid-stream failure message
pub fn error_event(message: &str) -> Event {
    let payload = serde_json::json!({ "error": message });
    Event::default().data(payload.to_string())
}

/// Create the end-of-stream frame
pub fn done_event() -> Event {
    Event::default().data(DONE_SENTINEL)
}
