use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use futures::StreamExt;

use tagerpro::client::{read_events, GenerationEvent};
use tagerpro::llm::{ChatProvider, GenerationConfig, LlmError, TextStream};
use tagerpro::routes::ai_routes;

/// What the fake provider should do when a stream is requested
enum Behavior {
    /// Stream these fragments, then end normally
    Fragments(Vec<&'static str>),
    /// Fail before any fragment is produced
    FailBeforeStream,
    /// Stream these fragments, then fail mid-stream
    FailAfter(Vec<&'static str>),
}

struct FakeProvider {
    behavior: Behavior,
    seen_prompts: Mutex<Vec<String>>,
}

impl FakeProvider {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            seen_prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ChatProvider for FakeProvider {
    async fn stream_completion(
        &self,
        prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<TextStream, LlmError> {
        self.seen_prompts.lock().unwrap().push(prompt.to_string());

        match &self.behavior {
            Behavior::Fragments(parts) => {
                let items: Vec<Result<String, LlmError>> =
                    parts.iter().map(|s| Ok(s.to_string())).collect();
                Ok(Box::pin(stream::iter(items)))
            }
            Behavior::FailBeforeStream => Err(LlmError::HttpError {
                status: 503,
                body: "upstream unavailable".to_string(),
            }),
            Behavior::FailAfter(parts) => {
                let mut items: Vec<Result<String, LlmError>> =
                    parts.iter().map(|s| Ok(s.to_string())).collect();
                items.push(Err(LlmError::StreamError("connection reset".to_string())));
                Ok(Box::pin(stream::iter(items)))
            }
        }
    }
}

#[tokio::test]
async fn test_generate_description_streams_frames() {
    let provider = FakeProvider::new(Behavior::Fragments(vec!["Hello", " world"]));
    let routes = ai_routes(provider.clone());

    let response = warp::test::request()
        .method("POST")
        .path("/api/ai/generate-description")
        .json(&serde_json::json!({ "productName": "Leather Bag" }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "text/event-stream"
    );
    assert_eq!(
        response.headers()["cache-control"],
        "no-cache, no-transform"
    );
    assert_eq!(response.headers()["x-accel-buffering"], "no");

    let body = std::str::from_utf8(response.body()).unwrap();
    assert!(body.contains(r#"data: {"content":"Hello"}"#));
    assert!(body.contains(r#"data: {"content":" world"}"#));
    assert!(body.contains("data: [DONE]"));

    let prompts = provider.seen_prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Leather Bag"));
    assert!(prompts[0].contains("marketing description"));
}

#[tokio::test]
async fn test_generate_description_arabic_prompt() {
    let provider = FakeProvider::new(Behavior::Fragments(vec!["وصف"]));
    let routes = ai_routes(provider.clone());

    let response = warp::test::request()
        .method("POST")
        .path("/api/ai/generate-description")
        .json(&serde_json::json!({
            "productName": "حقيبة جلدية",
            "category": "إكسسوارات",
            "language": "ar"
        }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);

    let prompts = provider.seen_prompts.lock().unwrap();
    assert!(prompts[0].contains("اكتب وصفاً تسويقياً"));
    assert!(prompts[0].contains("في فئة إكسسوارات"));
}

#[tokio::test]
async fn test_frames_replay_into_client_accumulation() {
    // End to end across both framings: the backend's SSE body parses into
    // the client relay's accumulated updates
    let provider = FakeProvider::new(Behavior::Fragments(vec!["A", "B"]));
    let routes = ai_routes(provider);

    let response = warp::test::request()
        .method("POST")
        .path("/api/ai/campaign-ideas")
        .json(&serde_json::json!({ "productName": "Mug" }))
        .reply(&routes)
        .await;

    let body = response.body().clone();
    let events: Vec<GenerationEvent> = read_events(stream::iter(vec![Ok::<
        Bytes,
        reqwest::Error,
    >(body)]))
    .collect()
    .await;

    assert_eq!(
        events,
        vec![
            GenerationEvent::Update("A".to_string()),
            GenerationEvent::Update("AB".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_pre_stream_failure_is_json_error() {
    let provider = FakeProvider::new(Behavior::FailBeforeStream);
    let routes = ai_routes(provider);

    let response = warp::test::request()
        .method("POST")
        .path("/api/ai/generate-ad-copy")
        .json(&serde_json::json!({ "productName": "Mug", "price": "9.99" }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"], "Failed to generate ad copy");
}

#[tokio::test]
async fn test_mid_stream_failure_emits_error_frame_without_done() {
    let provider = FakeProvider::new(Behavior::FailAfter(vec!["partial"]));
    let routes = ai_routes(provider);

    let response = warp::test::request()
        .method("POST")
        .path("/api/ai/suggest-price")
        .json(&serde_json::json!({ "productName": "Mug" }))
        .reply(&routes)
        .await;

    // The stream already started, so the status is 200 and the failure
    // arrives as one error frame with no [DONE] after it
    assert_eq!(response.status(), 200);
    let body = std::str::from_utf8(response.body()).unwrap();
    assert!(body.contains(r#"data: {"content":"partial"}"#));
    assert!(body.contains(r#"data: {"error":"Failed to generate"}"#));
    assert!(!body.contains("data: [DONE]"));
}

#[tokio::test]
async fn test_blank_required_field_is_rejected() {
    let provider = FakeProvider::new(Behavior::Fragments(vec!["unused"]));
    let routes = ai_routes(provider.clone());

    let response = warp::test::request()
        .method("POST")
        .path("/api/ai/generate-description")
        .json(&serde_json::json!({ "productName": "   " }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("missing required field"));

    // The provider is never contacted
    assert!(provider.seen_prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_absent_required_field_is_rejected() {
    let provider = FakeProvider::new(Behavior::Fragments(vec!["unused"]));
    let routes = ai_routes(provider);

    // Ad copy requires a price; the body does not deserialize without it
    let response = warp::test::request()
        .method("POST")
        .path("/api/ai/generate-ad-copy")
        .json(&serde_json::json!({ "productName": "Mug" }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
}
