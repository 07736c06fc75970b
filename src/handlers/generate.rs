// /api/ai handlers: streamed generation passthrough
//
// Each handler assembles a prompt, opens one provider stream, and relays
// its fragments as SSE frames. One provider stream per client stream; when
// the client goes away warp drops the relay, which drops the provider
// response and aborts the upstream call.

use std::convert::Infallible;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use serde::Deserialize;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};
use warp::sse::Event;

use crate::handlers::error_reply;
use crate::llm::{ChatProvider, TextStream};
use crate::prompt::{GenerationRequest, GenerationTool, Language, PromptError};
use crate::sse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionBody {
    pub product_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCopyBody {
    pub product_name: String,
    pub price: String,
    #[serde(default)]
    pub offer: Option<String>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBody {
    pub product_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignBody {
    pub product_name: String,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub language: Language,
}

pub async fn generate_description(
    body: DescriptionBody,
    provider: Arc<dyn ChatProvider>,
) -> Result<Response, Infallible> {
    let request = GenerationRequest::new(GenerationTool::Description, body.language)
        .field("productName", body.product_name)
        .maybe_field("category", body.category);
    stream_generation(request, provider, "Failed to generate description").await
}

pub async fn generate_ad_copy(
    body: AdCopyBody,
    provider: Arc<dyn ChatProvider>,
) -> Result<Response, Infallible> {
    let request = GenerationRequest::new(GenerationTool::AdCopy, body.language)
        .field("productName", body.product_name)
        .field("price", body.price)
        .maybe_field("offer", body.offer);
    stream_generation(request, provider, "Failed to generate ad copy").await
}

pub async fn suggest_price(
    body: PriceBody,
    provider: Arc<dyn ChatProvider>,
) -> Result<Response, Infallible> {
    let request = GenerationRequest::new(GenerationTool::Price, body.language)
        .field("productName", body.product_name)
        .maybe_field("description", body.description)
        .maybe_field("category", body.category);
    stream_generation(request, provider, "Failed to suggest price").await
}

pub async fn campaign_ideas(
    body: CampaignBody,
    provider: Arc<dyn ChatProvider>,
) -> Result<Response, Infallible> {
    let request = GenerationRequest::new(GenerationTool::Campaign, body.language)
        .field("productName", body.product_name)
        .maybe_field("targetAudience", body.target_audience);
    stream_generation(request, provider, "Failed to generate campaign ideas").await
}

/// Open the provider stream and relay it as SSE
///
/// Failures before the stream starts become a non-streaming JSON error;
/// failures after that become one error frame followed by stream close.
async fn stream_generation(
    request: GenerationRequest,
    provider: Arc<dyn ChatProvider>,
    failure_message: &'static str,
) -> Result<Response, Infallible> {
    let prompt = match request.build_prompt() {
        Ok(prompt) => prompt,
        Err(e @ PromptError::MissingField(_)) => {
            return Ok(error_reply(StatusCode::BAD_REQUEST, &e.to_string()).into_response());
        }
    };

    let config = request.tool.generation_config();
    let upstream = match provider.stream_completion(&prompt, &config).await {
        Ok(stream) => stream,
        Err(e) => {
            tracing::error!(error = %e, tool = ?request.tool, "generation request failed");
            return Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, failure_message).into_response(),
            );
        }
    };

    let reply = warp::sse::reply(warp::sse::keep_alive().stream(relay_events(upstream)));
    let reply = warp::reply::with_header(reply, "Cache-Control", "no-cache, no-transform");
    let reply = warp::reply::with_header(reply, "X-Accel-Buffering", "no");
    Ok(reply.into_response())
}

fn relay_events(mut upstream: TextStream) -> impl Stream<Item = Result<Event, Infallible>> {
    async_stream::stream! {
        while let Some(item) = upstream.next().await {
            match item {
                Ok(text) => yield Ok(sse::content_event(&text)),
                Err(e) => {
                    tracing::error!(error = %e, "provider stream failed mid-generation");
                    yield Ok(sse::error_event("Failed to generate"));
                    return;
                }
            }
        }
        yield Ok(sse::done_event());
    }
}
