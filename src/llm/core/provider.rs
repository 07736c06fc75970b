//! Provider trait for text-generation backends

use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;

use super::{config::GenerationConfig, error::LlmError};

/// Streamed text fragments from a provider
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send + Sync>>;

/// Interface every text-generation backend must satisfy
///
/// One operation: start a streamed completion for a single prompt. A
/// failure to establish the stream (connect error, non-success status)
/// is reported through the outer `Result`, before any fragment is
/// produced; failures after that point arrive as `Err` items on the
/// stream itself.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn stream_completion(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<TextStream, LlmError>;
}
