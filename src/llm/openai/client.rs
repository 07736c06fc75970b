//! OpenAI-compatible client implementation

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;

use crate::config::AiConfig;
use crate::llm::core::{
    config::GenerationConfig,
    error::LlmError,
    provider::{ChatProvider, TextStream},
};

use super::sse::parse_sse_stream;
use super::types::{ChatCompletionRequest, ChatMessage};

/// Client for OpenAI-compatible chat-completion endpoints
///
/// Works against the hosted OpenAI API or any gateway speaking the same
/// protocol, selected by the configured base URL.
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Bearer token for the provider
    api_key: String,
    /// API root, e.g. `https://api.openai.com/v1`
    base_url: String,
    /// Model identifier sent with every request
    model: String,
}

impl OpenAiClient {
    /// Create a new client from provider configuration
    pub fn new(config: AiConfig) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key: config.api_key,
            base_url: config.base_url,
            model: config.model,
        })
    }

    /// Build the chat-completions endpoint URL
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Make a streaming request and reduce the response to text fragments
    async fn make_streaming_request(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<TextStream, LlmError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            stream: true,
            max_completion_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        let response = self
            .http_client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        // A non-success status before streaming is a single terminal failure
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let byte_stream = response.bytes_stream();
        let sse_stream = parse_sse_stream(Box::pin(byte_stream));

        let text_stream = sse_stream.filter_map(|result| async move {
            match result {
                Ok(chunk) => chunk.content().map(|text| Ok(text.to_string())),
                Err(e) => Some(Err(e)),
            }
        });

        Ok(Box::pin(text_stream))
    }
}

#[async_trait]
impl ChatProvider for OpenAiClient {
    async fn stream_completion(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<TextStream, LlmError> {
        self.make_streaming_request(prompt, config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AiConfig {
        AiConfig {
            api_key: "sk-test".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-5.2".to_string(),
        }
    }

    #[test]
    fn test_completions_url() {
        let client = OpenAiClient::new(test_config()).unwrap();
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_completions_url_trailing_slash() {
        let mut config = test_config();
        config.base_url = "https://gateway.example.com/v1/".to_string();
        let client = OpenAiClient::new(config).unwrap();
        assert_eq!(
            client.completions_url(),
            "https://gateway.example.com/v1/chat/completions"
        );
    }
}
