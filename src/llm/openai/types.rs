//! Wire types for the chat-completions API

use serde::{Deserialize, Serialize};

/// A streaming chat-completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// One frame of a streamed chat-completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

impl ChatCompletionChunk {
    /// The text fragment carried by this frame, if any
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.delta.content.as_deref())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: ChunkDelta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkDelta {
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "gpt-5.2".to_string(),
            messages: vec![ChatMessage::user("Write a description")],
            stream: true,
            max_completion_tokens: 256,
            temperature: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"gpt-5.2\""));
        assert!(json.contains("\"stream\":true"));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"max_completion_tokens\":256"));
        assert!(!json.contains("\"temperature\""));
    }

    #[test]
    fn test_chunk_with_content() {
        let json = r#"{"id":"c-1","object":"chat.completion.chunk","choices":[{"index":0,"delta":{"content":"Hello"},"finish_reason":null}]}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.content(), Some("Hello"));
    }

    #[test]
    fn test_chunk_with_empty_delta() {
        // Final frames carry a finish_reason and no content
        let json = r#"{"choices":[{"index":0,"delta":{},"finish_reason":"stop"}]}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.content(), None);
        assert_eq!(chunk.choices[0].finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_chunk_with_empty_content() {
        let json = r#"{"choices":[{"index":0,"delta":{"content":""}}]}"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.content(), None);
    }

    #[test]
    fn test_chunk_without_choices() {
        let chunk: ChatCompletionChunk = serde_json::from_str(r#"{"id":"c-2"}"#).unwrap();
        assert_eq!(chunk.content(), None);
    }
}
