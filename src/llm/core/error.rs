//! Error types for the provider layer

use thiserror::Error;

/// Errors that can occur when using a text-generation provider
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failures, including non-success status before streaming
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// Transport failures while consuming the response stream
    #[error("stream error: {0}")]
    StreamError(String),

    /// JSON encoding/decoding issues
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Invalid request parameters
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LlmError::HttpError {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            LlmError::HttpError {
                status: 0,
                body: err.to_string(),
            }
        }
    }
}
