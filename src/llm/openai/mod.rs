//! Client for OpenAI-compatible chat-completion endpoints

mod client;
mod sse;
mod types;

pub use client::OpenAiClient;
pub use types::{ChatCompletionChunk, ChatCompletionRequest, ChatMessage};
