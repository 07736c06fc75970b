//! Text-generation provider layer
//!
//! A small abstraction over streamed chat-completion APIs, with one
//! concrete client for OpenAI-compatible endpoints.

pub mod core;
pub mod openai;

// Re-export commonly used types
pub use core::{
    config::GenerationConfig,
    error::LlmError,
    provider::{ChatProvider, TextStream},
};
pub use openai::OpenAiClient;
