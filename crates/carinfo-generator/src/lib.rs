//! carinfo-generator
//!
//! Language-model access for car profiles: the prompt and an HTTP client
//! for OpenAI-compatible chat-completions endpoints.

pub mod client;
pub mod prompt;

pub use client::{message_content, ChatCompletionsGenerator};
pub use prompt::build_prompt;
