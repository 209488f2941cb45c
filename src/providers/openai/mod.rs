//! OpenAI-compatible chat-completion provider (primary)

pub mod client;
pub mod config;
pub mod errors;
pub mod prompts;
pub mod types;

pub use client::OpenAiProvider;
pub use config::OpenAiConfig;
pub use errors::classify_openai_http_error;
