//! Google Gemini provider (secondary)

pub mod client;
pub mod config;
pub mod errors;
pub mod prompts;
pub mod types;

pub use client::GeminiProvider;
pub use config::GeminiConfig;
pub use errors::classify_gemini_http_error;
