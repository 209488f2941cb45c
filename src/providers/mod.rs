//! Generation providers
//!
//! Each provider wraps one remote text-generation API behind the
//! [`GenerationProvider`] trait. Providers carry their own system-prompt set
//! and default sampling parameters; the [`crate::fallback::ProviderChain`]
//! decides which one is called.

pub mod gemini;
pub mod openai;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::{ContentKind, GenerationParams};

pub use gemini::{GeminiConfig, GeminiProvider};
pub use openai::{OpenAiConfig, OpenAiProvider};

/// A remote text-generation service.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Stable identifier used in logs and error reports.
    fn provider_id(&self) -> &str;

    /// System prompt this provider uses for `kind`.
    fn system_prompt(&self, kind: ContentKind) -> &str;

    /// Sampling parameters applied when the caller has no override.
    fn default_params(&self) -> &GenerationParams;

    /// Issue exactly one generation request.
    ///
    /// Fails on transport errors, non-success statuses and non-JSON bodies.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, LlmError>;
}

/// Resolve the text extracted from a response body.
///
/// A body without the expected text path is a soft condition: it becomes an
/// empty string unless `strict` is set.
pub(crate) fn resolve_text(
    provider_id: &str,
    text: Option<&str>,
    strict: bool,
) -> Result<String, LlmError> {
    match text {
        Some(text) => Ok(text.to_string()),
        None if strict => Err(LlmError::EmptyResponse {
            provider: provider_id.to_string(),
        }),
        None => {
            tracing::warn!(provider = %provider_id, "response carried no text, returning empty output");
            Ok(String::new())
        }
    }
}

pub(crate) fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| LlmError::ConfigurationError(format!("Failed to create HTTP client: {e}")))
}
