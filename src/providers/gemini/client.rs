//! Gemini `generateContent` provider

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use std::sync::Arc;

use super::config::GeminiConfig;
use super::errors::classify_gemini_http_error;
use super::prompts;
use super::types::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::LlmError;
use crate::executors::HttpJsonExecutor;
use crate::observability::mask_sensitive_value;
use crate::providers::{GenerationProvider, build_http_client, resolve_text};
use crate::types::{ContentKind, GenerationParams};
use crate::utils::http_interceptor::HttpInterceptor;

pub const PROVIDER_ID: &str = "gemini";

/// Secondary provider: Google Gemini.
///
/// Gemini has no system role in this request shape, so the system and user
/// prompts are joined into a single text part.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    config: GeminiConfig,
    executor: HttpJsonExecutor,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let http_client = build_http_client(config.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a new Gemini provider with a custom HTTP client
    pub fn with_http_client(config: GeminiConfig, http_client: reqwest::Client) -> Self {
        tracing::debug!(
            provider = PROVIDER_ID,
            model = %config.model,
            base_url = %config.base_url,
            api_key = %mask_sensitive_value(config.api_key.expose_secret()),
            "provider configured"
        );
        let executor = HttpJsonExecutor::new(PROVIDER_ID, http_client, classify_gemini_http_error);
        Self { config, executor }
    }

    pub fn with_interceptors(mut self, interceptors: Vec<Arc<dyn HttpInterceptor>>) -> Self {
        self.executor = self.executor.with_interceptors(interceptors);
        self
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the request body for Gemini API
    pub fn build_request_body(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{system_prompt}\n\n{user_prompt}"),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: params.temperature,
                top_k: params.top_k,
                top_p: params.top_p,
                max_output_tokens: params.max_tokens,
            }),
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{}?key={}",
            self.config.generate_url(),
            urlencoding::encode(self.config.api_key.expose_secret())
        )
    }
}

/// Text of the first part of the first candidate, if present.
pub fn extract_text(body: &serde_json::Value) -> Option<&str> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(serde_json::Value::as_str)
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    fn system_prompt(&self, kind: ContentKind) -> &str {
        prompts::system_prompt(kind)
    }

    fn default_params(&self) -> &GenerationParams {
        &self.config.params
    }

    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        params.validate_params()?;
        let body = serde_json::to_value(self.build_request_body(system_prompt, user_prompt, params))?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let response = self.executor.post(&self.build_url(), headers, &body).await?;
        resolve_text(PROVIDER_ID, extract_text(&response), self.config.strict_responses)
    }
}
