//! Chat-completion provider

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use std::sync::Arc;

use super::config::OpenAiConfig;
use super::errors::classify_openai_http_error;
use super::prompts;
use super::types::{ChatCompletionRequest, ChatMessage};
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::LlmError;
use crate::executors::HttpJsonExecutor;
use crate::observability::mask_sensitive_value;
use crate::providers::{GenerationProvider, build_http_client, resolve_text};
use crate::types::{ContentKind, GenerationParams};
use crate::utils::http_interceptor::HttpInterceptor;

pub const PROVIDER_ID: &str = "openai";

/// Primary provider: OpenAI-compatible `/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    config: OpenAiConfig,
    executor: HttpJsonExecutor,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let http_client = build_http_client(config.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))?;
        Ok(Self::with_http_client(config, http_client))
    }

    pub fn with_http_client(config: OpenAiConfig, http_client: reqwest::Client) -> Self {
        tracing::debug!(
            provider = PROVIDER_ID,
            model = %config.model,
            base_url = %config.base_url,
            api_key = %mask_sensitive_value(config.api_key.expose_secret()),
            "provider configured"
        );
        let executor = HttpJsonExecutor::new(PROVIDER_ID, http_client, classify_openai_http_error);
        Self { config, executor }
    }

    pub fn with_interceptors(mut self, interceptors: Vec<Arc<dyn HttpInterceptor>>) -> Self {
        self.executor = self.executor.with_interceptors(interceptors);
        self
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    pub fn build_request_body(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(user_prompt)],
            stream: false,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
        }
    }

    fn build_headers(&self) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", self.config.api_key.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|e| {
                LlmError::ConfigurationError(format!(
                    "OpenAI API key is not a valid header value: {e}"
                ))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

/// Text of the first choice, if the body has one.
pub fn extract_text(body: &serde_json::Value) -> Option<&str> {
    body.pointer("/choices/0/message/content")
        .and_then(serde_json::Value::as_str)
}

#[async_trait]
impl GenerationProvider for OpenAiProvider {
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
        let headers = self.build_headers()?;
        let response = self
            .executor
            .post(&self.config.chat_url(), headers, &body)
            .await?;
        resolve_text(PROVIDER_ID, extract_text(&response), self.config.strict_responses)
    }
}
