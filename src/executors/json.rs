//! JSON POST executor shared by the providers

use reqwest::header::HeaderMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::error::LlmError;
use crate::observability::redact_query_key;
use crate::utils::http_interceptor::{HttpInterceptor, HttpRequestContext};

/// Maps a non-success response onto an [`LlmError`]:
/// `(provider_id, status, body_text)`.
pub type ErrorClassifier = fn(&str, u16, &str) -> LlmError;

/// Sends one JSON request and decodes the JSON response body.
#[derive(Clone)]
pub struct HttpJsonExecutor {
    pub provider_id: String,
    pub http_client: reqwest::Client,
    pub interceptors: Vec<Arc<dyn HttpInterceptor>>,
    pub classify_error: ErrorClassifier,
}

impl std::fmt::Debug for HttpJsonExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpJsonExecutor")
            .field("provider_id", &self.provider_id)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl HttpJsonExecutor {
    pub fn new(
        provider_id: impl Into<String>,
        http_client: reqwest::Client,
        classify_error: ErrorClassifier,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            http_client,
            interceptors: Vec::new(),
            classify_error,
        }
    }

    pub fn with_interceptors(mut self, interceptors: Vec<Arc<dyn HttpInterceptor>>) -> Self {
        self.interceptors = interceptors;
        self
    }

    /// POST `body` to `url` and return the decoded JSON response.
    ///
    /// Exactly one HTTP request is sent; there are no retries here.
    pub async fn post(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, LlmError> {
        let ctx = HttpRequestContext {
            provider_id: self.provider_id.clone(),
            url: redact_query_key(url),
            request_id: uuid::Uuid::new_v4().to_string(),
        };

        let mut builder = self
            .http_client
            .post(url)
            .headers(headers.clone())
            .json(body);
        for interceptor in &self.interceptors {
            builder = match interceptor.on_before_send(&ctx, builder, body, &headers) {
                Ok(builder) => builder,
                Err(e) => return Err(self.fail(&ctx, e)),
            };
        }

        let started = Instant::now();
        debug!(target: "draftsmith::http", provider=%ctx.provider_id, url=%ctx.url, request_id=%ctx.request_id, "POST");

        let response = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => return Err(self.fail(&ctx, LlmError::from(e))),
        };

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = (self.classify_error)(&self.provider_id, status.as_u16(), &text);
            return Err(self.fail(&ctx, err));
        }

        for interceptor in &self.interceptors {
            if let Err(e) = interceptor.on_response(&ctx, &response) {
                return Err(self.fail(&ctx, e));
            }
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return Err(self.fail(&ctx, LlmError::from(e))),
        };
        debug!(
            target: "draftsmith::http",
            provider=%ctx.provider_id,
            request_id=%ctx.request_id,
            status=status.as_u16(),
            duration_ms=started.elapsed().as_millis() as u64,
            response_length=text.len(),
            "response received"
        );

        serde_json::from_str(&text).map_err(|e| {
            self.fail(
                &ctx,
                LlmError::ParseError(format!("Failed to parse response JSON: {e}")),
            )
        })
    }

    fn fail(&self, ctx: &HttpRequestContext, err: LlmError) -> LlmError {
        for interceptor in &self.interceptors {
            interceptor.on_error(ctx, &err);
        }
        err
    }
}
