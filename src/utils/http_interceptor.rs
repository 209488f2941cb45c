//! HTTP Interceptor interfaces
//!
//! Interceptors observe and tweak provider requests. They can add headers to
//! the request builder before send, observe successful responses, and are
//! notified of errors. Hooks run inline on every call and should stay cheap.

use crate::error::LlmError;
use reqwest::header::HeaderMap;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub provider_id: String,
    /// Request URL with credentials stripped from the query string
    pub url: String,
    pub request_id: String,
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Return the (possibly modified)
    /// builder or an error to short-circuit the request.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _body: &serde_json::Value,
        _headers: &HeaderMap,
    ) -> Result<reqwest::RequestBuilder, LlmError> {
        Ok(builder)
    }

    /// Called after a successful (2xx) response is received.
    fn on_response(
        &self,
        _ctx: &HttpRequestContext,
        _response: &reqwest::Response,
    ) -> Result<(), LlmError> {
        Ok(())
    }

    /// Called once for every failed request, including failures returned by
    /// another interceptor's hooks.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &LlmError) {}
}

/// A simple logging interceptor backed by `tracing` (no sensitive data).
#[derive(Clone, Debug, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _body: &serde_json::Value,
        _headers: &HeaderMap,
    ) -> Result<reqwest::RequestBuilder, LlmError> {
        tracing::debug!(target: "draftsmith::http", provider=%ctx.provider_id, url=%ctx.url, request_id=%ctx.request_id, "sending request");
        Ok(builder)
    }

    fn on_response(
        &self,
        ctx: &HttpRequestContext,
        response: &reqwest::Response,
    ) -> Result<(), LlmError> {
        tracing::debug!(target: "draftsmith::http", provider=%ctx.provider_id, url=%ctx.url, request_id=%ctx.request_id, status=%response.status().as_u16(), "response received");
        Ok(())
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &LlmError) {
        tracing::debug!(target: "draftsmith::http", provider=%ctx.provider_id, url=%ctx.url, request_id=%ctx.request_id, err=%error, "request error");
    }
}
