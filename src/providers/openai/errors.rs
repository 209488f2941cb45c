use crate::error::{LlmError, classify_http_error};
use serde_json::Value;

/// Classify a non-success chat-completion response.
///
/// The human-readable `error.message` replaces the raw body when present.
/// A 429 whose `error.code` is `insufficient_quota` means the account is out
/// of credit rather than throttled, so it is reported as a quota error.
pub fn classify_openai_http_error(provider: &str, status: u16, body_text: &str) -> LlmError {
    let Ok(body) = serde_json::from_str::<Value>(body_text) else {
        return classify_http_error(provider, status, body_text);
    };
    let Some(message) = body.pointer("/error/message").and_then(Value::as_str) else {
        return classify_http_error(provider, status, body_text);
    };

    let message = format!("{provider}: {message}");
    if body.pointer("/error/code").and_then(Value::as_str) == Some("insufficient_quota") {
        return LlmError::QuotaExceededError(message);
    }
    LlmError::from_status(status, message, Some(body))
}
