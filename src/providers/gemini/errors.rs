use crate::error::{LlmError, classify_http_error};
use serde_json::Value;

/// Classify a non-success `generateContent` response.
///
/// Google APIs return `{ "error": { "code", "message", "status" } }` where
/// `status` is a canonical gRPC code name.
pub fn classify_gemini_http_error(provider: &str, status: u16, body_text: &str) -> LlmError {
    let Some((message, grpc_status, details)) = parse_envelope(body_text) else {
        return classify_http_error(provider, status, body_text);
    };

    if message.to_lowercase().contains("api key") {
        return LlmError::AuthenticationError(message);
    }

    match grpc_status.as_deref() {
        Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED") => {
            LlmError::AuthenticationError(message)
        }
        Some("RESOURCE_EXHAUSTED") => LlmError::RateLimitError(message),
        Some("INVALID_ARGUMENT") | Some("FAILED_PRECONDITION") => LlmError::InvalidInput(message),
        Some("NOT_FOUND") => LlmError::NotFound(message),
        _ => LlmError::ApiError {
            code: status,
            message: format!("{provider} API error: {message}"),
            details: Some(details),
        },
    }
}

fn parse_envelope(body_text: &str) -> Option<(String, Option<String>, Value)> {
    let json: Value = serde_json::from_str(body_text).ok()?;
    let error_obj = json.get("error")?;
    let message = error_obj
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string();
    let grpc_status = error_obj
        .get("status")
        .and_then(Value::as_str)
        .map(str::to_string);
    Some((message, grpc_status, json))
}
