//! Error types
//!
//! A single error enum is shared by every provider and by the composed
//! content operations, so a failure keeps its classification as it bubbles
//! up through the provider chain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LlmError>;

/// One failed attempt recorded by the provider chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFailure {
    /// Provider that was tried
    pub provider: String,
    /// Rendered error message
    pub message: String,
}

impl std::fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.provider, self.message)
    }
}

/// Errors produced while generating content.
#[derive(Error, Debug, Clone)]
pub enum LlmError {
    /// Transport level failure (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The request did not complete within the configured timeout
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// Non-success status that could not be classified further
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Credential rejected by the provider
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Provider rate limit hit
    #[error("Rate limit error: {0}")]
    RateLimitError(String),

    /// Account quota exhausted
    #[error("Quota exceeded: {0}")]
    QuotaExceededError(String),

    /// Provider rejected the request as malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model or endpoint not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body was not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response JSON did not carry any generated text (strict mode only)
    #[error("Empty response from {provider}")]
    EmptyResponse { provider: String },

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Generation parameters out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Every provider in the chain failed
    #[error("All providers failed: {}", format_attempts(.attempts))]
    AllProvidersFailed { attempts: Vec<ProviderFailure> },
}

fn format_attempts(attempts: &[ProviderFailure]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LlmError {
    /// Map a non-success status onto a variant, keeping `message` as given.
    pub fn from_status(status: u16, message: String, details: Option<serde_json::Value>) -> Self {
        match status {
            401 | 403 => Self::AuthenticationError(message),
            429 => Self::RateLimitError(message),
            404 => Self::NotFound(message),
            400 | 422 => Self::InvalidInput(message),
            _ => Self::ApiError {
                code: status,
                message,
                details,
            },
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            Self::AuthenticationError(_) => Some(401),
            Self::RateLimitError(_) => Some(429),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Whether retrying the same request later could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) | Self::TimeoutError(_) | Self::RateLimitError(_) => true,
            Self::ApiError { code, .. } => *code == 429 || *code >= 500,
            _ => false,
        }
    }

    /// Whether this error is the result of exhausting the provider chain.
    pub fn is_chain_exhausted(&self) -> bool {
        matches!(self, Self::AllProvidersFailed { .. })
    }
}

impl From<reqwest::Error> for LlmError {
    /// The request URL is dropped from the message: Gemini carries its API
    /// key in the query string.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let message = match std::error::Error::source(&err) {
            Some(source) => format!("{err}: {source}"),
            None => err.to_string(),
        };
        if err.is_timeout() {
            Self::TimeoutError(message)
        } else {
            Self::HttpError(message)
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

/// Generic classifier for non-success responses whose body does not match
/// any known provider envelope.
pub fn classify_http_error(provider: &str, status: u16, body_text: &str) -> LlmError {
    let details = serde_json::from_str::<serde_json::Value>(body_text).ok();
    let message = if body_text.trim().is_empty() {
        format!("{provider} returned HTTP {status}")
    } else {
        body_text.to_string()
    };

    LlmError::from_status(status, message, details)
}
