//! Logging setup and secret masking
//!
//! The library itself only emits `tracing` events. Applications that do not
//! install their own subscriber can call [`init_tracing`] once at startup.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::LlmError;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Subscriber configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    pub format: OutputFormat,
    /// Include file and line of each event
    pub with_location: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: OutputFormat::default(),
            with_location: false,
        }
    }
}

impl TracingConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub const fn with_location(mut self, with_location: bool) -> Self {
        self.with_location = with_location;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Install a global `tracing-subscriber` fmt subscriber.
///
/// Fails with [`LlmError::ConfigurationError`] if a global subscriber has
/// already been set.
pub fn init_tracing(config: &TracingConfig) -> Result<(), LlmError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    let fmt = tracing_subscriber::fmt::layer()
        .with_file(config.with_location)
        .with_line_number(config.with_location);

    let result = match config.format {
        OutputFormat::Pretty => registry.with(fmt.pretty()).try_init(),
        OutputFormat::Compact => registry.with(fmt.compact()).try_init(),
        OutputFormat::Json => registry.with(fmt.json().flatten_event(true)).try_init(),
    };

    result.map_err(|e| LlmError::ConfigurationError(format!("Failed to initialize tracing: {e}")))
}

/// Mask a credential for logging, keeping only a short prefix and suffix.
pub fn mask_sensitive_value(value: &str) -> String {
    if let Some(token) = value.strip_prefix("Bearer ") {
        return format!("Bearer {}", mask_sensitive_value(token));
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Replace the value of a `key` query parameter with a mask so URLs can be
/// logged without leaking credentials.
pub fn redact_query_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let redacted: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("key", _)) => "key=***".to_string(),
            _ => pair.to_string(),
        })
        .collect();
    format!("{base}?{}", redacted.join("&"))
}
