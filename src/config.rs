//! Client configuration
//!
//! Credentials are injected through [`ContentConfig`]. Reading the process
//! environment is a convenience ([`ContentConfig::from_env`]) that produces
//! the same struct; nothing else in the crate touches the environment.

use crate::error::LlmError;
use crate::providers::{GeminiConfig, OpenAiConfig};

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "DRAFTSMITH_TIMEOUT_SECS";
pub const ENV_STRICT_RESPONSES: &str = "DRAFTSMITH_STRICT_RESPONSES";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for both providers plus shared client behavior.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Primary provider
    pub openai: OpenAiConfig,
    /// Secondary provider
    pub gemini: GeminiConfig,
    /// Per-request HTTP timeout for providers that do not set their own
    pub timeout_secs: u64,
    /// Promote responses without text to [`LlmError::EmptyResponse`] for both
    /// providers; a provider config can also opt in on its own
    pub strict_responses: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            openai: OpenAiConfig::default(),
            gemini: GeminiConfig::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict_responses: false,
        }
    }
}

impl ContentConfig {
    pub fn new(openai_api_key: impl Into<String>, gemini_api_key: impl Into<String>) -> Self {
        Self {
            openai: OpenAiConfig::new(openai_api_key),
            gemini: GeminiConfig::new(gemini_api_key),
            ..Default::default()
        }
    }

    pub fn with_openai(mut self, openai: OpenAiConfig) -> Self {
        self.openai = openai;
        self
    }

    pub fn with_gemini(mut self, gemini: GeminiConfig) -> Self {
        self.gemini = gemini;
        self
    }

    pub const fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub const fn with_strict_responses(mut self, strict: bool) -> Self {
        self.strict_responses = strict;
        self
    }

    /// Read configuration from the process environment.
    ///
    /// Missing API keys become empty credentials; calls with them fail at the
    /// provider and the fallback still applies.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut openai = OpenAiConfig::new(get(ENV_OPENAI_API_KEY).unwrap_or_default());
        if let Some(base_url) = get(ENV_OPENAI_BASE_URL) {
            openai = openai.with_base_url(base_url);
        }
        if let Some(model) = get(ENV_OPENAI_MODEL) {
            openai = openai.with_model(model);
        }

        let mut gemini = GeminiConfig::new(get(ENV_GEMINI_API_KEY).unwrap_or_default());
        if let Some(base_url) = get(ENV_GEMINI_BASE_URL) {
            gemini = gemini.with_base_url(base_url);
        }
        if let Some(model) = get(ENV_GEMINI_MODEL) {
            gemini = gemini.with_model(model);
        }

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                LlmError::ConfigurationError(format!("{ENV_TIMEOUT_SECS} must be an integer: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let strict_responses = match get(ENV_STRICT_RESPONSES) {
            Some(raw) => parse_bool(ENV_STRICT_RESPONSES, &raw)?,
            None => false,
        };

        Ok(Self {
            openai,
            gemini,
            timeout_secs,
            strict_responses,
        })
    }

    /// Check the settings that would otherwise only fail at request time.
    pub fn validate(&self) -> Result<(), LlmError> {
        let provider_timeouts = [self.openai.timeout, self.gemini.timeout];
        if self.timeout_secs == 0 || provider_timeouts.contains(&Some(0)) {
            return Err(LlmError::ConfigurationError(
                "timeout must be at least one second".to_string(),
            ));
        }
        for (name, url) in [
            ("openai", &self.openai.base_url),
            ("gemini", &self.gemini.base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(LlmError::ConfigurationError(format!(
                    "{name} base URL must be http(s): {url}"
                )));
            }
        }
        self.openai.params.validate_params()?;
        self.gemini.params.validate_params()?;
        Ok(())
    }

    /// Provider configs with the shared settings filled in.
    ///
    /// A timeout set on a provider config wins over `timeout_secs`.
    /// Strictness is on if either level enables it.
    pub(crate) fn resolved(&self) -> (OpenAiConfig, GeminiConfig) {
        let mut openai = self.openai.clone();
        openai.timeout = openai.timeout.or(Some(self.timeout_secs));
        openai.strict_responses |= self.strict_responses;

        let mut gemini = self.gemini.clone();
        gemini.timeout = gemini.timeout.or(Some(self.timeout_secs));
        gemini.strict_responses |= self.strict_responses;
        (openai, gemini)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, LlmError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LlmError::ConfigurationError(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_become_empty_credentials() {
        let config = ContentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.openai.api_key.expose_secret(), "");
        assert_eq!(config.gemini.api_key.expose_secret(), "");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.strict_responses);
    }

    #[test]
    fn reads_overrides() {
        let config = ContentConfig::from_lookup(lookup(&[
            (ENV_OPENAI_API_KEY, "sk-1"),
            (ENV_OPENAI_BASE_URL, "http://localhost:8080/v1"),
            (ENV_OPENAI_MODEL, "gpt-4o"),
            (ENV_GEMINI_API_KEY, "g-1"),
            (ENV_GEMINI_MODEL, "gemini-1.5-flash"),
            (ENV_TIMEOUT_SECS, "12"),
            (ENV_STRICT_RESPONSES, "yes"),
        ]))
        .unwrap();
        assert_eq!(config.openai.api_key.expose_secret(), "sk-1");
        assert_eq!(config.openai.base_url, "http://localhost:8080/v1");
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.gemini.api_key.expose_secret(), "g-1");
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.timeout_secs, 12);
        assert!(config.strict_responses);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_numbers_and_bools() {
        assert!(matches!(
            ContentConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])),
            Err(LlmError::ConfigurationError(_))
        ));
        assert!(matches!(
            ContentConfig::from_lookup(lookup(&[(ENV_STRICT_RESPONSES, "maybe")])),
            Err(LlmError::ConfigurationError(_))
        ));
    }

    #[test]
    fn validate_catches_bad_settings() {
        assert!(ContentConfig::default().with_timeout(0).validate().is_err());
        let bad_url = ContentConfig::default()
            .with_openai(OpenAiConfig::new("k").with_base_url("ftp://nope"));
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn resolved_applies_shared_settings() {
        let (openai, gemini) = ContentConfig::new("a", "b")
            .with_timeout(5)
            .with_strict_responses(true)
            .resolved();
        assert_eq!(openai.timeout, Some(5));
        assert_eq!(gemini.timeout, Some(5));
        assert!(openai.strict_responses && gemini.strict_responses);
    }

    #[test]
    fn provider_settings_survive_resolution() {
        let (openai, gemini) = ContentConfig::new("a", "b")
            .with_openai(
                OpenAiConfig::new("a")
                    .with_timeout(90)
                    .with_strict_responses(true),
            )
            .with_timeout(5)
            .resolved();
        assert_eq!(openai.timeout, Some(90));
        assert!(openai.strict_responses);
        assert_eq!(gemini.timeout, Some(5));
        assert!(!gemini.strict_responses);
    }

    #[test]
    fn zero_provider_timeout_is_rejected() {
        let config = ContentConfig::default().with_gemini(GeminiConfig::new("g").with_timeout(0));
        assert!(matches!(
            config.validate(),
            Err(LlmError::ConfigurationError(_))
        ));
    }
}
