//! Generation parameters shared by all providers

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::LlmError;

/// Sampling and length controls for a generation call.
///
/// Providers map these onto their own request schema and ignore the
/// fields they do not support (the chat-completion provider has no `top_k`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct GenerationParams {
    /// Sampling temperature
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: Option<f64>,

    /// Upper bound on generated tokens
    #[validate(range(min = 1))]
    pub max_tokens: Option<u32>,

    /// Nucleus sampling probability mass
    #[validate(range(min = 0.0, max = 1.0))]
    pub top_p: Option<f64>,

    /// Top-k sampling cutoff
    #[validate(range(min = 1))]
    pub top_k: Option<u32>,
}

impl GenerationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub const fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub const fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Validate ranges, mapping failures onto [`LlmError::InvalidParameter`].
    pub fn validate_params(&self) -> Result<(), LlmError> {
        self.validate()
            .map_err(|e| LlmError::InvalidParameter(e.to_string()))
    }
}
