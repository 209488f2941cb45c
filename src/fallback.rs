//! Ordered provider fallback
//!
//! A [`ProviderChain`] tries each provider once, in order, and returns the
//! first success. No provider is retried, so a chain of `n` providers issues
//! at most `n` requests per call.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{LlmError, ProviderFailure};
use crate::providers::GenerationProvider;
use crate::types::GenerationRequest;

/// Ordered list of providers sharing one interface.
#[derive(Clone, Default)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn GenerationProvider>>,
}

impl std::fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|p| p.provider_id()))
            .finish()
    }
}

impl ProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider; it is tried after every provider already present.
    pub fn with_provider(mut self, provider: Arc<dyn GenerationProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn push(&mut self, provider: Arc<dyn GenerationProvider>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider ids in call order.
    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.provider_id()).collect()
    }

    /// Generate text, falling through the chain on failure.
    ///
    /// Each provider receives its own system prompt for `request.kind` and its
    /// own default parameters.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        if self.providers.is_empty() {
            return Err(LlmError::ConfigurationError(
                "provider chain has no providers".to_string(),
            ));
        }

        let mut attempts = Vec::with_capacity(self.providers.len());
        for (index, provider) in self.providers.iter().enumerate() {
            let id = provider.provider_id();
            debug!(provider = %id, kind = %request.kind, "generating");

            let system_prompt = provider.system_prompt(request.kind);
            match provider
                .generate(system_prompt, &request.prompt, provider.default_params())
                .await
            {
                Ok(text) => return Ok(text),
                Err(err) => {
                    if let Some(next) = self.providers.get(index + 1) {
                        warn!(
                            provider = %id,
                            fallback = %next.provider_id(),
                            kind = %request.kind,
                            error = %err,
                            "provider failed, falling back"
                        );
                    } else {
                        warn!(provider = %id, kind = %request.kind, error = %err, "last provider failed");
                    }
                    attempts.push(ProviderFailure {
                        provider: id.to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        Err(LlmError::AllProvidersFailed { attempts })
    }
}
