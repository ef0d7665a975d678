//! LLM handle bound to a single hosted model.

use super::provider::LlmProvider;
use std::sync::Arc;

/// A handle to a hosted LLM.
///
/// Created via a provider factory or [`ModelRegistry::llm()`](crate::ModelRegistry::llm).
/// The handle is immutable once created.
#[derive(Clone)]
pub struct Llm {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl Llm {
    /// Creates a new LLM handle from a provider and an already resolved model name.
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Returns the model name (without provider prefix).
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Returns the name of the provider serving this model.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Returns the remote endpoint generation requests for this model are sent to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.provider.endpoint(&self.model)
    }
}

impl core::fmt::Debug for Llm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Llm")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .finish()
    }
}
