//! The [`LlmProvider`] trait for LLM model providers.

use crate::error::ModelCreationError;

/// Trait implemented by hosted LLM providers.
///
/// Provider crates implement this trait so that [`Llm`](super::Llm) handles and the
/// [`ModelRegistry`](crate::ModelRegistry) can stay provider-agnostic.
pub trait LlmProvider: Send + Sync + 'static {
    /// Short provider name (e.g. `"gemini"`).
    fn name(&self) -> &str;

    /// Checks that `model` names a model this provider can serve.
    ///
    /// Returns the canonical model identifier on success.
    ///
    /// # Errors
    ///
    /// Returns [`ModelCreationError::InvalidModelId`] for malformed identifiers and
    /// [`ModelCreationError::UnsupportedModel`] for identifiers the provider does not
    /// recognize.
    fn resolve_model(&self, model: &str) -> Result<String, ModelCreationError>;

    /// Returns the remote endpoint that serves `model`.
    fn endpoint(&self, model: &str) -> String;
}
