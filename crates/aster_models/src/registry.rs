//! Model provider registry.

use crate::context::ExecutionContext;
use crate::error::ModelCreationError;
use crate::llm::{Llm, LlmProvider};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for model provider implementations.
///
/// # For Consumers
///
/// Access models using provider/model identifiers (e.g., `"gemini/gemini-2.0-flash"`).
/// See [`llm()`](Self::llm) for details.
///
/// # For Provider Authors
///
/// Register a provider once under the name used as the identifier prefix:
///
/// ```
/// # use aster_models::{ExecutionContext, ModelCreationError, ModelRegistry};
/// # use aster_models::llm::LlmProvider;
/// # use std::sync::Arc;
/// struct MyProvider;
///
/// impl LlmProvider for MyProvider {
///     fn name(&self) -> &str {
///         "my_provider"
///     }
///
///     fn resolve_model(&self, model: &str) -> Result<String, ModelCreationError> {
///         Ok(model.to_string())
///     }
///
///     fn endpoint(&self, model: &str) -> String {
///         format!("https://models.example.com/{model}")
///     }
/// }
///
/// let mut registry = ModelRegistry::new();
/// registry.register_llm_provider("my_provider", Arc::new(MyProvider));
///
/// let llm = registry.llm(&ExecutionContext::new(), "my_provider/small").unwrap();
/// assert_eq!(llm.model_name(), "small");
/// ```
#[derive(Default)]
pub struct ModelRegistry {
    // Maps provider names to implementations.
    llm_providers: HashMap<String, Arc<dyn LlmProvider>>,
}

impl core::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("llm_providers", &self.llm_provider_names())
            .finish()
    }
}

impl ModelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            llm_providers: HashMap::new(),
        }
    }

    /// Creates a handle to an [`Llm`].
    ///
    /// # Arguments
    ///
    /// * `ctx` - Execution context; creation is refused once it is cancelled
    /// * `model_id` - Identifier in `"provider/model"` format (e.g., `"gemini/gemini-2.5-pro"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the context is cancelled, the `model_id` structure is invalid,
    /// the provider is not registered, or the provider does not recognize the model.
    pub fn llm(
        &self,
        ctx: &ExecutionContext,
        model_id: impl AsRef<str>,
    ) -> Result<Llm, ModelCreationError> {
        if ctx.is_cancelled() {
            return Err(ModelCreationError::Cancelled);
        }

        let model_id = model_id.as_ref();

        let (provider_name, model_name) = model_id
            .split_once('/')
            .filter(|(provider, model)| !provider.is_empty() && !model.is_empty())
            .ok_or_else(|| ModelCreationError::InvalidModelId(model_id.to_string()))?;

        let provider = self
            .get_llm_provider(provider_name)
            .ok_or_else(|| ModelCreationError::UnknownProvider(provider_name.to_string()))?;

        let model = provider.resolve_model(model_name)?;
        tracing::debug!(provider = provider_name, model = %model, "resolved model handle");

        Ok(Llm::new(provider, model))
    }

    /// Registers an LLM provider.
    ///
    /// # Arguments
    ///
    /// * `name` - Provider name used in identifiers (e.g., `"gemini"` for `"gemini/gemini-2.0-flash"`)
    /// * `provider` - The provider implementation
    ///
    /// # Panics
    ///
    /// Panics if a provider with the same name is already registered.
    pub fn register_llm_provider<P: LlmProvider>(
        &mut self,
        name: impl Into<String>,
        provider: Arc<P>,
    ) {
        let name = name.into();
        assert!(
            !self.llm_providers.contains_key(&name),
            "LLM provider '{name}' is already registered"
        );
        self.llm_providers
            .insert(name, provider as Arc<dyn LlmProvider>);
    }

    /// Returns a provider by name.
    #[must_use]
    pub fn get_llm_provider(&self, name: impl AsRef<str>) -> Option<Arc<dyn LlmProvider>> {
        self.llm_providers.get(name.as_ref()).cloned()
    }

    /// Checks if a provider is registered.
    #[must_use]
    pub fn has_llm_provider(&self, name: impl AsRef<str>) -> bool {
        self.llm_providers.contains_key(name.as_ref())
    }

    /// Lists registered provider names, sorted.
    #[must_use]
    pub fn llm_provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.llm_providers.keys().cloned().collect();
        names.sort();
        names
    }
}
