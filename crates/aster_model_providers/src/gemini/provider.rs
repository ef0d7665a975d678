//! Gemini [`LlmProvider`] implementation.

use super::client::GeminiClient;
use super::config::{Backend, ClientConfig};
use aster_models::llm::{Llm, LlmProvider};
use aster_models::{ExecutionContext, ModelCreationError};
use std::sync::Arc;

/// Gemini model families recognized by the provider.
///
/// A model identifier is recognized when it equals one of these entries or
/// extends one with a `-` suffix (`gemini-2.0-flash-001`,
/// `gemini-2.5-pro-preview-05-06`).
pub const KNOWN_MODELS: &[&str] = &[
    "gemini-2.5-pro",
    "gemini-2.5-flash",
    "gemini-2.5-flash-lite",
    "gemini-2.0-flash",
    "gemini-2.0-flash-lite",
    "gemini-1.5-pro",
    "gemini-1.5-flash",
];

/// Gemini [`LlmProvider`] implementation.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    /// Name under which the provider registers with a
    /// [`ModelRegistry`](aster_models::ModelRegistry).
    pub const NAME: &'static str = "gemini";

    /// Creates a provider from a client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelCreationError::InvalidClientConfig`] if the configuration
    /// is missing credentials or contains malformed transport settings.
    pub fn new(config: &ClientConfig) -> Result<Self, ModelCreationError> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    /// Returns the backend this provider talks to.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.client.backend()
    }

    /// Returns the preconfigured HTTP client used for requests.
    #[must_use]
    pub fn http_client(&self) -> &reqwest::Client {
        self.client.http()
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn resolve_model(&self, model: &str) -> Result<String, ModelCreationError> {
        canonical_model_id(model)
    }

    fn endpoint(&self, model: &str) -> String {
        self.client.generate_content_url(model)
    }
}

/// Creates a handle to a Gemini model.
///
/// The identifier may carry a `models/` prefix. The returned handle owns its
/// own provider instance, so handles created from different configurations
/// never share state.
///
/// # Errors
///
/// Checked in the order listed; the first failure is returned.
///
/// - [`ModelCreationError::Cancelled`] if `ctx` has been cancelled
/// - [`ModelCreationError::InvalidModelId`] for an empty identifier
/// - [`ModelCreationError::UnsupportedModel`] for an identifier outside [`KNOWN_MODELS`]
/// - [`ModelCreationError::InvalidClientConfig`] if `config` is unusable
pub fn new_model(
    ctx: &ExecutionContext,
    model: &str,
    config: ClientConfig,
) -> Result<Llm, ModelCreationError> {
    if ctx.is_cancelled() {
        return Err(ModelCreationError::Cancelled);
    }

    let model = canonical_model_id(model)?;
    let provider = GeminiProvider::new(&config)?;

    tracing::debug!(
        model = %model,
        backend = ?provider.backend(),
        "created gemini model handle"
    );

    Ok(Llm::new(Arc::new(provider), model))
}

fn canonical_model_id(model: &str) -> Result<String, ModelCreationError> {
    let trimmed = model.trim();
    let name = trimmed.strip_prefix("models/").unwrap_or(trimmed);

    if name.is_empty() {
        return Err(ModelCreationError::InvalidModelId(model.to_string()));
    }

    let recognized = KNOWN_MODELS.iter().any(|known| {
        name.strip_prefix(known)
            .is_some_and(|rest| rest.is_empty() || (rest.len() > 1 && rest.starts_with('-')))
    });

    if recognized {
        Ok(name.to_string())
    } else {
        Err(ModelCreationError::UnsupportedModel(name.to_string()))
    }
}
