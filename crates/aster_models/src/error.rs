//! Error types for model creation.

/// Error creating a model handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelCreationError {
    /// Invalid model ID format.
    #[error("invalid model id '{0}'")]
    InvalidModelId(String),

    /// The specified provider was not found in the registry.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// The specified model is not recognized by the provider.
    #[error("unsupported model: {0}")]
    UnsupportedModel(String),

    /// The client configuration handed to the provider is unusable.
    #[error("invalid client configuration: {0}")]
    InvalidClientConfig(String),

    /// The execution context was cancelled before the model was created.
    #[error("model creation cancelled")]
    Cancelled,
}
