//! # Aster Internal Library
//!
//! Re-exports the core Aster crates for convenience.

/// Model handles, execution context, and registry.
pub use aster_models;

/// Hosted model provider backends.
pub use aster_model_providers;

/// Validated agent configuration.
pub use aster_agent;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use aster_agent::{Agent, AgentConfig, AgentConfigError, IncludeContents, LlmAgent};
    pub use aster_models::llm::{Llm, LlmProvider};
    pub use aster_models::{ExecutionContext, ModelCreationError, ModelRegistry};
}
