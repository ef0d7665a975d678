//! Errors returned while validating an [`AgentConfig`](crate::AgentConfig).

/// Invalid agent configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentConfigError {
    /// No model handle was supplied.
    #[error("agent '{0}' has no model")]
    MissingModel(String),

    /// The agent name is empty.
    #[error("agent name must not be empty")]
    EmptyName,

    /// The agent name is not an identifier.
    #[error("agent name '{0}' must start with a letter or underscore and contain only letters, digits, and underscores")]
    InvalidName(String),

    /// The agent name is reserved for the end user.
    #[error("agent name '{0}' is reserved")]
    ReservedName(String),
}
