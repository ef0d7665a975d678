//! Bootstrap for the preconfigured Gemini agents.
//!
//! Creates one model handle per [`AgentSpec`], wraps it into an [`LlmAgent`],
//! and stops at the first failure. Deciding whether a failure halts the
//! process is left to the caller; the `bootstrap` binary exits non-zero.
//!
//! ```text
//! create model A ─▶ create agent A ─▶ create model B ─▶ create agent B ─▶ log both
//!       │                 │                 │                 │
//!       └─────────────────┴──── first error returned ─────────┘
//! ```

pub mod telemetry;

use aster_agent::{Agent, AgentConfig, AgentConfigError, LlmAgent};
use aster_model_providers::gemini::{self, ClientConfig};
use aster_models::{ExecutionContext, ModelCreationError};

/// Fixed description of one agent to bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSpec {
    /// Agent display name.
    pub name: &'static str,
    /// Gemini model identifier.
    pub model: &'static str,
    /// System instruction.
    pub instruction: &'static str,
}

/// Agent backed by the stable Gemini Flash model.
pub const GEMINI_FLASH: AgentSpec = AgentSpec {
    name: "gemini_flash_agent",
    model: "gemini-2.0-flash",
    instruction: "You are a fast and helpful Gemini assistant.",
};

/// Agent backed by the generally available Gemini Pro model.
pub const GEMINI_PRO: AgentSpec = AgentSpec {
    name: "gemini_pro_agent",
    model: "gemini-2.5-pro",
    instruction: "You are a powerful and knowledgeable Gemini assistant.",
};

/// Agents created by the `bootstrap` binary, in creation order.
pub const DEFAULT_AGENTS: [AgentSpec; 2] = [GEMINI_FLASH, GEMINI_PRO];

/// Failure while bootstrapping an agent.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The model handle could not be created.
    #[error("failed to create model '{model}' for agent '{agent}': {source}")]
    Model {
        /// Agent being bootstrapped.
        agent: &'static str,
        /// Model identifier that failed.
        model: &'static str,
        /// Underlying error.
        #[source]
        source: ModelCreationError,
    },

    /// The agent configuration was rejected.
    #[error("failed to create agent '{agent}': {source}")]
    Agent {
        /// Agent being bootstrapped.
        agent: &'static str,
        /// Underlying error.
        #[source]
        source: AgentConfigError,
    },
}

/// Creates the model for `spec`, then the agent wrapping it.
///
/// # Errors
///
/// Returns [`BootstrapError::Model`] if the model handle cannot be created, in
/// which case no agent construction is attempted, or [`BootstrapError::Agent`]
/// if the agent configuration is rejected.
pub fn build_agent(
    ctx: &ExecutionContext,
    spec: &AgentSpec,
    config: &ClientConfig,
) -> Result<LlmAgent, BootstrapError> {
    let model = gemini::new_model(ctx, spec.model, config.clone()).map_err(|source| {
        BootstrapError::Model {
            agent: spec.name,
            model: spec.model,
            source,
        }
    })?;

    LlmAgent::new(AgentConfig {
        model: Some(model),
        name: spec.name.to_string(),
        instruction: spec.instruction.to_string(),
        ..Default::default()
    })
    .map_err(|source| BootstrapError::Agent {
        agent: spec.name,
        source,
    })
}

/// Builds every agent in `specs`, strictly in order.
///
/// Returns at the first failure without attempting the remaining specs. On
/// success, logs one line per agent in the same order.
///
/// # Errors
///
/// Returns the first [`BootstrapError`] encountered.
pub fn run(
    ctx: &ExecutionContext,
    specs: &[AgentSpec],
    config: &ClientConfig,
) -> Result<Vec<LlmAgent>, BootstrapError> {
    let agents = specs
        .iter()
        .map(|spec| build_agent(ctx, spec, config))
        .collect::<Result<Vec<_>, _>>()?;

    for agent in &agents {
        tracing::info!(
            agent = agent.name(),
            model = agent.model().model_name(),
            "{} created successfully.",
            agent.name()
        );
    }

    Ok(agents)
}
