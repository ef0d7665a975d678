//! Named, instructed agents bound to a hosted model.
//!
//! An agent is built from an [`AgentConfig`] literal and validated once, at
//! construction. A successfully built [`LlmAgent`] always holds exactly one
//! model handle and a valid name.
//!
//! # Example
//!
//! ```ignore
//! use aster_agent::{Agent, AgentConfig, LlmAgent};
//!
//! let agent = LlmAgent::new(AgentConfig {
//!     model: Some(llm),
//!     name: "gemini_flash_agent".into(),
//!     instruction: "You are a fast and helpful Gemini assistant.".into(),
//!     ..Default::default()
//! })?;
//!
//! assert_eq!(agent.name(), "gemini_flash_agent");
//! ```

mod config;
mod error;
mod llm_agent;

pub use config::{AgentConfig, IncludeContents};
pub use error::AgentConfigError;
pub use llm_agent::LlmAgent;

/// Common surface shared by every agent kind.
pub trait Agent: Send + Sync + 'static {
    /// Returns the agent's unique name.
    fn name(&self) -> &str;

    /// Returns a one-line description of what the agent does.
    ///
    /// Defaults to an empty string.
    fn description(&self) -> &str {
        ""
    }
}
