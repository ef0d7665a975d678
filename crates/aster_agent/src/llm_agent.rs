//! The [`LlmAgent`] type.

use crate::Agent;
use crate::config::{AgentConfig, IncludeContents};
use crate::error::AgentConfigError;
use aster_models::llm::Llm;

// Name the end user's turns are attributed to.
const RESERVED_NAME: &str = "user";

/// A conversational agent bound to exactly one hosted model.
#[derive(Debug, Clone)]
pub struct LlmAgent {
    model: Llm,
    name: String,
    instruction: String,
    description: String,
    output_key: Option<String>,
    include_contents: IncludeContents,
}

impl LlmAgent {
    /// Validates `config` and builds the agent.
    ///
    /// # Errors
    ///
    /// - [`AgentConfigError::EmptyName`] if `name` is empty
    /// - [`AgentConfigError::InvalidName`] if `name` is not an identifier
    /// - [`AgentConfigError::ReservedName`] if `name` is `user`
    /// - [`AgentConfigError::MissingModel`] if no model handle is set
    pub fn new(config: AgentConfig) -> Result<Self, AgentConfigError> {
        let AgentConfig {
            model,
            name,
            instruction,
            description,
            output_key,
            include_contents,
        } = config;

        validate_name(&name)?;
        let Some(model) = model else {
            return Err(AgentConfigError::MissingModel(name));
        };

        tracing::debug!(agent = %name, model = model.model_name(), "built llm agent");

        Ok(Self {
            model,
            name,
            instruction,
            description,
            output_key,
            include_contents,
        })
    }

    /// Returns the bound model handle.
    #[must_use]
    pub fn model(&self) -> &Llm {
        &self.model
    }

    /// Returns the system instruction.
    #[must_use]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Returns the output key, if any.
    #[must_use]
    pub fn output_key(&self) -> Option<&str> {
        self.output_key.as_deref()
    }

    /// Returns the conversation history policy.
    #[must_use]
    pub fn include_contents(&self) -> IncludeContents {
        self.include_contents
    }
}

impl Agent for LlmAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

fn validate_name(name: &str) -> Result<(), AgentConfigError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(AgentConfigError::EmptyName);
    };

    let is_identifier = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !is_identifier {
        return Err(AgentConfigError::InvalidName(name.to_string()));
    }

    if name == RESERVED_NAME {
        return Err(AgentConfigError::ReservedName(name.to_string()));
    }

    Ok(())
}
