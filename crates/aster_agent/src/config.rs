//! Agent configuration literal.

use aster_models::llm::Llm;

/// Whether prior conversation contents are sent to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IncludeContents {
    /// Send the relevant conversation history.
    #[default]
    Default,
    /// Send only the current turn; the agent relies on its instruction alone.
    None,
}

/// Configuration for an [`LlmAgent`](crate::LlmAgent).
///
/// `model` and `name` are required; everything else is optional. Validation
/// happens in [`LlmAgent::new`](crate::LlmAgent::new).
#[derive(Debug, Clone, Default)]
pub struct AgentConfig {
    /// Model handle the agent is bound to.
    pub model: Option<Llm>,
    /// Unique display name.
    pub name: String,
    /// System instruction sent with every request.
    pub instruction: String,
    /// One-line description of the agent's capability.
    pub description: String,
    /// Session state key the agent's final response is stored under.
    pub output_key: Option<String>,
    /// Conversation history policy.
    pub include_contents: IncludeContents,
}

impl AgentConfig {
    /// Creates a configuration with the given name and nothing else set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Binds the model handle.
    #[must_use]
    pub fn with_model(mut self, model: Llm) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the system instruction.
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the output key.
    #[must_use]
    pub fn with_output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }

    /// Sets the conversation history policy.
    #[must_use]
    pub fn with_include_contents(mut self, include_contents: IncludeContents) -> Self {
        self.include_contents = include_contents;
        self
    }
}
