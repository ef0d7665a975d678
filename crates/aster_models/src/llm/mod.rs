//! LLM (Large Language Model) handles.
//!
//! This module provides the provider trait implemented by backend crates and
//! the [`Llm`] handle that agents bind to.

mod model;
mod provider;

pub use model::Llm;
pub use provider::LlmProvider;
