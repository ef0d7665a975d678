//! Model provider interface and registry for Aster.
//!
//! Provides a unified handle for hosted language models, decoupling agents from
//! provider implementations.
//!
//! # Overview
//!
//! - Provider-agnostic: Agents hold an [`Llm`](llm::Llm) handle and never depend
//!   on a specific provider crate.
//!
//! - Fail-fast construction: Creating a handle validates the model identifier
//!   up front and reports a [`ModelCreationError`](error::ModelCreationError).
//!   No network traffic happens at creation time.
//!
//! - Cancellable: Every creation path takes an [`ExecutionContext`] and refuses
//!   to proceed once it has been cancelled.
//!
//! # Example
//!
//! ```ignore
//! use aster_models::{ExecutionContext, ModelRegistry};
//! use std::sync::Arc;
//!
//! let mut registry = ModelRegistry::new();
//! registry.register_llm_provider("gemini", Arc::new(provider));
//!
//! let ctx = ExecutionContext::new();
//! let llm = registry.llm(&ctx, "gemini/gemini-2.0-flash")?;
//! assert_eq!(llm.model_name(), "gemini-2.0-flash");
//! ```

pub mod context;
pub mod error;
pub mod llm;
mod registry;

pub use context::ExecutionContext;
pub use error::ModelCreationError;
pub use registry::ModelRegistry;
