//! Model provider backends for Aster.
//!
//! Each provider lives in its own feature-gated module and produces
//! [`Llm`](aster_models::llm::Llm) handles, either directly through a factory
//! function or through the [`ModelRegistry`](aster_models::ModelRegistry).
//!
//! # Supported Providers
//!
//! | Provider | Feature Flag | Description |
//! |----------|--------------|-------------|
//! | Gemini | `gemini` (default) | Gemini API and Vertex AI |
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use aster_model_providers::gemini::{self, ClientConfig};
//! use aster_models::ExecutionContext;
//!
//! let ctx = ExecutionContext::new();
//! let llm = gemini::new_model(&ctx, "gemini-2.0-flash", ClientConfig::from_env()).unwrap();
//! # }
//! ```

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiProvider;
