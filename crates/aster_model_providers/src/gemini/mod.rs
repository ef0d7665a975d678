//! Gemini provider backend.
//!
//! Targets either the Gemini API (`generativelanguage.googleapis.com`) or
//! Vertex AI, depending on [`Backend`].
//!
//! ```no_run
//! use aster_model_providers::gemini::{self, ClientConfig};
//! use aster_models::ExecutionContext;
//!
//! let ctx = ExecutionContext::new();
//! let config = ClientConfig::default().with_api_key("my-key");
//! let llm = gemini::new_model(&ctx, "gemini-2.5-pro", config).unwrap();
//! ```

mod client;
mod config;
mod provider;

pub use config::{Backend, ClientConfig, HttpOptions};
pub use provider::{GeminiProvider, KNOWN_MODELS, new_model};
