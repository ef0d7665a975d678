//! Creates the preconfigured Gemini agents.
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=... bootstrap
//! ```
//!
//! Exits with status 1 on the first model or agent construction failure.

use aster_model_providers::gemini::ClientConfig;
use aster_models::ExecutionContext;
use bootstrap::DEFAULT_AGENTS;
use bootstrap::telemetry::TracingConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    TracingConfig::from_env().init();

    let ctx = ExecutionContext::new();
    let config = ClientConfig::from_env();

    match bootstrap::run(&ctx, &DEFAULT_AGENTS, &config) {
        Ok(_agents) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
