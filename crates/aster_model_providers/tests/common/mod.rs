//! Shared test helpers for provider integration tests.

use std::sync::Once;

use aster_model_providers::gemini::ClientConfig;

static INIT: Once = Once::new();

/// Initialize environment variables from `.env` file (once).
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

/// A Gemini API configuration with a placeholder key.
pub fn test_config() -> ClientConfig {
    ClientConfig::default().with_api_key("test-api-key")
}
