//! End-to-end tests for the bootstrap routine.

mod common;

use aster_agent::{Agent, AgentConfigError};
use aster_model_providers::gemini::ClientConfig;
use aster_models::{ExecutionContext, ModelCreationError};
use bootstrap::{AgentSpec, BootstrapError, DEFAULT_AGENTS, GEMINI_FLASH, GEMINI_PRO};
use common::with_captured_logs;

fn config() -> ClientConfig {
    ClientConfig::default().with_api_key("test-api-key")
}

#[test]
fn creates_flash_and_pro_agents_in_order() {
    let (result, logs) =
        with_captured_logs(|| bootstrap::run(&ExecutionContext::new(), &DEFAULT_AGENTS, &config()));
    let agents = result.expect("bootstrap should succeed");

    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].name(), "gemini_flash_agent");
    assert_eq!(
        agents[0].instruction(),
        "You are a fast and helpful Gemini assistant."
    );
    assert_eq!(agents[0].model().model_name(), "gemini-2.0-flash");
    assert_eq!(agents[1].name(), "gemini_pro_agent");
    assert_eq!(
        agents[1].instruction(),
        "You are a powerful and knowledgeable Gemini assistant."
    );
    assert_eq!(agents[1].model().model_name(), "gemini-2.5-pro");

    let logs = logs.contents();
    let flash = logs
        .find("gemini_flash_agent created successfully.")
        .expect("flash success line");
    let pro = logs
        .find("gemini_pro_agent created successfully.")
        .expect("pro success line");
    assert!(flash < pro, "success lines out of order:\n{logs}");
}

#[test]
fn invalid_first_model_stops_before_any_agent() {
    let specs = [
        AgentSpec {
            model: "not-a-gemini-model",
            ..GEMINI_FLASH
        },
        GEMINI_PRO,
    ];

    let (result, logs) =
        with_captured_logs(|| bootstrap::run(&ExecutionContext::new(), &specs, &config()));

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        BootstrapError::Model {
            agent: "gemini_flash_agent",
            source: ModelCreationError::UnsupportedModel(_),
            ..
        }
    ));

    let logs = logs.contents();
    assert!(!logs.contains("built llm agent"), "no agent should be built:\n{logs}");
    assert!(!logs.contains("gemini-2.5-pro"), "second model was attempted:\n{logs}");
    assert!(!logs.contains("created successfully"));
}

#[test]
fn second_failure_discards_first_agent() {
    let specs = [
        GEMINI_FLASH,
        AgentSpec {
            name: "user",
            ..GEMINI_PRO
        },
    ];

    let (result, logs) =
        with_captured_logs(|| bootstrap::run(&ExecutionContext::new(), &specs, &config()));

    assert!(matches!(
        result.unwrap_err(),
        BootstrapError::Agent {
            agent: "user",
            source: AgentConfigError::ReservedName(_),
        }
    ));
    assert!(!logs.contents().contains("created successfully"));
}

#[test]
fn missing_credentials_fail_model_creation() {
    let err = bootstrap::run(
        &ExecutionContext::new(),
        &DEFAULT_AGENTS,
        &ClientConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        BootstrapError::Model {
            source: ModelCreationError::InvalidClientConfig(_),
            ..
        }
    ));
}

#[test]
fn cancelled_context_fails_fast() {
    let ctx = ExecutionContext::new();
    ctx.cancel();

    let err = bootstrap::run(&ctx, &DEFAULT_AGENTS, &config()).unwrap_err();
    assert!(matches!(
        err,
        BootstrapError::Model {
            source: ModelCreationError::Cancelled,
            ..
        }
    ));
}

#[test]
fn agents_are_independent() {
    let agents = bootstrap::run(&ExecutionContext::new(), &DEFAULT_AGENTS, &config()).unwrap();
    let flash_alone =
        bootstrap::build_agent(&ExecutionContext::new(), &GEMINI_FLASH, &config()).unwrap();

    assert_eq!(agents[0].name(), flash_alone.name());
    assert_eq!(agents[0].instruction(), flash_alone.instruction());
    assert_eq!(
        agents[0].model().model_name(),
        flash_alone.model().model_name()
    );
    assert_ne!(agents[0].model().endpoint(), agents[1].model().endpoint());
}
