//! Safety Gate Integration Tests
//!
//! Exercises the environment-variable gate through `ChaosInterceptor::new`:
//! - Unset or non-"true" values forward every call, handler runs once
//! - "true" in any case arms the interceptor
//! - Flipping the variable between calls takes effect immediately

use std::cell::Cell;

use chaos_interceptor::{
    ChaosConfig, ChaosInterceptor, CoreError, FailureKind, ModelCall, ToolCall,
};
use serial_test::serial;

use super::common::ok_handler;

const KEY: &str = "CHAOS_INTEGRATION_GATE";

fn always_fail() -> ChaosInterceptor {
    ChaosInterceptor::new(ChaosConfig {
        failure_rate: 1.0,
        exception_types: vec![FailureKind::InvalidValue],
        include_tools: None,
        exclude_tools: vec![],
        seed: Some(42),
        safety_key: KEY.to_string(),
    })
    .unwrap()
}

#[test]
#[serial]
fn test_unset_gate_forwards_tool_and_model_calls() {
    std::env::remove_var(KEY);
    let chaos = always_fail();

    for _ in 0..50 {
        let result = chaos.intercept_tool_call(&ToolCall::new("test_tool"), ok_handler);
        assert_eq!(result.unwrap(), "success");
        let result = chaos.intercept_model_call(&ModelCall::new("m"), ok_handler);
        assert_eq!(result.unwrap(), "success");
    }
}

#[test]
#[serial]
fn test_non_true_values_forward() {
    let chaos = always_fail();
    for value in ["false", "1", "yes", "", "enabled"] {
        std::env::set_var(KEY, value);
        let result = chaos.intercept_tool_call(&ToolCall::new("test_tool"), ok_handler);
        assert!(result.is_ok(), "value {:?} should not arm chaos", value);
    }
    std::env::remove_var(KEY);
}

#[test]
#[serial]
fn test_closed_gate_runs_handler_exactly_once_and_passes_errors() {
    std::env::remove_var(KEY);
    let chaos = always_fail();
    let runs = Cell::new(0);

    let result: Result<(), CoreError> = chaos.intercept_tool_call(&ToolCall::new("t"), |_| {
        runs.set(runs.get() + 1);
        Err(CoreError::command("disk full"))
    });

    assert_eq!(runs.get(), 1);
    assert_eq!(result.unwrap_err().to_string(), "Command error: disk full");
}

#[test]
#[serial]
fn test_true_in_any_case_arms_both_paths() {
    let chaos = always_fail();
    for value in ["true", "TRUE", "True"] {
        std::env::set_var(KEY, value);
        let tool: Result<(), CoreError> =
            chaos.intercept_tool_call(&ToolCall::new("test_tool"), |_| Ok(()));
        assert!(matches!(tool, Err(CoreError::InvalidValue(_))));

        let model: Result<(), CoreError> =
            chaos.intercept_model_call(&ModelCall::new("m"), |_| Ok(()));
        assert!(matches!(model, Err(CoreError::InvalidValue(_))));
    }
    std::env::remove_var(KEY);
}

#[test]
#[serial]
fn test_toggle_between_calls_takes_effect() {
    let chaos = always_fail();

    std::env::set_var(KEY, "true");
    assert!(chaos.is_armed());
    assert!(chaos
        .intercept_tool_call(&ToolCall::new("t"), ok_handler)
        .is_err());

    std::env::set_var(KEY, "false");
    assert!(!chaos.is_armed());
    assert!(chaos
        .intercept_tool_call(&ToolCall::new("t"), ok_handler)
        .is_ok());

    std::env::set_var(KEY, "true");
    assert!(chaos
        .intercept_tool_call(&ToolCall::new("t"), ok_handler)
        .is_err());

    std::env::remove_var(KEY);
}

#[test]
#[serial]
fn test_default_safety_key_is_enable_chaos() {
    let config = ChaosConfig::from_toml_str("failure_rate = 1.0").unwrap();
    assert_eq!(config.safety_key, "ENABLE_CHAOS");
    let chaos = ChaosInterceptor::new(config).unwrap();

    std::env::set_var("ENABLE_CHAOS", "true");
    assert!(chaos
        .intercept_tool_call(&ToolCall::new("t"), ok_handler)
        .is_err());

    std::env::remove_var("ENABLE_CHAOS");
    assert!(chaos
        .intercept_tool_call(&ToolCall::new("t"), ok_handler)
        .is_ok());
}
