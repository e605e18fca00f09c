//! Model Call Path Integration Tests
//!
//! Verifies model calls ignore the tool include/exclude lists and use their
//! own generic message.

use chaos_interceptor::{ChaosConfig, CoreError, FailureKind, ModelCall};
use serde_json::json;

use super::common::{armed, ok_handler, with_rate};

#[test]
fn test_model_call_ignores_include_list() {
    let chaos = armed(ChaosConfig {
        failure_rate: 1.0,
        exception_types: vec![FailureKind::InvalidValue],
        include_tools: Some(vec!["some_tool".into()]),
        ..Default::default()
    });
    let call = ModelCall::new("gpt-4o-mini").with_message(json!({"role": "user", "content": "hi"}));
    let result: Result<(), CoreError> = chaos.intercept_model_call(&call, |_| Ok(()));
    assert!(matches!(result, Err(CoreError::InvalidValue(_))));
}

#[test]
fn test_model_call_ignores_exclude_list() {
    let chaos = armed(ChaosConfig {
        failure_rate: 1.0,
        exclude_tools: vec!["gpt-4o-mini".into(), "model".into()],
        include_tools: Some(vec![]),
        ..Default::default()
    });
    for _ in 0..20 {
        let result = chaos.intercept_model_call(&ModelCall::new("gpt-4o-mini"), ok_handler);
        assert_eq!(result.unwrap_err(), "Chaos Monkey triggered on model call!");
    }
}

#[test]
fn test_model_call_zero_rate_forwards() {
    let chaos = armed(ChaosConfig {
        seed: Some(5),
        ..with_rate(0.0)
    });
    for _ in 0..200 {
        let result = chaos.intercept_model_call(&ModelCall::new("m"), ok_handler);
        assert_eq!(result.unwrap(), "success");
    }
}

#[tokio::test]
async fn test_model_call_async_handler_result_unchanged() {
    let chaos = armed(with_rate(0.0));
    let call = ModelCall::new("m").with_system("terse");
    let result: Result<String, CoreError> = chaos
        .intercept_model_call_async(&call, |c| async move {
            Ok(format!("{}:{}", c.model, c.system.as_deref().unwrap_or_default()))
        })
        .await;
    assert_eq!(result.unwrap(), "m:terse");
}
