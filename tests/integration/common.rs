//! Shared helpers for the integration tests.

use std::sync::Arc;

use chaos_interceptor::{ChaosConfig, ChaosInterceptor, StaticSafetyGate};

/// Interceptor whose gate is always open.
pub fn armed(config: ChaosConfig) -> ChaosInterceptor {
    ChaosInterceptor::with_gate(config, Arc::new(StaticSafetyGate::enabled()))
        .expect("valid chaos config")
}

/// Config with the given rate and everything else defaulted.
pub fn with_rate(failure_rate: f64) -> ChaosConfig {
    ChaosConfig {
        failure_rate,
        ..Default::default()
    }
}

/// A handler that always succeeds.
pub fn ok_handler<C>(_call: &C) -> Result<&'static str, String> {
    Ok("success")
}
