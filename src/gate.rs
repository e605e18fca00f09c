//! Safety Gate
//!
//! No failure is ever injected unless the gate is open. The gate is asked on
//! every call, so flipping it between calls takes effect immediately.

use std::sync::atomic::{AtomicBool, Ordering};

/// Switch that must be explicitly enabled for any injection to occur.
pub trait SafetyGate: Send + Sync {
    fn is_enabled(&self) -> bool;
}

impl<F> SafetyGate for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_enabled(&self) -> bool {
        self()
    }
}

/// Gate backed by an environment variable.
///
/// Open only when the variable is set to `"true"`, ignoring case. Unset,
/// empty, non-unicode and any other value keep the gate closed.
#[derive(Debug, Clone)]
pub struct EnvSafetyGate {
    key: String,
}

impl EnvSafetyGate {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Name of the environment variable this gate reads.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SafetyGate for EnvSafetyGate {
    fn is_enabled(&self) -> bool {
        std::env::var(&self.key)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

/// Gate controlled in-process.
#[derive(Debug, Default)]
pub struct StaticSafetyGate {
    enabled: AtomicBool,
}

impl StaticSafetyGate {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn enabled() -> Self {
        Self::new(true)
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }
}

impl SafetyGate for StaticSafetyGate {
    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}
