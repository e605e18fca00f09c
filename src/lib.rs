//! Chaos Interceptor
//!
//! Fault-injection hooks for agent tool and model calls. An interceptor sits
//! in the host framework's dispatch chain and, for each call, either forwards
//! to the real handler or fails the call with an injected error, so callers'
//! retry and error-handling paths get exercised.
//!
//! Injection only happens while the safety gate is open. By default the gate
//! is the `ENABLE_CHAOS` environment variable, which must equal `"true"`
//! (ignoring case).
//!
//! ## Module Organization
//!
//! - `config` - `ChaosConfig`, its builder and TOML loading
//! - `failure` - `FailureKind`, `FailureProfile`, `InjectedFailure`
//! - `gate` - `SafetyGate` and its environment/static implementations
//! - `random` - `RandomSource` and the seeded ChaCha stream
//! - `interceptor` - `ChaosInterceptor`, the decide-and-forward procedure
//! - `hooks` - `ChaosTool` / `ChaosModel` dispatch-chain adapters

pub mod config;
pub mod failure;
pub mod gate;
pub mod hooks;
pub mod interceptor;
pub mod random;

// ── Configuration ──────────────────────────────────────────────────────
pub use config::{
    ChaosConfig, ChaosConfigBuilder, Eligibility, DEFAULT_FAILURE_RATE, DEFAULT_SAFETY_KEY,
};

// ── Failures ───────────────────────────────────────────────────────────
pub use failure::{
    FailureKind, FailureProfile, InjectedFailure, GENERIC_MODEL_MESSAGE, GENERIC_TOOL_MESSAGE,
};

// ── Gate & Randomness ──────────────────────────────────────────────────
pub use gate::{EnvSafetyGate, SafetyGate, StaticSafetyGate};
pub use random::{RandomSource, SeededRandom};

// ── Interception ───────────────────────────────────────────────────────
pub use hooks::{wrap_tools, ChaosModel, ChaosTool};
pub use interceptor::{ChaosInterceptor, Decision};

// Core types hosts need alongside the interceptor
pub use chaos_core::{
    CallDescriptor, CoreError, CoreResult, ModelCall, ModelInvoker, ToolCall,
    ToolDefinitionTrait, ToolExecutable, UnifiedTool,
};
