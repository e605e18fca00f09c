//! Chaos Interceptor
//!
//! Sits between a host dispatcher and the downstream handler. For every call
//! it either forwards to the handler or returns an injected failure without
//! running the handler.
//!
//! ## Tool path
//!
//! 1. Safety gate closed → forward.
//! 2. Tool excluded, or an include list is set and the tool is not on it → forward.
//! 3. Draw `u` in `[0, 1)`; fire when `u <= failure_rate`.
//! 4. Firing picks one configured kind uniformly, or a generic failure when
//!    none are configured.
//!
//! ## Model path
//!
//! Same as the tool path without step 2. Include/exclude lists never apply
//! to model calls.
//!
//! Note that the `<=` comparison means a draw of exactly `0.0` fires even at
//! `failure_rate = 0.0`.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};

use chaos_core::{CallDescriptor, CoreResult, ModelCall, ToolCall};

use crate::config::{ChaosConfig, Eligibility};
use crate::failure::{InjectedFailure, GENERIC_MODEL_MESSAGE, GENERIC_TOOL_MESSAGE};
use crate::gate::{EnvSafetyGate, SafetyGate};
use crate::random::{RandomSource, SeededRandom};

/// What the interceptor decided for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Run the handler and return its outcome unchanged
    Forward,
    /// Do not run the handler; fail with this instead
    Inject(InjectedFailure),
}

impl Decision {
    pub fn is_inject(&self) -> bool {
        matches!(self, Decision::Inject(_))
    }
}

/// Fault-injecting hook for tool and model calls.
pub struct ChaosInterceptor {
    config: ChaosConfig,
    gate: Arc<dyn SafetyGate>,
    random: Mutex<Box<dyn RandomSource>>,
}

impl fmt::Debug for ChaosInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaosInterceptor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ChaosInterceptor {
    /// Build an interceptor gated by the environment variable named in
    /// `config.safety_key`.
    pub fn new(config: ChaosConfig) -> CoreResult<Self> {
        let gate = Arc::new(EnvSafetyGate::new(config.safety_key.clone()));
        Self::with_gate(config, gate)
    }

    /// Build an interceptor with an explicit safety gate.
    pub fn with_gate(config: ChaosConfig, gate: Arc<dyn SafetyGate>) -> CoreResult<Self> {
        let random = SeededRandom::from_optional_seed(config.seed);
        Self::with_random(config, gate, Box::new(random))
    }

    /// Build an interceptor with an explicit gate and random source.
    pub fn with_random(
        config: ChaosConfig,
        gate: Arc<dyn SafetyGate>,
        random: Box<dyn RandomSource>,
    ) -> CoreResult<Self> {
        config.validate()?;

        tracing::info!(
            "[chaos] Interceptor ready: failure_rate={}, kinds={}, seed={:?}, safety_key={}",
            config.failure_rate,
            config.exception_types.len(),
            config.seed,
            config.safety_key
        );

        Ok(Self {
            config,
            gate,
            random: Mutex::new(random),
        })
    }

    pub fn config(&self) -> &ChaosConfig {
        &self.config
    }

    /// Whether the safety gate is currently open.
    pub fn is_armed(&self) -> bool {
        self.gate.is_enabled()
    }

    // ------------------------------------------------------------------------
    // Decisions
    // ------------------------------------------------------------------------

    /// Decide the fate of a tool call.
    pub fn decide_tool(&self, call: &ToolCall) -> Decision {
        self.decide_tool_target(call.target_name())
    }

    /// Decide the fate of a call to the named tool.
    pub fn decide_tool_target(&self, name: Option<&str>) -> Decision {
        if !self.gate.is_enabled() {
            tracing::debug!(tool = ?name, "[chaos] Safety gate closed, forwarding tool call");
            return Decision::Forward;
        }

        match self.config.tool_eligibility(name) {
            Eligibility::Eligible => {}
            Eligibility::Excluded => {
                tracing::debug!(tool = ?name, "[chaos] Tool excluded, forwarding");
                return Decision::Forward;
            }
            Eligibility::NotIncluded => {
                tracing::debug!(tool = ?name, "[chaos] Tool not in include list, forwarding");
                return Decision::Forward;
            }
        }

        let decision = self.roll(GENERIC_TOOL_MESSAGE);
        if let Decision::Inject(ref failure) = decision {
            tracing::warn!(
                tool = ?name,
                kind = ?failure.kind(),
                "[chaos] Injecting failure into tool call: {}",
                failure
            );
        }
        decision
    }

    /// Decide the fate of a model call.
    pub fn decide_model(&self) -> Decision {
        if !self.gate.is_enabled() {
            tracing::debug!("[chaos] Safety gate closed, forwarding model call");
            return Decision::Forward;
        }

        let decision = self.roll(GENERIC_MODEL_MESSAGE);
        if let Decision::Inject(ref failure) = decision {
            tracing::warn!(
                kind = ?failure.kind(),
                "[chaos] Injecting failure into model call: {}",
                failure
            );
        }
        decision
    }

    /// Decide the fate of either kind of call. Model descriptors skip the
    /// include/exclude lists.
    pub fn decide(&self, call: &CallDescriptor) -> Decision {
        match call {
            CallDescriptor::Tool(tool) => self.decide_tool(tool),
            CallDescriptor::Model(_) => self.decide_model(),
        }
    }

    /// Run the probabilistic trial and, on firing, choose the failure.
    fn roll(&self, generic_message: &str) -> Decision {
        let mut random = self.random.lock().unwrap_or_else(|e| e.into_inner());

        let draw = random.next_unit();
        if draw > self.config.failure_rate {
            tracing::debug!(
                draw,
                failure_rate = self.config.failure_rate,
                "[chaos] Trial passed, forwarding"
            );
            return Decision::Forward;
        }

        let kinds = &self.config.exception_types;
        let failure = if kinds.is_empty() {
            InjectedFailure::generic(generic_message)
        } else {
            // Custom sources may return an out-of-range index.
            let index = random.pick(kinds.len()) % kinds.len();
            kinds[index].instantiate()
        };
        Decision::Inject(failure)
    }

    // ------------------------------------------------------------------------
    // Interception
    // ------------------------------------------------------------------------

    /// Intercept a tool call.
    ///
    /// On forward the handler runs exactly once and its result or error is
    /// returned as-is. On injection the handler never runs.
    pub fn intercept_tool_call<T, E, F>(&self, call: &ToolCall, handler: F) -> Result<T, E>
    where
        F: FnOnce(&ToolCall) -> Result<T, E>,
        E: From<InjectedFailure>,
    {
        match self.decide_tool(call) {
            Decision::Forward => handler(call),
            Decision::Inject(failure) => Err(failure.into()),
        }
    }

    /// Intercept a model call. See [`ChaosInterceptor::intercept_tool_call`].
    pub fn intercept_model_call<T, E, F>(&self, call: &ModelCall, handler: F) -> Result<T, E>
    where
        F: FnOnce(&ModelCall) -> Result<T, E>,
        E: From<InjectedFailure>,
    {
        match self.decide_model() {
            Decision::Forward => handler(call),
            Decision::Inject(failure) => Err(failure.into()),
        }
    }

    /// Intercept a tool call whose handler is asynchronous.
    ///
    /// The decision is made before the handler's future is created; the
    /// future is then awaited unchanged.
    pub async fn intercept_tool_call_async<'a, T, E, F, Fut>(
        &self,
        call: &'a ToolCall,
        handler: F,
    ) -> Result<T, E>
    where
        F: FnOnce(&'a ToolCall) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<InjectedFailure>,
    {
        match self.decide_tool(call) {
            Decision::Forward => handler(call).await,
            Decision::Inject(failure) => Err(failure.into()),
        }
    }

    /// Intercept a model call whose handler is asynchronous.
    pub async fn intercept_model_call_async<'a, T, E, F, Fut>(
        &self,
        call: &'a ModelCall,
        handler: F,
    ) -> Result<T, E>
    where
        F: FnOnce(&'a ModelCall) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<InjectedFailure>,
    {
        match self.decide_model() {
            Decision::Forward => handler(call).await,
            Decision::Inject(failure) => Err(failure.into()),
        }
    }
}
