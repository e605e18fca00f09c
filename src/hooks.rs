//! Dispatch-Chain Hooks
//!
//! Adapters that put a `ChaosInterceptor` in front of a host's real tools and
//! model providers. They implement the same handler traits as what they wrap,
//! so a host registers them exactly where it would register the originals.
//!
//! Several adapters may share one `Arc<ChaosInterceptor>`; they then draw
//! from a single random stream in call order.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use chaos_core::{
    CoreResult, ModelCall, ModelInvoker, ToolCall, ToolDefinitionTrait, ToolExecutable,
    UnifiedTool,
};

use crate::interceptor::{ChaosInterceptor, Decision};

/// A tool wrapped by a chaos interceptor.
///
/// Eligibility is decided on the wrapped tool's own name, whatever name the
/// incoming call carries.
pub struct ChaosTool {
    inner: Arc<dyn UnifiedTool>,
    interceptor: Arc<ChaosInterceptor>,
}

impl ChaosTool {
    pub fn new(inner: Arc<dyn UnifiedTool>, interceptor: Arc<ChaosInterceptor>) -> Self {
        Self { inner, interceptor }
    }

    pub fn inner(&self) -> &Arc<dyn UnifiedTool> {
        &self.inner
    }
}

impl ToolDefinitionTrait for ChaosTool {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn parameters_schema(&self) -> Value {
        self.inner.parameters_schema()
    }
}

#[async_trait]
impl ToolExecutable for ChaosTool {
    async fn execute(&self, call: &ToolCall) -> CoreResult<Value> {
        match self.interceptor.decide_tool_target(Some(self.inner.name())) {
            Decision::Forward => self.inner.execute(call).await,
            Decision::Inject(failure) => Err(failure.into()),
        }
    }
}

/// A model provider wrapped by a chaos interceptor.
pub struct ChaosModel {
    inner: Arc<dyn ModelInvoker>,
    interceptor: Arc<ChaosInterceptor>,
}

impl ChaosModel {
    pub fn new(inner: Arc<dyn ModelInvoker>, interceptor: Arc<ChaosInterceptor>) -> Self {
        Self { inner, interceptor }
    }
}

#[async_trait]
impl ModelInvoker for ChaosModel {
    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    async fn invoke(&self, call: &ModelCall) -> CoreResult<Value> {
        let inner = &self.inner;
        self.interceptor
            .intercept_model_call_async(call, |c| inner.invoke(c))
            .await
    }
}

/// Wrap every tool in `tools` with the same interceptor.
pub fn wrap_tools(
    tools: Vec<Arc<dyn UnifiedTool>>,
    interceptor: Arc<ChaosInterceptor>,
) -> Vec<Arc<dyn UnifiedTool>> {
    tools
        .into_iter()
        .map(|tool| {
            Arc::new(ChaosTool::new(tool, interceptor.clone())) as Arc<dyn UnifiedTool>
        })
        .collect()
}
