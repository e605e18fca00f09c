//! Handler Traits
//!
//! The downstream side of a dispatch chain. Hosts implement these traits for
//! their real tools and model providers; hook layers implement them too, by
//! wrapping an inner handler and forwarding to it.
//!
//! - `ToolDefinitionTrait` - Identity and schema
//! - `ToolExecutable` - Execution capability
//! - `UnifiedTool` - Combined trait (auto-implemented via blanket impl)
//! - `ModelInvoker` - Model invocation capability

use async_trait::async_trait;
use serde_json::Value;

use crate::call::{ModelCall, ToolCall};
use crate::error::CoreResult;

/// Tool definition metadata trait.
pub trait ToolDefinitionTrait: Send + Sync {
    /// Unique name of this tool (e.g., "Read", "fetch_data").
    fn name(&self) -> &str;

    /// Human-readable description of what this tool does.
    fn description(&self) -> &str;

    /// JSON schema describing input parameters.
    fn parameters_schema(&self) -> Value {
        serde_json::json!({"type": "object"})
    }
}

/// Tool execution trait.
#[async_trait]
pub trait ToolExecutable: Send + Sync {
    /// Execute the tool for the given call.
    ///
    /// # Returns
    /// - `Ok(Value)` - The tool's output as a JSON value
    /// - `Err(CoreError)` - If the tool execution failed
    async fn execute(&self, call: &ToolCall) -> CoreResult<Value>;
}

/// Combined trait for tools that provide both definition and execution.
pub trait UnifiedTool: ToolDefinitionTrait + ToolExecutable {}

// Blanket implementation: anything that implements both traits is a UnifiedTool
impl<T: ToolDefinitionTrait + ToolExecutable> UnifiedTool for T {}

/// Model invocation trait.
///
/// Implemented by provider adapters in the host, and by hook layers that
/// wrap them.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Returns the provider name for identification.
    fn provider_name(&self) -> &str;

    /// Invoke the model and return its raw response.
    async fn invoke(&self, call: &ModelCall) -> CoreResult<Value>;
}
