//! Call Descriptors
//!
//! Describes the operations a host dispatcher hands to its hook chain:
//!
//! 1. `ToolCall` - a tool invocation, carrying the tool's identifying name
//! 2. `ModelCall` - a model invocation, which has no target name
//! 3. `CallDescriptor` - either of the two, for code that handles both paths
//!
//! Descriptors are plain data. They are borrowed by handlers and never
//! mutated by the hook chain.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreResult;

// ============================================================================
// ToolCall
// ============================================================================

/// A single tool invocation as seen by the dispatch chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Identifying name of the tool. `None` when the request could not be
    /// resolved to a tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// JSON arguments for the tool
    #[serde(default)]
    pub args: Value,
    /// Unique identifier for this tool call
    #[serde(default)]
    pub call_id: String,
}

impl ToolCall {
    /// Create a tool call for the named tool with empty arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            args: Value::Object(Default::default()),
            call_id: String::new(),
        }
    }

    /// Create a tool call whose target could not be resolved.
    pub fn unnamed() -> Self {
        Self {
            name: None,
            args: Value::Object(Default::default()),
            call_id: String::new(),
        }
    }

    /// Set the arguments.
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = args;
        self
    }

    /// Set the call identifier.
    pub fn with_call_id(mut self, id: impl Into<String>) -> Self {
        self.call_id = id.into();
        self
    }

    /// Build a tool call from a raw request object.
    ///
    /// The name is taken from a top-level `"name"` string, or from a nested
    /// `"tool": {"name": ...}` object. Arguments come from `"args"` or
    /// `"arguments"`, and the id from `"id"` or `"call_id"`. Anything missing
    /// is left empty.
    pub fn from_request(request: &Value) -> Self {
        let name = request
            .get("name")
            .and_then(|v| v.as_str())
            .or_else(|| {
                request
                    .get("tool")
                    .and_then(|t| t.get("name"))
                    .and_then(|v| v.as_str())
            })
            .map(String::from);

        let args = request
            .get("args")
            .or_else(|| request.get("arguments"))
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default()));

        let call_id = request
            .get("id")
            .or_else(|| request.get("call_id"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Self {
            name,
            args,
            call_id,
        }
    }

    /// Parse a raw JSON request and build a tool call from it.
    ///
    /// See [`ToolCall::from_request`] for how fields are resolved.
    pub fn from_request_json(raw: &str) -> CoreResult<Self> {
        let request: Value = serde_json::from_str(raw)?;
        Ok(Self::from_request(&request))
    }

    /// The tool name, if resolved.
    pub fn target_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ============================================================================
// ModelCall
// ============================================================================

/// A single model invocation as seen by the dispatch chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCall {
    /// Model identifier (e.g., "gpt-4o-mini")
    #[serde(default)]
    pub model: String,
    /// Conversation messages sent to the model
    #[serde(default)]
    pub messages: Vec<Value>,
    /// Optional system prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl ModelCall {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            system: None,
        }
    }

    /// Append a message.
    pub fn with_message(mut self, message: Value) -> Self {
        self.messages.push(message);
        self
    }

    /// Set the system prompt.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

// ============================================================================
// CallDescriptor
// ============================================================================

/// Either kind of intercepted call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallDescriptor {
    Tool(ToolCall),
    Model(ModelCall),
}

impl CallDescriptor {
    /// Target name used for eligibility filtering. Model calls never have one.
    pub fn target_name(&self) -> Option<&str> {
        match self {
            CallDescriptor::Tool(call) => call.target_name(),
            CallDescriptor::Model(_) => None,
        }
    }

    /// Whether this is a model invocation.
    pub fn is_model(&self) -> bool {
        matches!(self, CallDescriptor::Model(_))
    }
}

impl From<ToolCall> for CallDescriptor {
    fn from(call: ToolCall) -> Self {
        CallDescriptor::Tool(call)
    }
}

impl From<ModelCall> for CallDescriptor {
    fn from(call: ModelCall) -> Self {
        CallDescriptor::Model(call)
    }
}
