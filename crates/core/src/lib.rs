//! Chaos Core
//!
//! Foundational types shared between the chaos interceptor and the host
//! frameworks it hooks into. This crate knows nothing about fault injection;
//! it only describes calls, handlers and their errors.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `call` - Call descriptors (`ToolCall`, `ModelCall`, `CallDescriptor`)
//! - `handler` - Handler traits (`ToolDefinitionTrait`, `ToolExecutable`, `UnifiedTool`, `ModelInvoker`)

pub mod call;
pub mod error;
pub mod handler;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Call Descriptors ───────────────────────────────────────────────────
pub use call::{CallDescriptor, ModelCall, ToolCall};

// ── Handler Traits ─────────────────────────────────────────────────────
pub use handler::{ModelInvoker, ToolDefinitionTrait, ToolExecutable, UnifiedTool};
