//! Agent-tool bridge for Arena
//!
//! This crate re-exposes a tool host's registered tools in the
//! function-calling descriptor format consumed by LLM-agent frameworks:
//! - [`AgentBridge`] wraps every tool a [`arena_core::ToolProvider`] exposes
//!   at construction time
//! - `list_tools()` advertises the set as `{"type": "function", ...}` entries
//! - `invoke(name, args)` dispatches by name and always returns text,
//!   converting failures into structured error payloads

pub mod bridge;
pub mod descriptor;

// Re-exports
pub use bridge::{AgentBridge, render_value};
pub use descriptor::{BridgedTool, FunctionDecl, FunctionSpec};
