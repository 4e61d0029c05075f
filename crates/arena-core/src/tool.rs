//! Tool and tool-provider traits

use crate::{Result, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Per-invocation context, carried for tracing.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub invocation_id: String,
    pub function_call_id: String,
}

impl ToolContext {
    pub fn new(invocation_id: impl Into<String>, function_call_id: impl Into<String>) -> Self {
        Self {
            invocation_id: invocation_id.into(),
            function_call_id: function_call_id.into(),
        }
    }
}

/// A named callable with a description and declared parameters.
///
/// Tools are invoked with a JSON object of keyword arguments; there is no
/// positional-argument path.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name of the tool within its host.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Declared parameters. Tools that declare nothing still expose a
    /// well-formed empty object schema.
    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
    }

    /// Execute the tool with keyword arguments.
    async fn execute(&self, ctx: &ToolContext, args: Value) -> Result<Value>;
}

/// Capability interface for hosts that expose tools.
///
/// Hosts implement this explicitly instead of being structurally inspected; a
/// host exposing tools through several internal shapes must reconcile them
/// into one authoritative list before implementing the trait.
pub trait ToolProvider: Send + Sync {
    /// All provided tools, in registration order.
    fn provided_tools(&self) -> Vec<Arc<dyn Tool>>;
}
