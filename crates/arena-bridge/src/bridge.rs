//! The agent-tool bridge
//!
//! Wraps every tool a [`ToolProvider`] exposes into an immutable descriptor
//! set, advertises the set in the function-calling listing format, and
//! dispatches invocations by name. All failures are contained and converted
//! to text; no error crosses the public boundary as an `Err`.

use crate::descriptor::{BridgedTool, FunctionDecl};
use arena_core::{ToolContext, ToolProvider};
use serde_json::{Value, json};
use std::collections::HashMap;
use uuid::Uuid;

/// Bridge between a tool host and an LLM-agent caller.
pub struct AgentBridge {
    tools: Vec<BridgedTool>,
    // name -> index of the last registration; duplicates shadow on dispatch
    // but stay in the ordered listing
    index: HashMap<String, usize>,
}

impl AgentBridge {
    /// Eagerly wrap every tool the provider exposes.
    pub fn new(provider: &dyn ToolProvider) -> Self {
        let mut tools = Vec::new();
        let mut index = HashMap::new();

        for tool in provider.provided_tools() {
            let wrapped = BridgedTool::wrap(tool);
            index.insert(wrapped.name().to_string(), tools.len());
            tools.push(wrapped);
        }

        tracing::debug!(count = tools.len(), "Wrapped provider tools");

        Self { tools, index }
    }

    /// The wrapped tool set in function-calling listing form, in discovery
    /// order.
    pub fn list_tools(&self) -> Vec<FunctionDecl> {
        self.tools.iter().map(BridgedTool::decl).collect()
    }

    /// Look up a descriptor by name (last registration wins for duplicates).
    pub fn get(&self, name: &str) -> Option<&BridgedTool> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke a tool by name with keyword arguments.
    ///
    /// Returns text in every case: the rendered result, a serialized
    /// `{"error", "success": false}` payload when the tool fails, or a soft
    /// "not found" message for unknown names.
    pub async fn invoke(&self, name: &str, args: Value) -> String {
        let Some(descriptor) = self.get(name) else {
            return format!("Error: Tool '{name}' not found");
        };

        let ctx = ToolContext::new(
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
        );

        tracing::debug!(
            invocation_id = %ctx.invocation_id,
            tool = %name,
            "Invoking bridged tool"
        );

        match descriptor.tool().execute(&ctx, args).await {
            Ok(value) => render_value(value),
            Err(e) => {
                tracing::debug!(
                    invocation_id = %ctx.invocation_id,
                    tool = %name,
                    error = %e,
                    "Bridged tool failed"
                );
                render_error(&e.to_string())
            }
        }
    }
}

/// Render a successful result for agent consumption: structured values as
/// pretty JSON, strings verbatim, other scalars via their JSON text form.
pub fn render_value(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

fn render_error(message: &str) -> String {
    json!({"error": message, "success": false}).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Error, ParamKind, Result, Tool, ToolSchema};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct AddTool;

    #[async_trait]
    impl Tool for AddTool {
        fn name(&self) -> &str {
            "add"
        }

        fn description(&self) -> &str {
            "Add an integer to a label\nSecond line is never advertised."
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new()
                .param("a", ParamKind::Integer, "Parameter: a")
                .param_with_default("b", ParamKind::String, "Parameter: b", "x")
        }

        async fn execute(&self, _ctx: &ToolContext, args: Value) -> Result<Value> {
            let a = args["a"].as_i64().unwrap_or_default();
            let b = args["b"].as_str().unwrap_or("x");
            Ok(json!(format!("{b}{a}")))
        }
    }

    /// A tool that declares no parameters at all.
    struct OpaqueTool;

    #[async_trait]
    impl Tool for OpaqueTool {
        fn name(&self) -> &str {
            "opaque"
        }

        fn description(&self) -> &str {
            ""
        }

        async fn execute(&self, _ctx: &ToolContext, _args: Value) -> Result<Value> {
            Ok(json!({"x": 1}))
        }
    }

    struct FailingTool;

    #[async_trait]
    impl Tool for FailingTool {
        fn name(&self) -> &str {
            "failing"
        }

        fn description(&self) -> &str {
            "Always fails"
        }

        async fn execute(&self, _ctx: &ToolContext, _args: Value) -> Result<Value> {
            Err(Error::message("bad input"))
        }
    }

    struct NumberTool;

    #[async_trait]
    impl Tool for NumberTool {
        fn name(&self) -> &str {
            "number"
        }

        fn description(&self) -> &str {
            "Returns the integer five"
        }

        async fn execute(&self, _ctx: &ToolContext, _args: Value) -> Result<Value> {
            Ok(json!(5))
        }
    }

    struct FixedProvider {
        tools: Vec<Arc<dyn Tool>>,
    }

    impl ToolProvider for FixedProvider {
        fn provided_tools(&self) -> Vec<Arc<dyn Tool>> {
            self.tools.clone()
        }
    }

    fn provider() -> FixedProvider {
        FixedProvider {
            tools: vec![
                Arc::new(AddTool),
                Arc::new(OpaqueTool),
                Arc::new(FailingTool),
                Arc::new(NumberTool),
            ],
        }
    }

    #[test]
    fn test_listing_preserves_discovery_order() {
        let bridge = AgentBridge::new(&provider());
        let decls = bridge.list_tools();

        let names: Vec<&str> = decls.iter().map(|d| d.function.name.as_str()).collect();
        assert_eq!(names, ["add", "opaque", "failing", "number"]);
        assert!(decls.iter().all(|d| d.kind == "function"));
    }

    #[test]
    fn test_listing_serializes_in_function_calling_format() {
        let bridge = AgentBridge::new(&provider());
        let decls = bridge.list_tools();
        let value = serde_json::to_value(&decls[0]).unwrap();

        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], "add");
        // Only the first line of the description is advertised
        assert_eq!(value["function"]["description"], "Add an integer to a label");
    }

    #[test]
    fn test_schema_derivation_with_default() {
        let bridge = AgentBridge::new(&provider());
        let params = bridge.get("add").unwrap().parameters();

        assert_eq!(params["type"], "object");
        assert_eq!(params["properties"]["a"]["type"], "integer");
        assert_eq!(params["properties"]["b"]["type"], "string");
        assert_eq!(params["properties"]["b"]["default"], "x");
        assert_eq!(params["required"], json!(["a"]));
    }

    #[test]
    fn test_undeclared_schema_degrades_to_empty_object() {
        let bridge = AgentBridge::new(&provider());
        let descriptor = bridge.get("opaque").unwrap();

        assert_eq!(
            descriptor.parameters(),
            &json!({"type": "object", "properties": {}, "required": []})
        );
        // The tool still appears in the listing with a fallback description
        assert_eq!(descriptor.description(), "Tool: opaque");
        assert!(bridge.list_tools().iter().any(|d| d.function.name == "opaque"));
    }

    #[tokio::test]
    async fn test_invoke_failure_becomes_error_payload() {
        let bridge = AgentBridge::new(&provider());
        let out = bridge.invoke("failing", json!({})).await;
        assert_eq!(out, r#"{"error":"bad input","success":false}"#);
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool_is_soft_error() {
        let bridge = AgentBridge::new(&provider());
        let out = bridge.invoke("nonexistent", json!({})).await;
        assert_eq!(out, "Error: Tool 'nonexistent' not found");
    }

    #[tokio::test]
    async fn test_result_rendering() {
        let bridge = AgentBridge::new(&provider());

        // Mappings render as pretty JSON
        let out = bridge.invoke("opaque", json!({})).await;
        assert_eq!(out, "{\n  \"x\": 1\n}");

        // Scalars render via their text form
        let out = bridge.invoke("number", json!({})).await;
        assert_eq!(out, "5");

        // Strings render verbatim
        let out = bridge.invoke("add", json!({"a": 3})).await;
        assert_eq!(out, "x3");
    }

    #[tokio::test]
    async fn test_duplicate_names_shadow_on_dispatch() {
        struct Shadow;

        #[async_trait]
        impl Tool for Shadow {
            fn name(&self) -> &str {
                "number"
            }

            fn description(&self) -> &str {
                "Shadows the number tool"
            }

            async fn execute(&self, _ctx: &ToolContext, _args: Value) -> Result<Value> {
                Ok(json!(7))
            }
        }

        let provider = FixedProvider {
            tools: vec![Arc::new(NumberTool), Arc::new(Shadow)],
        };
        let bridge = AgentBridge::new(&provider);

        // Both registrations stay in the listing; dispatch uses the last one
        assert_eq!(bridge.len(), 2);
        assert_eq!(bridge.invoke("number", json!({})).await, "7");
    }
}
