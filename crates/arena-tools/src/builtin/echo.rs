use crate::FunctionTool;
use arena_core::{Error, ParamKind, Result, ToolSchema};
use serde_json::json;

/// Creates an echo tool for testing purposes
pub fn create_echo_tool() -> Result<FunctionTool> {
    let schema = ToolSchema::new().param("message", ParamKind::String, "Message to echo back");

    FunctionTool::builder()
        .name("echo")
        .description("Echoes back the provided message. Useful for testing tool execution.")
        .schema(schema)
        .execute(|ctx, params| async move {
            let message = params["message"]
                .as_str()
                .ok_or_else(|| Error::message("Missing 'message' parameter"))?;

            tracing::debug!(
                invocation_id = %ctx.invocation_id,
                tool_call_id = %ctx.function_call_id,
                message = %message,
                "Echo tool called"
            );

            Ok(json!({
                "message": message,
                "invocation_id": ctx.invocation_id,
                "function_call_id": ctx.function_call_id,
            }))
        })
        .build()
}
