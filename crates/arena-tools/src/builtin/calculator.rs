use arena_core::{Error, ParamKind, Result, Tool, ToolContext, ToolSchema};
use async_trait::async_trait;
use serde_json::{Value, json};

/// Evaluates arithmetic expressions.
pub struct CalculatorTool;

impl CalculatorTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CalculatorTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Perform mathematical calculations"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new().param(
            "expression",
            ParamKind::String,
            "Mathematical expression to evaluate",
        )
    }

    async fn execute(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let expression = args["expression"]
            .as_str()
            .ok_or_else(|| Error::message("Missing 'expression' parameter"))?;

        let result = meval::eval_str(expression)
            .map_err(|e| Error::tool_failed("calculator", anyhow::anyhow!("{e}")))?;

        tracing::debug!(
            invocation_id = %ctx.invocation_id,
            expression = %expression,
            result = result,
            "Evaluated expression"
        );

        // Render integral results without a trailing fraction
        if result.fract() == 0.0 && result.abs() < i64::MAX as f64 {
            Ok(json!(result as i64))
        } else {
            Ok(json!(result))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ToolContext {
        ToolContext::new("inv-1", "call-1")
    }

    #[tokio::test]
    async fn test_integer_arithmetic() {
        let tool = CalculatorTool::new();
        let out = tool
            .execute(&ctx(), json!({"expression": "(15 * 8) + 32"}))
            .await
            .unwrap();
        assert_eq!(out, json!(152));
    }

    #[tokio::test]
    async fn test_fractional_result() {
        let tool = CalculatorTool::new();
        let out = tool
            .execute(&ctx(), json!({"expression": "7 / 2"}))
            .await
            .unwrap();
        assert_eq!(out, json!(3.5));
    }

    #[tokio::test]
    async fn test_invalid_expression_fails() {
        let tool = CalculatorTool::new();
        let err = tool
            .execute(&ctx(), json!({"expression": "2 +"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("calculator"));
    }

    #[tokio::test]
    async fn test_missing_expression_fails() {
        let tool = CalculatorTool::new();
        assert!(tool.execute(&ctx(), json!({})).await.is_err());
    }

    #[test]
    fn test_schema_requires_expression() {
        let value = CalculatorTool::new().schema().to_value();
        assert_eq!(value["required"], json!(["expression"]));
    }
}
