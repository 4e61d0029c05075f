use arena_core::{Result, Tool, ToolContext};
use async_trait::async_trait;
use serde_json::{Value, json};

/// Reports the current time.
///
/// Declares no parameters, so the bridge advertises it with an empty object
/// schema.
pub struct TimeTool;

impl TimeTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for TimeTool {
    fn name(&self) -> &str {
        "time"
    }

    fn description(&self) -> &str {
        "Get the current time"
    }

    async fn execute(&self, _ctx: &ToolContext, _args: Value) -> Result<Value> {
        Ok(json!(chrono::Local::now().to_rfc3339()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_parseable_timestamp() {
        let tool = TimeTool::new();
        let ctx = ToolContext::new("inv-1", "call-1");
        let out = tool.execute(&ctx, json!({})).await.unwrap();
        let text = out.as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(text).is_ok());
    }

    #[test]
    fn test_schema_is_empty() {
        assert!(TimeTool::new().schema().is_empty());
    }
}
