use arena_core::{Error, ParamKind, Result, Tool, ToolContext, ToolSchema};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;

type SearchFn = Arc<dyn Fn(&str) -> Result<Vec<String>> + Send + Sync>;

/// Searches through a caller-supplied search function.
pub struct SearchTool {
    search: SearchFn,
}

impl SearchTool {
    pub fn new<F>(search: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        Self {
            search: Arc::new(search),
        }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Search for information using the provided query"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new().param("query", ParamKind::String, "Search query")
    }

    async fn execute(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| Error::message("Missing 'query' parameter"))?;

        tracing::debug!(
            invocation_id = %ctx.invocation_id,
            query = %query,
            "Search"
        );

        let results = (self.search)(query)?;
        Ok(json!(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_returns_results() {
        let tool = SearchTool::new(|query| Ok(vec![format!("result for {query}")]));
        let ctx = ToolContext::new("inv-1", "call-1");
        let out = tool
            .execute(&ctx, json!({"query": "rust"}))
            .await
            .unwrap();
        assert_eq!(out, json!(["result for rust"]));
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let tool = SearchTool::new(|_| Err(Error::message("backend down")));
        let ctx = ToolContext::new("inv-1", "call-1");
        assert!(tool.execute(&ctx, json!({"query": "x"})).await.is_err());
    }
}
