use arena_core::{Error, ParamKind, Result, Tool, ToolContext, ToolSchema};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::time::Duration;

/// Fetched bodies are truncated to this many characters.
const MAX_BODY_CHARS: usize = 2000;

/// Fetches web pages and response headers.
pub struct WebTool {
    client: reqwest::Client,
}

impl WebTool {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("arena/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Tool for WebTool {
    fn name(&self) -> &str {
        "web"
    }

    fn description(&self) -> &str {
        "Perform web operations like fetch webpage content"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .param("operation", ParamKind::String, "One of: fetch, headers")
            .param("url", ParamKind::String, "URL to request")
    }

    async fn execute(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let operation = args["operation"]
            .as_str()
            .ok_or_else(|| Error::message("Missing 'operation' parameter"))?;
        let url = args["url"]
            .as_str()
            .ok_or_else(|| Error::message("Missing 'url' parameter"))?;

        tracing::debug!(
            invocation_id = %ctx.invocation_id,
            operation = %operation,
            url = %url,
            "Web operation"
        );

        match operation {
            "fetch" => {
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| Error::tool_failed("web", anyhow::anyhow!("{e}")))?;
                let body = response
                    .text()
                    .await
                    .map_err(|e| Error::tool_failed("web", anyhow::anyhow!("{e}")))?;

                // Limit to the first 2000 characters
                let truncated: String = body.chars().take(MAX_BODY_CHARS).collect();
                Ok(json!(truncated))
            }
            "headers" => {
                let response = self
                    .client
                    .head(url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| Error::tool_failed("web", anyhow::anyhow!("{e}")))?;

                let mut headers = Map::new();
                for (name, value) in response.headers() {
                    headers.insert(
                        name.to_string(),
                        json!(value.to_str().unwrap_or_default()),
                    );
                }
                Ok(Value::Object(headers))
            }
            other => Err(Error::message(format!(
                "Unsupported web operation: {other}"
            ))),
        }
    }
}
