//! rmcp protocol handler for [`McpServer`]

use crate::server::McpServer;
use arena_bridge::render_value;
use arena_core::{Result, ToolContext};
use rmcp::{ServerHandler, ServiceExt};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use uuid::Uuid;

/// Adapts an [`McpServer`] to the rmcp `ServerHandler` trait.
pub struct ArenaHandler {
    server: Arc<McpServer>,
}

impl ArenaHandler {
    pub fn new(server: McpServer) -> Self {
        Self {
            server: Arc::new(server),
        }
    }

    fn schema_object(tool: &dyn arena_core::Tool) -> Map<String, Value> {
        match tool.schema().to_value() {
            Value::Object(map) => map,
            // to_value always yields an object; keep the protocol happy anyway
            _ => {
                let mut map = Map::new();
                map.insert("type".to_string(), json!("object"));
                map
            }
        }
    }
}

impl ServerHandler for ArenaHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.server.name().to_string().into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: self
                .server
                .instructions()
                .map(str::to_string)
                .or_else(|| Some(self.server.description().to_string())),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        let tools = self
            .server
            .tools()
            .iter()
            .map(|tool| {
                rmcp::model::Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    Arc::new(Self::schema_object(tool.as_ref())),
                )
            })
            .collect();

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let name = request.name.as_ref();
        let Some(tool) = self.server.get_tool(name) else {
            return Err(ErrorData::invalid_params(
                format!("Tool '{name}' not found"),
                None,
            ));
        };

        let args = request
            .arguments
            .map(Value::Object)
            .unwrap_or_else(|| json!({}));

        let ctx = ToolContext::new(
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
        );

        tracing::debug!(invocation_id = %ctx.invocation_id, tool = %name, "MCP tool call");

        match tool.execute(&ctx, args).await {
            Ok(value) => Ok(CallToolResult::success(vec![Content::text(render_value(
                value,
            ))])),
            Err(e) => {
                tracing::debug!(tool = %name, error = %e, "MCP tool call failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}

/// Serve an [`McpServer`] over stdio until the client disconnects.
pub async fn serve_stdio(server: McpServer) -> Result<()> {
    let handler = ArenaHandler::new(server);
    let service = handler
        .serve(rmcp::transport::stdio())
        .await
        .map_err(anyhow::Error::from)?;
    service.waiting().await.map_err(anyhow::Error::from)?;
    Ok(())
}
