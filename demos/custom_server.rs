//! Build a server around a custom closure-backed tool.

use arena_core::{ParamKind, ToolSchema};
use arena_server::McpServer;
use arena_tools::FunctionTool;
use serde_json::json;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let greeting = FunctionTool::builder()
        .name("greeting")
        .description("Get a personalized greeting")
        .schema(ToolSchema::new().param("name", ParamKind::String, "Who to greet"))
        .execute(|_ctx, args| async move {
            let name = args["name"].as_str().unwrap_or("world");
            Ok(json!(format!("Hello, {name}!")))
        })
        .build()?;

    let server = McpServer::builder()
        .name("greeting-server")
        .description("A server that provides dynamic greetings")
        .tool(Arc::new(greeting))
        .build()?;

    eprintln!("Serving '{}' over stdio...", server.name());
    server.run().await?;

    Ok(())
}
