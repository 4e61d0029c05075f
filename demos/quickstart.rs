//! Quickstart: run a calculator MCP server over stdio.
//!
//! RUST_LOG=debug cargo run --example quickstart

use arena_server::McpServer;
use arena_tools::CalculatorTool;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let server = McpServer::builder()
        .name("quickstart")
        .description("A calculator over MCP")
        .tool(Arc::new(CalculatorTool::new()))
        .build()?;

    eprintln!("Serving '{}' over stdio, waiting for an MCP client...", server.name());
    server.run().await?;

    Ok(())
}
