// Integration tests for Arena
// These tests verify the full stack: server registry -> bridge -> agents

use arena_agent::testing::MockModel;
use arena_agent::{Agent, ReactAgent};
use arena_bridge::AgentBridge;
use arena_core::ToolProvider;
use arena_server::McpServer;
use arena_tools::default_tools;
use serde_json::json;
use std::sync::Arc;

fn default_server() -> McpServer {
    McpServer::builder()
        .name("arena-test")
        .description("Integration test server")
        .tools(default_tools().unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_server_exposes_default_toolset_in_order() {
    let server = default_server();

    let names: Vec<&str> = server.tools().iter().map(|t| t.name()).collect();
    assert_eq!(
        names,
        vec!["calculator", "filesystem", "web", "time", "data_analysis"]
    );
}

#[test]
fn test_bridge_advertises_server_tools() {
    let server = default_server();
    let bridge = AgentBridge::new(&server);

    let decls = bridge.list_tools();
    assert_eq!(decls.len(), 5);
    assert!(decls.iter().all(|d| d.kind == "function"));

    // Every advertised schema is a JSON-Schema object
    for decl in &decls {
        let value = serde_json::to_value(decl).unwrap();
        assert_eq!(value["function"]["parameters"]["type"], "object");
    }
}

#[tokio::test]
async fn test_bridge_dispatches_calculator() {
    let server = default_server();
    let bridge = AgentBridge::new(&server);

    let out = bridge
        .invoke("calculator", json!({"expression": "(15 * 8) + 32"}))
        .await;
    assert!(out.contains("152"));
}

#[tokio::test]
async fn test_bridge_soft_errors_end_to_end() {
    let server = default_server();
    let bridge = AgentBridge::new(&server);

    // Unknown tool name
    let out = bridge.invoke("nonexistent", json!({})).await;
    assert_eq!(out, "Error: Tool 'nonexistent' not found");

    // Tool failure becomes a serialized error payload
    let out = bridge
        .invoke("calculator", json!({"expression": "not math"}))
        .await;
    assert!(out.contains("\"success\":false"));
}

#[tokio::test]
async fn test_react_agent_over_server_tools() {
    let server = default_server();
    let bridge = Arc::new(AgentBridge::new(&server));

    let model = Arc::new(MockModel::with_responses([
        r#"{"tool": "calculator", "arguments": {"expression": "6 * 7"}}"#,
        r#"{"final": "The answer is 42"}"#,
    ]));

    let agent = ReactAgent::builder()
        .name("integration-react")
        .model(model)
        .bridge(bridge)
        .build()
        .unwrap();

    let answer = agent.process("What is six times seven?").await.unwrap();
    assert_eq!(answer, "The answer is 42");
}

#[test]
fn test_server_is_a_tool_provider() {
    let server = default_server();
    let provided = server.provided_tools();
    assert_eq!(provided.len(), server.tools().len());
}
