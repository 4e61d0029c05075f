//! Agent demos: reflection, react with tools, planning.
//!
//! Uses the scripted test model so the demos run offline; swap in a real
//! `CompletionModel` implementation to talk to an actual LLM.

use arena_agent::testing::MockModel;
use arena_agent::{Agent, PlanningAgent, ReactAgent, ReflectionAgent};
use arena_bridge::AgentBridge;
use arena_core::{Tool, ToolProvider};
use arena_tools::{CalculatorTool, FileSystemTool};
use std::sync::Arc;

struct DemoTools;

impl ToolProvider for DemoTools {
    fn provided_tools(&self) -> Vec<Arc<dyn Tool>> {
        vec![
            Arc::new(CalculatorTool::new()),
            Arc::new(FileSystemTool::new()),
        ]
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Example 1: basic reflection agent
    println!("=== Example 1: Reflection Agent ===");
    let model = Arc::new(MockModel::with_responses([
        "Machine learning trains models from data instead of hand-written rules.",
        "OK",
    ]));
    let agent = ReflectionAgent::builder()
        .name("reflector")
        .model(model)
        .max_reflections(2)
        .build()?;
    let response = agent.process("Explain the concept of machine learning").await?;
    println!("Response: {response}\n");

    // Example 2: react agent with tools
    println!("=== Example 2: ReAct Agent with Tools ===");
    let bridge = Arc::new(AgentBridge::new(&DemoTools));
    let model = Arc::new(MockModel::with_responses([
        r#"{"tool": "calculator", "arguments": {"expression": "(15 * 8) + 32"}}"#,
        r#"{"final": "(15 * 8) + 32 = 152"}"#,
    ]));
    let agent = ReactAgent::builder()
        .name("react")
        .model(model)
        .bridge(bridge)
        .max_steps(8)
        .build()?;
    let response = agent.process("Calculate (15 * 8) + 32").await?;
    println!("Response: {response}\n");

    // Example 3: planning agent
    println!("=== Example 3: Planning Agent ===");
    let model = Arc::new(MockModel::with_responses([
        "1. Gather requirements\n2. Sketch the architecture\n3. Plan the first milestone",
        "Interviewed the stakeholders and wrote user stories.",
        "Chose a modular monolith with a job queue.",
        "Milestone one: auth, billing, and the admin panel.",
        "Start with requirements, pick a modular architecture, then ship auth and billing first.",
    ]));
    let agent = PlanningAgent::builder()
        .name("planner")
        .model(model)
        .build()?;
    let response = agent
        .process("Help me plan a software development project")
        .await?;
    println!("Response: {response}\n");

    Ok(())
}
