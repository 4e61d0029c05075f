//! ReAct agent: interleaved reasoning and tool calls

use crate::builder_common::AgentBuilderCore;
use crate::memory::{ConversationMemory, Memory};
use crate::model::{CompletionModel, CompletionRequest};
use crate::Agent;
use arena_bridge::AgentBridge;
use arena_core::{Error, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex, PoisonError};

/// One parsed model action.
#[derive(Debug, PartialEq)]
enum Action {
    Call { tool: String, arguments: Value },
    Final(String),
}

/// Parse a model reply into an action.
///
/// Replies that carry no recognizable JSON action are treated as a final
/// answer rather than an error.
fn parse_action(reply: &str) -> Action {
    let Some(value) = extract_json_object(reply) else {
        return Action::Final(reply.trim().to_string());
    };

    if let Some(text) = value.get("final").and_then(Value::as_str) {
        return Action::Final(text.to_string());
    }

    if let Some(tool) = value.get("tool").and_then(Value::as_str) {
        let arguments = value.get("arguments").cloned().unwrap_or_else(|| json!({}));
        return Action::Call {
            tool: tool.to_string(),
            arguments,
        };
    }

    Action::Final(reply.trim().to_string())
}

fn extract_json_object(reply: &str) -> Option<Value> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&reply[start..=end]).ok()
}

/// ReactAgent advertises the bridge's tool listing to the model and loops:
/// the model either requests a tool call as JSON or produces a final answer.
/// Tool observations come back through [`AgentBridge::invoke`], so a failing
/// or unknown tool becomes an observation, never an error.
pub struct ReactAgent {
    name: Arc<str>,
    description: Arc<str>,
    model: Arc<dyn CompletionModel>,
    bridge: Arc<AgentBridge>,
    memory: Mutex<Box<dyn Memory>>,
    max_steps: u32,
}

impl ReactAgent {
    pub fn builder() -> ReactAgentBuilder {
        ReactAgentBuilder::new()
    }

    fn system_prompt(&self) -> Result<String> {
        let listing = serde_json::to_string_pretty(&self.bridge.list_tools())?;
        Ok(format!(
            "You are an agent that can call tools to solve tasks.\n\
             Available tools:\n{listing}\n\n\
             Respond with a single JSON object. To call a tool:\n\
             {{\"tool\": \"<name>\", \"arguments\": {{...}}}}\n\
             When the task is solved:\n\
             {{\"final\": \"<answer>\"}}"
        ))
    }
}

#[async_trait]
impl Agent for ReactAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn process(&self, input: &str) -> Result<String> {
        let system = self.system_prompt()?;
        let history = {
            let memory = self.memory.lock().unwrap_or_else(PoisonError::into_inner);
            memory.transcript()
        };
        let mut scratchpad = crate::prompt_with_history(&history, input);

        for step in 0..self.max_steps {
            let reply = self
                .model
                .complete(CompletionRequest::new(scratchpad.clone()).with_system(system.clone()))
                .await?;

            match parse_action(&reply) {
                Action::Final(answer) => {
                    tracing::debug!(agent = %self.name, step, "Final answer");
                    let mut memory =
                        self.memory.lock().unwrap_or_else(PoisonError::into_inner);
                    memory.record("user", input);
                    memory.record("agent", &answer);
                    return Ok(answer);
                }
                Action::Call { tool, arguments } => {
                    tracing::debug!(agent = %self.name, step, tool = %tool, "Tool call");
                    let observation = self.bridge.invoke(&tool, arguments).await;
                    scratchpad.push_str(&format!(
                        "\nAction: {tool}\nObservation: {observation}"
                    ));
                }
            }
        }

        Ok(format!(
            "Stopped after {} steps without a final answer",
            self.max_steps
        ))
    }
}

/// Builder for ReactAgent
pub struct ReactAgentBuilder {
    core: AgentBuilderCore,
    model: Option<Arc<dyn CompletionModel>>,
    bridge: Option<Arc<AgentBridge>>,
    memory: Option<Box<dyn Memory>>,
    max_steps: u32,
}

impl ReactAgentBuilder {
    pub fn new() -> Self {
        Self {
            core: AgentBuilderCore::new(),
            model: None,
            bridge: None,
            memory: None,
            max_steps: 8,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.core.with_name(name);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.core.with_description(description);
        self
    }

    pub fn model(mut self, model: Arc<dyn CompletionModel>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn bridge(mut self, bridge: Arc<AgentBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn memory(mut self, memory: Box<dyn Memory>) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn max_steps(mut self, max: u32) -> Self {
        self.max_steps = max;
        self
    }

    pub fn build(self) -> Result<ReactAgent> {
        let (name, description) = self.core.validate(
            "ReactAgent",
            "An agent that interleaves reasoning with tool calls",
        )?;
        let model = self
            .model
            .ok_or_else(|| Error::Config("Model is required".to_string()))?;
        let bridge = self
            .bridge
            .ok_or_else(|| Error::Config("Bridge is required".to_string()))?;
        let memory = self
            .memory
            .unwrap_or_else(|| Box::new(ConversationMemory::default()));

        Ok(ReactAgent {
            name: Arc::from(name),
            description: Arc::from(description),
            model,
            bridge,
            memory: Mutex::new(memory),
            max_steps: self.max_steps,
        })
    }
}

impl Default for ReactAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
