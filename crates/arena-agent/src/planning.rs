//! Planning agent: plan, execute steps, summarize

use crate::builder_common::AgentBuilderCore;
use crate::memory::{ConversationMemory, Memory};
use crate::model::{CompletionModel, CompletionRequest};
use crate::Agent;
use arena_core::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

const PLAN_SYSTEM: &str = "You break tasks into short numbered steps. \
     Reply with a numbered list, one step per line, nothing else.";
const STEP_SYSTEM: &str = "You carry out one step of a plan. \
     Use the results of earlier steps when they help. Reply with the step result only.";
const SUMMARY_SYSTEM: &str =
    "You combine step results into a final answer for the original task. Reply with the answer only.";

/// Parse a numbered plan into individual steps.
///
/// A step line is digits followed directly by `.`, `)`, or `:`. Lines
/// without that marker are skipped, so prose that merely starts with a
/// number (a year, a quantity) is not mistaken for a step.
fn parse_plan(plan: &str) -> Vec<String> {
    plan.lines()
        .filter_map(|line| {
            let line = line.trim();
            let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
            if rest.len() == line.len() {
                return None;
            }
            let step = rest.strip_prefix(['.', ')', ':'])?.trim();
            (!step.is_empty()).then(|| step.to_string())
        })
        .collect()
}

/// PlanningAgent asks the model for a numbered plan, executes each step in
/// order with the results of earlier steps in context, then asks for a
/// summary. A plan with no parseable steps falls back to a direct answer.
pub struct PlanningAgent {
    name: Arc<str>,
    description: Arc<str>,
    model: Arc<dyn CompletionModel>,
    memory: Mutex<Box<dyn Memory>>,
    max_steps: usize,
}

impl PlanningAgent {
    pub fn builder() -> PlanningAgentBuilder {
        PlanningAgentBuilder::new()
    }
}

#[async_trait]
impl Agent for PlanningAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn process(&self, input: &str) -> Result<String> {
        let history = {
            let memory = self.memory.lock().unwrap_or_else(PoisonError::into_inner);
            memory.transcript()
        };
        let task = crate::prompt_with_history(&history, input);

        let plan = self
            .model
            .complete(CompletionRequest::new(task.clone()).with_system(PLAN_SYSTEM))
            .await?;

        let steps = parse_plan(&plan);
        if steps.is_empty() {
            tracing::debug!(agent = %self.name, "No parseable plan, answering directly");
            let answer = self.model.complete(CompletionRequest::new(task)).await?;
            let mut memory = self.memory.lock().unwrap_or_else(PoisonError::into_inner);
            memory.record("user", input);
            memory.record("agent", &answer);
            return Ok(answer);
        }

        tracing::debug!(agent = %self.name, steps = steps.len(), "Executing plan");

        let mut results: Vec<String> = Vec::with_capacity(steps.len());
        for (index, step) in steps.iter().take(self.max_steps).enumerate() {
            let mut prompt = format!("Task: {input}\nStep {}: {step}", index + 1);
            if !results.is_empty() {
                prompt.push_str("\nEarlier results:");
                for (i, result) in results.iter().enumerate() {
                    prompt.push_str(&format!("\n{}. {result}", i + 1));
                }
            }
            let result = self
                .model
                .complete(CompletionRequest::new(prompt).with_system(STEP_SYSTEM))
                .await?;
            results.push(result);
        }

        let mut summary_prompt = format!("Task: {input}\nStep results:");
        for (i, result) in results.iter().enumerate() {
            summary_prompt.push_str(&format!("\n{}. {result}", i + 1));
        }
        let answer = self
            .model
            .complete(CompletionRequest::new(summary_prompt).with_system(SUMMARY_SYSTEM))
            .await?;

        let mut memory = self.memory.lock().unwrap_or_else(PoisonError::into_inner);
        memory.record("user", input);
        memory.record("agent", &answer);

        Ok(answer)
    }
}

/// Builder for PlanningAgent
pub struct PlanningAgentBuilder {
    core: AgentBuilderCore,
    model: Option<Arc<dyn CompletionModel>>,
    memory: Option<Box<dyn Memory>>,
    max_steps: usize,
}

impl PlanningAgentBuilder {
    pub fn new() -> Self {
        Self {
            core: AgentBuilderCore::new(),
            model: None,
            memory: None,
            max_steps: 10,
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

    pub fn memory(mut self, memory: Box<dyn Memory>) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }

    pub fn build(self) -> Result<PlanningAgent> {
        let (name, description) = self.core.validate(
            "PlanningAgent",
            "An agent that plans before executing",
        )?;
        let model = self
            .model
            .ok_or_else(|| Error::Config("Model is required".to_string()))?;
        let memory = self
            .memory
            .unwrap_or_else(|| Box::new(ConversationMemory::default()));

        Ok(PlanningAgent {
            name: Arc::from(name),
            description: Arc::from(description),
            model,
            memory: Mutex::new(memory),
            max_steps: self.max_steps,
        })
    }
}

impl Default for PlanningAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
