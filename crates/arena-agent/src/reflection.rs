//! Reflection agent: draft, critique, revise

use crate::builder_common::AgentBuilderCore;
use crate::memory::{ConversationMemory, Memory};
use crate::model::{CompletionModel, CompletionRequest};
use crate::Agent;
use arena_core::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

const DRAFT_SYSTEM: &str = "You are a careful assistant. Answer the task directly.";
const CRITIQUE_SYSTEM: &str =
    "You review answers for mistakes and omissions. Reply with OK if the answer needs no changes.";
const REVISE_SYSTEM: &str = "You revise answers to address a critique. Reply with the revised answer only.";

/// ReflectionAgent produces an answer, then critiques and revises it up to
/// `max_reflections` times. A critique of `OK` stops the loop early.
pub struct ReflectionAgent {
    name: Arc<str>,
    description: Arc<str>,
    model: Arc<dyn CompletionModel>,
    memory: Mutex<Box<dyn Memory>>,
    max_reflections: u32,
}

impl ReflectionAgent {
    pub fn builder() -> ReflectionAgentBuilder {
        ReflectionAgentBuilder::new()
    }
}

#[async_trait]
impl Agent for ReflectionAgent {
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

        let mut answer = self
            .model
            .complete(
                CompletionRequest::new(crate::prompt_with_history(&history, input))
                    .with_system(DRAFT_SYSTEM),
            )
            .await?;

        for round in 0..self.max_reflections {
            let critique = self
                .model
                .complete(
                    CompletionRequest::new(format!(
                        "Task:\n{input}\n\nAnswer:\n{answer}\n\nCritique the answer."
                    ))
                    .with_system(CRITIQUE_SYSTEM),
                )
                .await?;

            if critique.trim().eq_ignore_ascii_case("ok") {
                tracing::debug!(agent = %self.name, round, "Critique accepted the answer");
                break;
            }

            tracing::debug!(agent = %self.name, round, "Revising answer");
            answer = self
                .model
                .complete(
                    CompletionRequest::new(format!(
                        "Task:\n{input}\n\nAnswer:\n{answer}\n\nCritique:\n{critique}\n\nRevise the answer."
                    ))
                    .with_system(REVISE_SYSTEM),
                )
                .await?;
        }

        let mut memory = self.memory.lock().unwrap_or_else(PoisonError::into_inner);
        memory.record("user", input);
        memory.record("agent", &answer);

        Ok(answer)
    }
}

/// Builder for ReflectionAgent
pub struct ReflectionAgentBuilder {
    core: AgentBuilderCore,
    model: Option<Arc<dyn CompletionModel>>,
    memory: Option<Box<dyn Memory>>,
    max_reflections: u32,
}

impl ReflectionAgentBuilder {
    pub fn new() -> Self {
        Self {
            core: AgentBuilderCore::new(),
            model: None,
            memory: None,
            max_reflections: 2,
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

    pub fn max_reflections(mut self, max: u32) -> Self {
        self.max_reflections = max;
        self
    }

    pub fn build(self) -> Result<ReflectionAgent> {
        let (name, description) = self.core.validate(
            "ReflectionAgent",
            "An agent that refines its answers through self-critique",
        )?;
        let model = self
            .model
            .ok_or_else(|| Error::Config("Model is required".to_string()))?;
        let memory = self
            .memory
            .unwrap_or_else(|| Box::new(ConversationMemory::default()));

        Ok(ReflectionAgent {
            name: Arc::from(name),
            description: Arc::from(description),
            model,
            memory: Mutex::new(memory),
            max_reflections: self.max_reflections,
        })
    }
}

impl Default for ReflectionAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;

    #[tokio::test]
    async fn test_reflection_stops_on_ok_critique() {
        let model = Arc::new(MockModel::with_responses(["draft", "OK"]));
        let agent = ReflectionAgent::builder()
            .name("reflector")
            .model(model)
            .build()
            .unwrap();

        let answer = agent.process("explain ownership").await.unwrap();
        assert_eq!(answer, "draft");
    }

    #[tokio::test]
    async fn test_reflection_revises_until_limit() {
        let model = Arc::new(MockModel::with_responses([
            "draft",
            "too terse",
            "revision 1",
            "still too terse",
            "revision 2",
        ]));
        let agent = ReflectionAgent::builder()
            .name("reflector")
            .model(model)
            .max_reflections(2)
            .build()
            .unwrap();

        let answer = agent.process("explain lifetimes").await.unwrap();
        assert_eq!(answer, "revision 2");
    }

    #[tokio::test]
    async fn test_follow_up_sees_earlier_exchange() {
        let model = Arc::new(MockModel::with_responses([
            "blue",
            "OK",
            "because of scattering",
            "OK",
        ]));
        let agent = ReflectionAgent::builder()
            .name("reflector")
            .model(model.clone())
            .build()
            .unwrap();

        agent.process("what color is the sky").await.unwrap();
        agent.process("why").await.unwrap();

        let requests = model.requests();
        // Third call is the second task's draft; it carries the transcript.
        assert!(requests[2].prompt.contains("agent: blue"));
        assert!(requests[2].prompt.contains("Task: why"));
    }

    #[test]
    fn test_builder_requires_name_and_model() {
        let model: Arc<dyn CompletionModel> = Arc::new(MockModel::new());
        assert!(ReflectionAgent::builder().model(model).build().is_err());
        assert!(ReflectionAgent::builder().name("r").build().is_err());
    }
}
