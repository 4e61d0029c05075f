//! Agent implementations for Arena

pub mod builder_common;
pub mod memory;
pub mod model;
pub mod planning;
pub mod react;
pub mod reflection;
pub mod testing;

use arena_core::Result;
use async_trait::async_trait;

pub use memory::{ConversationMemory, EpisodicMemory, Memory, MemoryEntry, SimpleMemory};
pub use model::{CompletionModel, CompletionRequest};
pub use planning::{PlanningAgent, PlanningAgentBuilder};
pub use react::{ReactAgent, ReactAgentBuilder};
pub use reflection::{ReflectionAgent, ReflectionAgentBuilder};

/// A call-and-return agent: one input in, one answer out.
#[async_trait]
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Process an input and produce a final answer.
    async fn process(&self, input: &str) -> Result<String>;
}

/// Compose the task prompt, prefixing the remembered transcript so
/// follow-up inputs see earlier exchanges.
pub(crate) fn prompt_with_history(history: &str, input: &str) -> String {
    if history.is_empty() {
        format!("Task: {input}")
    } else {
        format!("Conversation so far:\n{history}\n\nTask: {input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;
    use std::sync::Arc;

    #[test]
    fn test_builder_creates_agent() {
        let model = Arc::new(MockModel::new());

        let agent = ReflectionAgent::builder()
            .name("test-agent")
            .description("A test agent")
            .model(model)
            .build()
            .unwrap();

        assert_eq!(agent.name(), "test-agent");
        assert_eq!(agent.description(), "A test agent");
    }

    #[test]
    fn test_builder_requires_name() {
        let model = Arc::new(MockModel::new());

        let result = PlanningAgent::builder().model(model).build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_requires_model() {
        let result = PlanningAgent::builder().name("test-agent").build();

        assert!(result.is_err());
    }

    #[test]
    fn test_default_description_applied() {
        let model = Arc::new(MockModel::new());

        let agent = PlanningAgent::builder()
            .name("planner")
            .model(model)
            .build()
            .unwrap();

        assert_eq!(agent.description(), "An agent that plans before executing");
    }
}
