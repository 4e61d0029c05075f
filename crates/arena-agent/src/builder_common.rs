//! Common builder infrastructure for all agents

use arena_core::{Error, Result};

/// Common builder fields for all agents
#[derive(Debug, Clone, Default)]
pub struct AgentBuilderCore {
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
}

impl AgentBuilderCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn with_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Validates and returns (name, description) or error
    ///
    /// # Arguments
    /// * `agent_type` - The type of agent for error messages (e.g., "ReactAgent")
    /// * `default_desc` - Default description if none provided
    pub fn validate(&self, agent_type: &str, default_desc: &str) -> Result<(String, String)> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| Error::Config(format!("{agent_type} name is required")))?;
        let description = self
            .description
            .clone()
            .unwrap_or_else(|| default_desc.to_string());
        Ok((name, description))
    }
}
