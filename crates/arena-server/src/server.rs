//! Opinionated MCP server with ordered tool registration

use arena_core::{Error, Result, ServerConfig, Tool, ToolProvider, Transport};
use std::collections::HashMap;
use std::sync::Arc;

/// An MCP server that owns an ordered set of tools.
///
/// Registration order is the listing order. Registering a tool whose name is
/// already present replaces the existing tool in place, so the listing never
/// shows duplicates.
pub struct McpServer {
    name: String,
    description: String,
    instructions: Option<String>,
    config: ServerConfig,
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl McpServer {
    pub fn builder() -> McpServerBuilder {
        McpServerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Register a tool. A tool with the same name replaces the old one
    /// without changing its position in the listing.
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        match self.index.get(&name) {
            Some(&position) => {
                tracing::debug!(tool = %name, "Replacing registered tool");
                self.tools[position] = tool;
            }
            None => {
                tracing::debug!(tool = %name, "Registering tool");
                self.index.insert(name, self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn get_tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.index.get(name).map(|&position| &self.tools[position])
    }

    /// Serve over the configured transport.
    ///
    /// Only stdio is wired up; the other transports are accepted in
    /// configuration so deployments can record intent, but running them
    /// is a configuration error.
    pub async fn run(self) -> Result<()> {
        match self.config.transport {
            Transport::Stdio => {
                tracing::info!(server = %self.name, "Serving MCP over stdio");
                crate::handler::serve_stdio(self).await
            }
            transport => Err(Error::Config(format!(
                "Transport '{transport}' is not supported yet; use stdio"
            ))),
        }
    }
}

impl ToolProvider for McpServer {
    fn provided_tools(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.clone()
    }
}

/// Builder for McpServer
pub struct McpServerBuilder {
    name: Option<String>,
    description: Option<String>,
    instructions: Option<String>,
    config: ServerConfig,
    tools: Vec<Arc<dyn Tool>>,
}

impl McpServerBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            instructions: None,
            config: ServerConfig::default(),
            tools: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn transport(mut self, transport: Transport) -> Self {
        self.config.transport = transport;
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn tools(mut self, tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    pub fn build(self) -> Result<McpServer> {
        let name = self
            .name
            .ok_or_else(|| Error::Config("Server name is required".to_string()))?;
        let description = self
            .description
            .unwrap_or_else(|| "An MCP server".to_string());

        let mut server = McpServer {
            name,
            description,
            instructions: self.instructions,
            config: self.config,
            tools: Vec::new(),
            index: HashMap::new(),
        };
        for tool in self.tools {
            server.register_tool(tool);
        }
        Ok(server)
    }
}

impl Default for McpServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_tools::{CalculatorTool, TimeTool};

    #[test]
    fn test_builder_requires_name() {
        assert!(McpServer::builder().build().is_err());
    }

    #[test]
    fn test_registration_order_is_listing_order() {
        let server = McpServer::builder()
            .name("test")
            .tool(Arc::new(CalculatorTool::new()))
            .tool(Arc::new(TimeTool::new()))
            .build()
            .unwrap();

        let names: Vec<&str> = server.tools().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["calculator", "time"]);
    }

    #[test]
    fn test_reregistration_replaces_in_place() {
        let mut server = McpServer::builder()
            .name("test")
            .tool(Arc::new(CalculatorTool::new()))
            .tool(Arc::new(TimeTool::new()))
            .build()
            .unwrap();

        server.register_tool(Arc::new(CalculatorTool::new()));

        assert_eq!(server.tools().len(), 2);
        assert_eq!(server.tools()[0].name(), "calculator");
    }

    #[tokio::test]
    async fn test_non_stdio_transport_is_config_error() {
        let server = McpServer::builder()
            .name("test")
            .transport(Transport::Sse)
            .build()
            .unwrap();

        let err = server.run().await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
