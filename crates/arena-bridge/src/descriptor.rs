//! Tool descriptors and the function-calling listing format

use arena_core::Tool;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// One entry of the LLM function-calling listing:
/// `{"type": "function", "function": {"name", "description", "parameters"}}`.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDecl {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: FunctionSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Immutable descriptor built once per discovered tool at bridge
/// construction time.
pub struct BridgedTool {
    name: String,
    description: String,
    parameters: Value,
    tool: Arc<dyn Tool>,
}

impl BridgedTool {
    pub(crate) fn wrap(tool: Arc<dyn Tool>) -> Self {
        let name = tool.name().to_string();
        // First non-empty line of the tool's description, or a default
        let description = tool
            .description()
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Tool: {name}"));
        let parameters = tool.schema().to_value();

        Self {
            name,
            description,
            parameters,
            tool,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &Value {
        &self.parameters
    }

    pub(crate) fn tool(&self) -> &Arc<dyn Tool> {
        &self.tool
    }

    /// The descriptor in function-calling listing form.
    pub fn decl(&self) -> FunctionDecl {
        FunctionDecl {
            kind: "function",
            function: FunctionSpec {
                name: self.name.clone(),
                description: self.description.clone(),
                parameters: self.parameters.clone(),
            },
        }
    }
}

impl std::fmt::Debug for BridgedTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgedTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
