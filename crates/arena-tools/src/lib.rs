//! Tool implementations for Arena
//!
//! This crate provides:
//! - Built-in tools (calculator, filesystem, web, time, data analysis, search)
//! - Function tools built from async closures

pub mod builtin;
pub mod function_tool;

// Re-exports
pub use builtin::{
    CalculatorTool, DataAnalysisTool, FileSystemTool, SearchTool, TimeTool, WebTool,
    create_echo_tool,
};
pub use function_tool::FunctionTool;

// Re-export core types
pub use arena_core::{Result, Tool, ToolContext, ToolSchema};

use std::sync::Arc;

/// The default tool set: calculator, filesystem, web, time, data analysis.
pub fn default_tools() -> Result<Vec<Arc<dyn Tool>>> {
    Ok(vec![
        Arc::new(CalculatorTool::new()),
        Arc::new(FileSystemTool::new()),
        Arc::new(WebTool::new()?),
        Arc::new(TimeTool::new()),
        Arc::new(DataAnalysisTool::new()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tools_have_unique_names() {
        let tools = default_tools().unwrap();
        let mut names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), 5);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);
    }
}
