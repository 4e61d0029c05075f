//! Closure-backed tools

use arena_core::{Error, Result, Tool, ToolContext, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type ToolFuture = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;
type ToolHandler = Arc<dyn Fn(ToolContext, Value) -> ToolFuture + Send + Sync>;

/// A tool built from an async closure.
pub struct FunctionTool {
    name: String,
    description: String,
    schema: ToolSchema,
    handler: ToolHandler,
}

impl FunctionTool {
    pub fn builder() -> FunctionToolBuilder {
        FunctionToolBuilder::new()
    }
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> ToolSchema {
        self.schema.clone()
    }

    async fn execute(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        (self.handler)(ctx.clone(), args).await
    }
}

/// Builder for [`FunctionTool`]
pub struct FunctionToolBuilder {
    name: Option<String>,
    description: Option<String>,
    schema: ToolSchema,
    handler: Option<ToolHandler>,
}

impl FunctionToolBuilder {
    fn new() -> Self {
        Self {
            name: None,
            description: None,
            schema: ToolSchema::new(),
            handler: None,
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

    pub fn schema(mut self, schema: ToolSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn execute<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(ToolContext, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        self.handler = Some(Arc::new(move |ctx, args| Box::pin(f(ctx, args))));
        self
    }

    pub fn build(self) -> Result<FunctionTool> {
        let name = self
            .name
            .ok_or_else(|| Error::Config("FunctionTool name is required".to_string()))?;
        let handler = self
            .handler
            .ok_or_else(|| Error::Config("FunctionTool handler is required".to_string()))?;
        let description = self
            .description
            .unwrap_or_else(|| format!("Tool: {name}"));

        Ok(FunctionTool {
            name,
            description,
            schema: self.schema,
            handler,
        })
    }
}
