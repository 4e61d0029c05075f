use arena_core::{Error, ParamKind, Result, Tool, ToolContext, ToolSchema};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// File system operations rooted at a base path.
pub struct FileSystemTool {
    base_path: PathBuf,
}

impl FileSystemTool {
    /// Create a tool rooted at the current directory.
    pub fn new() -> Self {
        Self::with_base_path(".")
    }

    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for FileSystemTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for FileSystemTool {
    fn name(&self) -> &str {
        "filesystem"
    }

    fn description(&self) -> &str {
        "Perform file system operations like read, write, list files"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .param(
                "operation",
                ParamKind::String,
                "One of: read, write, list, exists",
            )
            .param("path", ParamKind::String, "Path relative to the base path")
            .param_with_default(
                "content",
                ParamKind::optional(ParamKind::String),
                "Content for write operations",
                "",
            )
    }

    async fn execute(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let operation = args["operation"]
            .as_str()
            .ok_or_else(|| Error::message("Missing 'operation' parameter"))?;
        let path = args["path"]
            .as_str()
            .ok_or_else(|| Error::message("Missing 'path' parameter"))?;
        let full_path = self.resolve(path);

        tracing::debug!(
            invocation_id = %ctx.invocation_id,
            operation = %operation,
            path = %full_path.display(),
            "Filesystem operation"
        );

        match operation {
            "read" => {
                if !full_path.exists() {
                    return Ok(json!(format!("File not found: {}", full_path.display())));
                }
                let contents = tokio::fs::read_to_string(&full_path).await?;
                Ok(json!(contents))
            }
            "write" => {
                let content = args["content"].as_str().unwrap_or_default();
                if let Some(parent) = full_path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(&full_path, content).await?;
                Ok(json!(format!(
                    "Successfully wrote to: {}",
                    full_path.display()
                )))
            }
            "list" => {
                if !full_path.exists() {
                    return Ok(json!(format!(
                        "Directory not found: {}",
                        full_path.display()
                    )));
                }
                let mut entries = tokio::fs::read_dir(&full_path).await?;
                let mut items = Vec::new();
                while let Some(entry) = entries.next_entry().await? {
                    items.push(entry.file_name().to_string_lossy().into_owned());
                }
                items.sort();
                Ok(json!(format!(
                    "Contents of {}:\n{}",
                    full_path.display(),
                    items.join("\n")
                )))
            }
            "exists" => Ok(json!(format!("Path exists: {}", full_path.exists()))),
            other => Err(Error::message(format!(
                "Unsupported filesystem operation: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ToolContext {
        ToolContext::new("inv-1", "call-1")
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FileSystemTool::with_base_path(dir.path());

        let out = tool
            .execute(
                &ctx(),
                json!({"operation": "write", "path": "notes/a.txt", "content": "hello"}),
            )
            .await
            .unwrap();
        assert!(out.as_str().unwrap().starts_with("Successfully wrote to:"));

        let out = tool
            .execute(&ctx(), json!({"operation": "read", "path": "notes/a.txt"}))
            .await
            .unwrap();
        assert_eq!(out, json!("hello"));
    }

    #[tokio::test]
    async fn test_read_missing_file_is_a_message() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FileSystemTool::with_base_path(dir.path());

        let out = tool
            .execute(&ctx(), json!({"operation": "read", "path": "missing.txt"}))
            .await
            .unwrap();
        assert!(out.as_str().unwrap().starts_with("File not found:"));
    }

    #[tokio::test]
    async fn test_list_and_exists() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FileSystemTool::with_base_path(dir.path());

        tool.execute(
            &ctx(),
            json!({"operation": "write", "path": "b.txt", "content": ""}),
        )
        .await
        .unwrap();

        let out = tool
            .execute(&ctx(), json!({"operation": "list", "path": ""}))
            .await
            .unwrap();
        assert!(out.as_str().unwrap().contains("b.txt"));

        let out = tool
            .execute(&ctx(), json!({"operation": "exists", "path": "b.txt"}))
            .await
            .unwrap();
        assert_eq!(out.as_str().unwrap(), "Path exists: true");
    }

    #[tokio::test]
    async fn test_unsupported_operation_fails() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FileSystemTool::with_base_path(dir.path());

        let err = tool
            .execute(&ctx(), json!({"operation": "delete", "path": "a"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported filesystem operation"));
    }
}
