use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tool '{tool}' execution failed: {source}")]
    ToolFailed {
        tool: String,
        #[source]
        source: anyhow::Error,
    },

    /// For completion-model implementations to report provider failures.
    #[error("Model request failed: {0}")]
    Model(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use arena_core::Error;
    /// let err = Error::config_error("Invalid server configuration");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for creating general errors with a message
    ///
    /// # Example
    /// ```
    /// use arena_core::Error;
    /// let err = Error::message("Something went wrong");
    /// ```
    pub fn message(msg: impl Into<String>) -> Self {
        Error::Other(anyhow::anyhow!("{}", msg.into()))
    }

    /// Helper for wrapping a tool execution failure
    pub fn tool_failed(tool: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Error::ToolFailed {
            tool: tool.into(),
            source: source.into(),
        }
    }
}
