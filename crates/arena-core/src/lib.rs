//! Core traits and types for Arena
//!
//! This crate provides the foundational abstractions for building MCP servers
//! and the agents that consume them.

pub mod config;
pub mod error;
pub mod schema;
pub mod tool;

// Re-exports
pub use config::{ArenaConfig, ServerConfig, Transport};
pub use error::{Error, Result};
pub use schema::{ParamKind, ParamSpec, ToolSchema};
pub use tool::{Tool, ToolContext, ToolProvider};
