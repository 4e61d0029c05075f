//! MCP Arena workspace facade
//!
//! Re-exports the member crates so a single dependency brings in the whole
//! toolkit.

pub use arena_agent as agent;
pub use arena_bridge as bridge;
pub use arena_server as server;
pub use arena_tools as tools;

pub use arena_core::{
    ArenaConfig, Error, ParamKind, ParamSpec, Result, ServerConfig, Tool, ToolContext,
    ToolProvider, ToolSchema, Transport,
};
