//! MCP server runtime for Arena
//!
//! This crate assembles tool sets into runnable MCP servers:
//! - [`McpServer`] holds an ordered tool registry and transport config
//! - [`ArenaHandler`] speaks the protocol via the rmcp SDK (stdio)
//! - [`presets`] is the static registry of ready-made servers the CLI runs

pub mod handler;
pub mod presets;
pub mod server;

pub use handler::ArenaHandler;
pub use presets::{Preset, PresetArgs, PresetParam, all_presets, find_preset};
pub use server::{McpServer, McpServerBuilder};
