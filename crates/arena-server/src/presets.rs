//! Ready-made server presets
//!
//! A preset is a named recipe that assembles an [`McpServer`] from keyword
//! arguments. The registry is static; `list` and `info` in the CLI read it
//! without constructing anything.

use crate::server::McpServer;
use arena_core::{ArenaConfig, Error, Result, ServerConfig, Transport};
use arena_tools::{
    CalculatorTool, DataAnalysisTool, FileSystemTool, TimeTool, WebTool, default_tools,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Keyword arguments passed through from the CLI (`--key value` pairs).
pub type PresetArgs = HashMap<String, Value>;

/// One declarable preset parameter, for `info` and `validate` output.
#[derive(Clone, Copy)]
pub struct PresetParam {
    pub name: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
}

/// A named server recipe.
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [PresetParam],
    constructor: fn(&PresetArgs) -> Result<McpServer>,
}

impl Preset {
    /// Build the preset's server from parsed CLI arguments.
    pub fn construct(&self, args: &PresetArgs) -> Result<McpServer> {
        (self.constructor)(args)
    }
}

const TRANSPORT_PARAMS: [PresetParam; 3] = [
    PresetParam {
        name: "host",
        required: false,
        default: Some("127.0.0.1"),
    },
    PresetParam {
        name: "port",
        required: false,
        default: Some("8000"),
    },
    PresetParam {
        name: "transport",
        required: false,
        default: Some("stdio"),
    },
];

static PRESETS: &[Preset] = &[
    Preset {
        name: "calculator",
        description: "Server exposing a math expression calculator",
        params: &TRANSPORT_PARAMS,
        constructor: calculator_preset,
    },
    Preset {
        name: "filesystem",
        description: "Server exposing sandboxed filesystem operations",
        params: &[
            PresetParam {
                name: "base-path",
                required: false,
                default: Some("."),
            },
            TRANSPORT_PARAMS[0],
            TRANSPORT_PARAMS[1],
            TRANSPORT_PARAMS[2],
        ],
        constructor: filesystem_preset,
    },
    Preset {
        name: "web",
        description: "Server exposing web page fetching",
        params: &TRANSPORT_PARAMS,
        constructor: web_preset,
    },
    Preset {
        name: "time",
        description: "Server exposing the current local time",
        params: &TRANSPORT_PARAMS,
        constructor: time_preset,
    },
    Preset {
        name: "data-analysis",
        description: "Server exposing data summary and statistics tools",
        params: &TRANSPORT_PARAMS,
        constructor: data_analysis_preset,
    },
    Preset {
        name: "arena",
        description: "Server exposing the full default toolset",
        params: &TRANSPORT_PARAMS,
        constructor: arena_preset,
    },
];

/// All known presets, in registry order.
pub fn all_presets() -> &'static [Preset] {
    PRESETS
}

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

/// Shared host/port/transport handling for every preset.
///
/// Starts from `arena.toml` + `ARENA_*` env vars; explicit CLI arguments
/// override both.
fn server_config_from_args(args: &PresetArgs) -> Result<ServerConfig> {
    let mut config = ArenaConfig::load()?.server;

    if let Some(host) = args.get("host") {
        config.host = host
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::Config("host must be a string".to_string()))?;
    }
    if let Some(port) = args.get("port") {
        config.port = port
            .as_i64()
            .and_then(|p| u16::try_from(p).ok())
            .ok_or_else(|| Error::Config("port must be a number between 0 and 65535".to_string()))?;
    }
    if let Some(transport) = args.get("transport") {
        let text = transport
            .as_str()
            .ok_or_else(|| Error::Config("transport must be a string".to_string()))?;
        config.transport = Transport::parse(text)?;
    }

    Ok(config)
}

fn calculator_preset(args: &PresetArgs) -> Result<McpServer> {
    McpServer::builder()
        .name("calculator-server")
        .description("Math expression evaluation over MCP")
        .config(server_config_from_args(args)?)
        .tool(Arc::new(CalculatorTool::new()))
        .build()
}

fn filesystem_preset(args: &PresetArgs) -> Result<McpServer> {
    let base_path = args
        .get("base-path")
        .or_else(|| args.get("base_path"))
        .and_then(Value::as_str)
        .unwrap_or(".");

    McpServer::builder()
        .name("filesystem-server")
        .description("Sandboxed filesystem operations over MCP")
        .config(server_config_from_args(args)?)
        .tool(Arc::new(FileSystemTool::with_base_path(base_path)))
        .build()
}

fn web_preset(args: &PresetArgs) -> Result<McpServer> {
    McpServer::builder()
        .name("web-server")
        .description("Web page fetching over MCP")
        .config(server_config_from_args(args)?)
        .tool(Arc::new(WebTool::new()?))
        .build()
}

fn time_preset(args: &PresetArgs) -> Result<McpServer> {
    McpServer::builder()
        .name("time-server")
        .description("Current local time over MCP")
        .config(server_config_from_args(args)?)
        .tool(Arc::new(TimeTool::new()))
        .build()
}

fn data_analysis_preset(args: &PresetArgs) -> Result<McpServer> {
    McpServer::builder()
        .name("data-analysis-server")
        .description("Data summary and statistics over MCP")
        .config(server_config_from_args(args)?)
        .tool(Arc::new(DataAnalysisTool::new()))
        .build()
}

fn arena_preset(args: &PresetArgs) -> Result<McpServer> {
    McpServer::builder()
        .name("arena-server")
        .description("The full default Arena toolset over MCP")
        .config(server_config_from_args(args)?)
        .tools(default_tools()?)
        .build()
}
