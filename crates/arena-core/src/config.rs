//! Configuration management
//!
//! Loads configuration with priority:
//! 1. arena.toml (or specified config file)
//! 2. Environment variables (fallback)
//! 3. Defaults

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level Arena configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Transport the configured MCP runtime should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    #[default]
    Stdio,
    Sse,
    StreamableHttp,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Stdio => "stdio",
            Transport::Sse => "sse",
            Transport::StreamableHttp => "streamable-http",
        }
    }

    /// HTTP endpoint for transports that expose one.
    pub fn endpoint(&self, host: &str, port: u16) -> Option<String> {
        match self {
            Transport::Stdio => None,
            Transport::Sse => Some(format!("http://{host}:{port}/sse")),
            Transport::StreamableHttp => Some(format!("http://{host}:{port}/mcp")),
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "stdio" => Ok(Transport::Stdio),
            "sse" => Ok(Transport::Sse),
            "streamable-http" => Ok(Transport::StreamableHttp),
            other => Err(Error::Config(format!("Unknown transport: {other}"))),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub transport: Transport,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            transport: Transport::default(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl ArenaConfig {
    /// Load configuration: arena.toml from the current directory or a parent,
    /// falling back to environment variables and defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file, or discover one when `None`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(config_path) => {
                tracing::debug!(path = %config_path.display(), "Loading configuration file");
                let contents = fs::read_to_string(&config_path).map_err(|e| {
                    Error::Config(format!(
                        "Failed to read config file {}: {e}",
                        config_path.display()
                    ))
                })?;
                toml::from_str(&contents).map_err(|e| {
                    Error::Config(format!(
                        "Failed to parse config file {}: {e}",
                        config_path.display()
                    ))
                })?
            }
            None => ArenaConfig::default(),
        };

        config.apply_env()?;
        Ok(config)
    }

    /// Find arena.toml by searching the current directory and parents.
    fn find_config_file() -> Option<PathBuf> {
        let mut current = env::current_dir().ok()?;

        loop {
            let candidate = current.join("arena.toml");
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Environment variables override file values.
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(host) = env::var("ARENA_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("ARENA_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid ARENA_PORT value: {port}")))?;
        }
        if let Ok(transport) = env::var("ARENA_TRANSPORT") {
            self.server.transport = Transport::parse(&transport)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.transport, Transport::Stdio);
    }

    #[test]
    fn test_parse_toml() {
        let config: ArenaConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            transport = "sse"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.transport, Transport::Sse);
    }

    #[test]
    fn test_transport_endpoints() {
        assert_eq!(Transport::Stdio.endpoint("localhost", 8000), None);
        assert_eq!(
            Transport::Sse.endpoint("localhost", 8000).as_deref(),
            Some("http://localhost:8000/sse")
        );
        assert_eq!(
            Transport::StreamableHttp
                .endpoint("localhost", 8000)
                .as_deref(),
            Some("http://localhost:8000/mcp")
        );
    }

    #[test]
    fn test_transport_parse_rejects_unknown() {
        assert!(Transport::parse("websocket").is_err());
        assert_eq!(Transport::parse("streamable-http").unwrap(), Transport::StreamableHttp);
    }
}
