//! Run a preset server.

use crate::args::parse_extra_args;
use arena_core::Transport;
use arena_server::find_preset;

pub async fn handle(name: &str, extra: &[String], verbose: bool) -> anyhow::Result<()> {
    let Some(preset) = find_preset(name) else {
        eprintln!("Error: preset '{name}' not found.");
        eprintln!("Run 'mcp-arena list' to see available presets.");
        std::process::exit(1);
    };

    let args = parse_extra_args(extra);
    if verbose && !args.is_empty() {
        tracing::debug!(?args, "Parsed preset arguments");
    }

    let server = match preset.construct(&args) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            eprintln!("Run 'mcp-arena info {name}' for parameter details.");
            std::process::exit(1);
        }
    };

    let config = server.config();
    // Status goes to stderr; stdout belongs to the protocol on stdio
    eprintln!("Preset:    {name}");
    eprintln!("Server:    {}", server.name());
    eprintln!("Tools:     {}", server.tools().len());
    eprintln!("Transport: {}", config.transport);
    match config.transport {
        Transport::Stdio => eprintln!("Mode:      standard I/O, ready for an MCP client"),
        transport => {
            if let Some(endpoint) = transport.endpoint(&config.host, config.port) {
                eprintln!("Endpoint:  {endpoint}");
            }
        }
    }

    server.run().await?;

    Ok(())
}
