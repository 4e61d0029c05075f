//! # mcp-arena
//!
//! Command-line interface for running Arena MCP server presets.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod args;
mod commands;

/// mcp-arena - run MCP servers from Arena presets
#[derive(Parser)]
#[command(name = "mcp-arena")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available MCP server presets
    List {
        /// Show parameter details for each preset
        #[arg(short, long)]
        detailed: bool,
    },
    /// Show detailed information about a preset
    Info {
        /// Name of the preset to inspect
        preset: String,
    },
    /// Run an MCP server preset
    ///
    /// Preset-specific arguments can be passed as --argument-name value.
    Run {
        /// Name of the MCP server preset to run
        #[arg(short = 's', long = "mcp-server")]
        mcp_server: String,

        /// Preset arguments as --key value pairs
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Validate a preset's configuration
    Validate {
        /// Name of the preset to validate
        preset: String,
    },
    /// Show information about MCP Arena
    About,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::List { detailed } => commands::list::handle(detailed),
        Commands::Info { preset } => commands::info::handle(&preset),
        Commands::Run { mcp_server, args } => {
            commands::run::handle(&mcp_server, &args, cli.verbose).await
        }
        Commands::Validate { preset } => commands::validate::handle(&preset),
        Commands::About => commands::about::handle(),
    }
}
