//! List available presets.

use arena_server::all_presets;

pub fn handle(detailed: bool) -> anyhow::Result<()> {
    let presets = all_presets();

    println!("Available MCP server presets ({}):", presets.len());
    println!();

    for preset in presets {
        if detailed {
            println!("{}", preset.name);
            println!("  {}", preset.description);
            if preset.params.is_empty() {
                println!("  No parameters");
            } else {
                println!("  Parameters:");
                for param in preset.params {
                    match (param.required, param.default) {
                        (true, _) => println!("    --{} (required)", param.name),
                        (false, Some(default)) => {
                            println!("    --{} (default: {default})", param.name)
                        }
                        (false, None) => println!("    --{} (optional)", param.name),
                    }
                }
            }
            println!();
        } else {
            println!("  {:<16} {}", preset.name, preset.description);
        }
    }

    if !detailed {
        println!();
        println!("Tip: use --detailed for parameter information");
    }
    println!("Usage: mcp-arena run --mcp-server <preset> [--key value ...]");

    Ok(())
}
