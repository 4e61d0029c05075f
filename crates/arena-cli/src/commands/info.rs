//! Show details for one preset.

use arena_server::find_preset;

pub fn handle(name: &str) -> anyhow::Result<()> {
    let Some(preset) = find_preset(name) else {
        eprintln!("Error: preset '{name}' not found.");
        eprintln!("Run 'mcp-arena list' to see available presets.");
        std::process::exit(1);
    };

    println!("{}", preset.name);
    println!("  Description: {}", preset.description);

    if preset.params.is_empty() {
        println!("  No parameters required");
    } else {
        println!("  Parameters ({}):", preset.params.len());
        for param in preset.params {
            match (param.required, param.default) {
                (true, _) => println!("    --{} (required)", param.name),
                (false, Some(default)) => println!("    --{} (default: {default})", param.name),
                (false, None) => println!("    --{} (optional)", param.name),
            }
        }
    }

    println!();
    println!("Usage: mcp-arena run --mcp-server {} [OPTIONS]", preset.name);

    Ok(())
}
