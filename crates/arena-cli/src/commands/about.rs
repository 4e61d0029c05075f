//! Project information.

pub fn handle() -> anyhow::Result<()> {
    println!("MCP Arena v{}", env!("CARGO_PKG_VERSION"));
    println!("Build. Deploy. Orchestrate.");
    println!();
    println!("A library for building MCP (Model Context Protocol) servers");
    println!("with ready-made presets and agent orchestration.");
    println!();
    println!("  Presets: ready-to-run MCP servers (mcp-arena list)");
    println!("  Tools:   calculator, filesystem, web, time, data analysis");
    println!("  Agents:  reflection, react, planning");
    println!();
    println!("Get started: mcp-arena run --mcp-server calculator");

    Ok(())
}
