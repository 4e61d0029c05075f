//! Validate a preset before running it.

use arena_server::{PresetArgs, find_preset};

pub fn handle(name: &str) -> anyhow::Result<()> {
    println!("Validating preset '{name}'");
    println!();

    let mut all_passed = true;

    let preset = find_preset(name);
    report("Preset exists", preset.is_some(), None);
    all_passed &= preset.is_some();

    if let Some(preset) = preset {
        // Construct with defaults only; required parameters fail here
        let constructed = preset.construct(&PresetArgs::new());
        let detail = constructed.as_ref().err().map(|e| e.to_string());
        report("Constructs with defaults", constructed.is_ok(), detail);
        all_passed &= constructed.is_ok();

        report(
            "Parameters declared",
            true,
            Some(format!("{} parameter(s)", preset.params.len())),
        );
    }

    println!();
    if all_passed {
        println!("All validation checks passed.");
        Ok(())
    } else {
        println!("Some validation checks failed.");
        std::process::exit(1);
    }
}

fn report(check: &str, passed: bool, detail: Option<String>) {
    let status = if passed { "PASS" } else { "FAIL" };
    match detail {
        Some(detail) => println!("  [{status}] {check} ({detail})"),
        None => println!("  [{status}] {check}"),
    }
}
