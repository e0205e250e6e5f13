//! Simple check example: check an exported build and print results.

use buildguard::prelude::*;
use std::path::Path;

fn main() -> Result<(), BuildGuardError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/compatible_build.json".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example simple_validation [path/to/pc-build.json]");
        std::process::exit(1);
    }

    let report = BuildGuardCore::check_build_file(path, CheckOptions::default())?;

    println!("Compatibility results for: {}", path.display());
    println!("Total issues: {}", report.total_issues());
    println!("Estimated power: {}W", report.estimated_power);
    println!();

    for issue in &report.issues {
        println!("  - {}", issue);
        if let Some(slot) = issue.slot {
            println!("    Slot: {}", slot);
        }
    }

    if !report.suggestions.is_empty() {
        println!("\nSuggestions:");
        for suggestion in &report.suggestions {
            println!("  - {}", suggestion);
        }
    }

    if !report.compatible {
        println!("\nBuild is not compatible (critical issues).");
        std::process::exit(1);
    }

    println!("\nBuild is compatible.");
    Ok(())
}
