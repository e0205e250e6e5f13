//! Example: adding a rule to the engine and running it without BuildGuardCore.
//! Run with: cargo run --example custom_rules [path/to/pc-build.json]

use buildguard::{
    parse_build, CompatibilityChecker, Issue, KnowledgeBase, Rule, RuleContext, RulesEngine,
    Severity, SlotId,
};
use std::path::Path;
use std::sync::Arc;

/// Flags a build that has a graphics card but no case to put it in.
struct GpuNeedsCaseRule;

impl Rule for GpuNeedsCaseRule {
    fn id(&self) -> &str {
        "gpu_needs_case"
    }

    fn name(&self) -> &str {
        "GPU Needs Case"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        if ctx.build.gpu().is_none() || ctx.build.case().is_some() {
            return Vec::new();
        }
        vec![Issue::new(
            self.id(),
            self.severity(),
            "Näytönohjain on valittu, mutta kotelo puuttuu.",
            Some(SlotId::CASE),
        )]
    }
}

fn main() -> Result<(), buildguard::BuildGuardError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/unbalanced_build.json".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example custom_rules [path/to/pc-build.json]");
        std::process::exit(1);
    }

    let build = parse_build(path)?;
    let mut engine = RulesEngine::with_default_rules();
    engine.add_rule(Arc::new(GpuNeedsCaseRule));

    let checker = CompatibilityChecker::with_engine(Arc::new(KnowledgeBase::builtin()?), engine);
    let report = checker.run_all_compatibility_checks(&build);

    println!(
        "Custom check found {} issues for {}",
        report.issues.len(),
        path.display()
    );
    for issue in &report.issues {
        println!("  [{}] {} ({})", issue.severity, issue.message, issue.rule_id);
    }

    if !report.compatible {
        std::process::exit(1);
    }
    Ok(())
}
