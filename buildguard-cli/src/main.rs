//! BuildGuard CLI - PC build compatibility checks from the command line.

use anyhow::{Context, Result};
use buildguard::display::{category_display_name, spec_summary};
use buildguard::{
    classify, load_knowledge, BuildGuardCore, BuildReport, CheckOptions, DisplayMode,
    ProductRecord, RulesEngine, Severity,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "buildguard")]
#[command(about = "PC build compatibility checker", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an exported build document
    Check {
        /// Path to the build JSON file
        #[arg(value_name = "BUILD")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Exit with error code if issues found at this severity or higher
        #[arg(long, value_enum)]
        fail_on: Option<FailOnSeverity>,

        /// Directory with hardware.json / specs.json overriding the built-in tables
        #[arg(long, value_name = "DIR")]
        knowledge: Option<PathBuf>,

        /// Skip advisory suggestions
        #[arg(long)]
        no_suggestions: bool,
    },

    /// Classify a single product record and show its key specs
    Classify {
        /// Path to a product JSON file ({"name": ..., "specs": {...}})
        #[arg(value_name = "PRODUCT")]
        file: PathBuf,

        /// Spec display mode
        #[arg(short, long, value_enum, default_value = "simple")]
        mode: ModeArg,

        /// Directory with hardware.json / specs.json overriding the built-in tables
        #[arg(long, value_name = "DIR")]
        knowledge: Option<PathBuf>,
    },

    /// List compatibility rules in evaluation order
    Rules,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON report
    Json,
    /// GitHub Actions annotations
    Github,
}

#[derive(Clone, ValueEnum)]
enum FailOnSeverity {
    Critical,
    Warning,
}

#[derive(Clone, ValueEnum)]
enum ModeArg {
    Simple,
    Expert,
}

impl From<ModeArg> for DisplayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => DisplayMode::Simple,
            ModeArg::Expert => DisplayMode::Expert,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            file,
            format,
            fail_on,
            knowledge,
            no_suggestions,
        } => handle_check(&file, format, fail_on, knowledge, no_suggestions),
        Commands::Classify {
            file,
            mode,
            knowledge,
        } => handle_classify(&file, mode.into(), knowledge),
        Commands::Rules => {
            handle_rules(cli.verbose);
            Ok(0)
        }
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn handle_check(
    file: &Path,
    format: OutputFormat,
    fail_on: Option<FailOnSeverity>,
    knowledge: Option<PathBuf>,
    no_suggestions: bool,
) -> Result<i32> {
    let options = CheckOptions {
        knowledge_dir: knowledge,
        include_suggestions: !no_suggestions,
    };
    let report = BuildGuardCore::check_build_file(file, options)
        .with_context(|| format!("Failed to check {}", file.display()))?;

    output_report(&report, file, &format)?;

    if let Some(severity) = fail_on {
        if should_fail(&report, &severity) {
            return Ok(1);
        }
    }
    Ok(0)
}

fn should_fail(report: &BuildReport, severity: &FailOnSeverity) -> bool {
    match severity {
        FailOnSeverity::Critical => report.has_critical(),
        FailOnSeverity::Warning => report.has_warning_or_critical(),
    }
}

fn output_report(report: &BuildReport, file: &Path, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => output_human(report, file),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Github => output_github(report, file),
    }
    Ok(())
}

fn output_human(report: &BuildReport, file: &Path) {
    println!("\nBuild: {}", file.display());
    println!("{}", "─".repeat(60));

    if report.issues.is_empty() {
        println!("  No issues found");
    } else {
        for issue in &report.issues {
            println!("  {}", issue);
        }
    }

    if !report.suggestions.is_empty() {
        println!("\n  Suggestions:");
        for suggestion in &report.suggestions {
            println!("    - {}", suggestion);
        }
    }

    println!("\n  Summary:");
    println!("    Critical:        {}", report.stats.critical);
    println!("    Warning:         {}", report.stats.warning);
    println!("    Estimated power: {}W", report.estimated_power);
    println!(
        "    Compatible:      {}",
        if report.compatible { "yes" } else { "no" }
    );
}

fn severity_to_github(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "error",
        Severity::Warning => "warning",
    }
}

fn output_github(report: &BuildReport, file: &Path) {
    for issue in &report.issues {
        println!(
            "::{} file={}::{}",
            severity_to_github(issue.severity),
            file.display(),
            issue.message.replace('\n', " ")
        );
    }
    for suggestion in &report.suggestions {
        println!("::notice file={}::{}", file.display(), suggestion);
    }
}

fn handle_classify(file: &Path, mode: DisplayMode, knowledge: Option<PathBuf>) -> Result<i32> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let record: ProductRecord = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse product record {}", file.display()))?;
    let kb = load_knowledge(&CheckOptions {
        knowledge_dir: knowledge,
        ..CheckOptions::default()
    })?;

    let category = classify(&record);
    println!("{}", record.name);
    println!(
        "  Category: {} ({})",
        category_display_name(category, kb.display()),
        category
    );
    for (key, value) in spec_summary(&record, mode, kb.display()) {
        println!("  {}: {}", key, value);
    }
    Ok(0)
}

fn handle_rules(verbose: bool) {
    println!("Compatibility rules (evaluation order):\n");

    for info in RulesEngine::with_default_rules().rule_infos() {
        println!("  {}", info.id);
        println!("    {}", info.name);
        if verbose {
            println!("    Severity: {}", info.severity);
        }
        println!();
    }
}
