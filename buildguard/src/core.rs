//! Core check logic shared by the CLI and library callers.
//! Loading happens here; everything below it is pure.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analyzer::{CompatibilityChecker, Issue, Severity};
use crate::knowledge::{KnowledgeBase, KnowledgeError};
use crate::model::{BuildFile, BuildState, InvalidSlot};

#[derive(Debug, thiserror::Error)]
pub enum BuildGuardError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    InvalidSlot(#[from] InvalidSlot),
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),
    #[error("{0}")]
    Other(String),
}

/// Options for a check run.
#[derive(Clone, Debug)]
pub struct CheckOptions {
    /// Directory holding `hardware.json` / `specs.json`; built-in tables
    /// when unset.
    pub knowledge_dir: Option<PathBuf>,
    pub include_suggestions: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            knowledge_dir: None,
            include_suggestions: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    pub critical: usize,
    pub warning: usize,
    pub suggestions: usize,
}

/// Issues, suggestions and power estimate for one build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
    pub estimated_power: u32,
    pub compatible: bool,
    pub stats: ReportStats,
}

impl BuildReport {
    pub fn has_critical(&self) -> bool {
        self.stats.critical > 0
    }

    pub fn has_warning_or_critical(&self) -> bool {
        self.stats.critical > 0 || self.stats.warning > 0
    }

    pub fn total_issues(&self) -> usize {
        self.stats.critical + self.stats.warning
    }
}

fn issues_to_stats(issues: &[Issue], suggestions: &[String]) -> ReportStats {
    let mut stats = ReportStats {
        suggestions: suggestions.len(),
        ..ReportStats::default()
    };
    for issue in issues {
        match issue.severity {
            Severity::Critical => stats.critical += 1,
            Severity::Warning => stats.warning += 1,
        }
    }
    stats
}

/// Knowledge base for `options`: the configured directory, else built-in.
pub fn load_knowledge(options: &CheckOptions) -> Result<KnowledgeBase, BuildGuardError> {
    let kb = match &options.knowledge_dir {
        Some(dir) => KnowledgeBase::from_dir(dir)?,
        None => KnowledgeBase::builtin()?,
    };
    Ok(kb)
}

/// Core check API used by the CLI.
pub struct BuildGuardCore;

impl BuildGuardCore {
    /// Check an in-memory build.
    pub fn check_build(
        build: &BuildState,
        options: CheckOptions,
    ) -> Result<BuildReport, BuildGuardError> {
        let knowledge = Arc::new(load_knowledge(&options)?);
        let checker = CompatibilityChecker::new(knowledge);
        Ok(Self::check_with(&checker, build, &options))
    }

    /// Load an exported build document and check it.
    pub fn check_build_file(
        path: &Path,
        options: CheckOptions,
    ) -> Result<BuildReport, BuildGuardError> {
        let build = BuildFile::load(path)?.into_state()?;
        tracing::info!("Loaded {} component(s) from {:?}", build.len(), path);
        let mut report = Self::check_build(&build, options)?;
        report.file = Some(path.to_path_buf());
        Ok(report)
    }

    /// Check with an existing checker, so callers can reuse one knowledge
    /// base across many builds.
    pub fn check_with(
        checker: &CompatibilityChecker,
        build: &BuildState,
        options: &CheckOptions,
    ) -> BuildReport {
        let compat = checker.run_all_compatibility_checks(build);
        let suggestions = if options.include_suggestions {
            checker.generate_suggestions(build)
        } else {
            Vec::new()
        };
        let stats = issues_to_stats(&compat.issues, &suggestions);
        BuildReport {
            file: None,
            issues: compat.issues,
            suggestions,
            estimated_power: compat.estimated_power,
            compatible: compat.compatible,
            stats,
        }
    }
}
