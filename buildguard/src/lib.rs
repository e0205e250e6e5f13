//! BuildGuard - PC build compatibility checking library
//!
//! This library reads free-form (English and Finnish) product spec sheets,
//! extracts normalized hardware facts and checks a selected set of parts for
//! socket, memory, clearance, form factor and power problems.
//!
//! # Quick Start
//!
//! ```no_run
//! use buildguard::{BuildGuardCore, CheckOptions};
//! use std::path::Path;
//!
//! let report = BuildGuardCore::check_build_file(
//!     Path::new("pc-build.json"),
//!     CheckOptions::default(),
//! ).unwrap();
//!
//! for issue in &report.issues {
//!     println!("{}", issue);
//! }
//! println!("Estimated draw: {}W", report.estimated_power);
//! ```
//!
//! # Features
//!
//! - **Attribute extraction**: sockets, memory type, dimensions, wattage, tiers
//! - **Classification**: what a product actually is, from its name and specs
//! - **Compatibility rules**: ordered, severity-tagged issues
//! - **Power estimate and suggestions**: PSU headroom, bottlenecks, reminders

pub mod analyzer;
pub mod classifier;
pub mod core;
pub mod display;
pub mod extract;
pub mod knowledge;
pub mod model;

// Re-export main types
pub use analyzer::{
    CompatibilityChecker, CompatibilityReport, Issue, PlacementResult, Rule, RuleContext,
    RulesEngine, Severity,
};
pub use classifier::classify;
pub use core::{
    load_knowledge, BuildGuardCore, BuildGuardError, BuildReport, CheckOptions, ReportStats,
};
pub use knowledge::{KnowledgeBase, KnowledgeError};
pub use model::{BuildFile, BuildState, Category, DisplayMode, ProductRecord, SlotId};

/// Parse a build document (convenience wrapper).
pub fn parse_build(path: &std::path::Path) -> Result<BuildState, BuildGuardError> {
    BuildFile::load(path)?.into_state()
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BuildGuardCore, BuildGuardError, BuildReport, BuildState, CheckOptions,
        CompatibilityChecker, DisplayMode, Issue, KnowledgeBase, ProductRecord, Rule,
        RuleContext, Severity, SlotId,
    };
}
