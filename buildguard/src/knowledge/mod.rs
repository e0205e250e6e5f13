//! Hardware Knowledge Base
//!
//! Static reference tables supplied to the engine at construction time:
//!
//! - **Hardware table**: GPU model → power draw, GPU model → tier,
//!   CPU pattern/keyword → tier.
//! - **Spec display table**: spec keys to hide or highlight, per-category
//!   key specs and category display names. Only the display helpers read it.
//!
//! A [`KnowledgeBase`] is immutable once built. Share it with `Arc` when
//! several checkers need it.
//!
//! # Usage
//!
//! ```rust
//! use buildguard::knowledge::KnowledgeBase;
//!
//! let kb = KnowledgeBase::builtin().unwrap();
//! assert_eq!(kb.gpu_tier("asus geforce rtx 4090 tuf"), Some(10));
//! ```

pub mod builtin;
pub mod schema;

pub use schema::{CpuTierEntry, HardwareTable, SpecDisplayTable};

use regex_lite::Regex;

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {name}: {message}")]
    Parse { name: String, message: String },
    #[error("Invalid CPU tier pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

#[derive(Debug)]
struct CpuTierMatcher {
    pattern: Option<Regex>,
    keyword: Option<String>,
    tier: i32,
}

impl CpuTierMatcher {
    fn matches(&self, name: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(name))
            || self.keyword.as_ref().is_some_and(|kw| name.contains(kw.as_str()))
    }
}

/// Immutable, validated knowledge tables.
#[derive(Debug)]
pub struct KnowledgeBase {
    hardware: HardwareTable,
    display: SpecDisplayTable,
    cpu_tiers: Vec<CpuTierMatcher>,
}

impl KnowledgeBase {
    /// Validate the tables and compile CPU tier patterns.
    pub fn new(hardware: HardwareTable, display: SpecDisplayTable) -> Result<Self, KnowledgeError> {
        let mut hardware = hardware;
        for (model, _) in hardware.gpu_power.iter_mut() {
            *model = model.to_lowercase();
        }
        for (model, _) in hardware.gpu_tiers.iter_mut() {
            *model = model.to_lowercase();
        }

        let mut cpu_tiers = Vec::with_capacity(hardware.cpu_tiers.len());
        for entry in &hardware.cpu_tiers {
            let pattern = match &entry.pattern {
                Some(p) => Some(Regex::new(p).map_err(|e| KnowledgeError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })?),
                None => None,
            };
            if pattern.is_none() && entry.keyword.is_none() {
                tracing::warn!("CPU tier entry (tier {}) has neither pattern nor keyword", entry.tier);
            }
            cpu_tiers.push(CpuTierMatcher {
                pattern,
                keyword: entry.keyword.as_ref().map(|k| k.to_lowercase()),
                tier: entry.tier,
            });
        }

        Ok(Self {
            hardware,
            display,
            cpu_tiers,
        })
    }

    pub fn hardware(&self) -> &HardwareTable {
        &self.hardware
    }

    pub fn display(&self) -> &SpecDisplayTable {
        &self.display
    }

    /// Rated draw of the first GPU model contained in `lower_name`.
    pub fn gpu_power(&self, lower_name: &str) -> Option<u32> {
        self.hardware
            .gpu_power
            .iter()
            .find(|(model, _)| lower_name.contains(model.as_str()))
            .map(|(_, watts)| *watts)
    }

    pub fn gpu_tier(&self, lower_name: &str) -> Option<i32> {
        self.hardware
            .gpu_tiers
            .iter()
            .find(|(model, _)| lower_name.contains(model.as_str()))
            .map(|(_, tier)| *tier)
    }

    pub fn cpu_tier(&self, lower_name: &str) -> Option<i32> {
        self.cpu_tiers
            .iter()
            .find(|m| m.matches(lower_name))
            .map(|m| m.tier)
    }
}
