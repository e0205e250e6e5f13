//! Exported build documents (`pc-build-<date>.json`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::build::BuildState;
use super::product::{Category, ProductRecord, Specs};
use super::slot::SlotId;
use crate::core::BuildGuardError;

pub const BUILD_FILE_VERSION: &str = "1.0";

/// Display mode stored alongside an exported build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Simple,
    Expert,
}

/// One placed component in a build document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEntry {
    #[serde(rename = "type")]
    pub slot: String,
    pub name: String,
    #[serde(default)]
    pub product_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub specs: Specs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildFile {
    pub components: Vec<BuildEntry>,
    #[serde(default)]
    pub mode: DisplayMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    BUILD_FILE_VERSION.to_string()
}

impl BuildFile {
    /// Snapshot a build for export.
    pub fn from_state(build: &BuildState, mode: DisplayMode) -> Self {
        let components = build
            .iter()
            .map(|(slot, record)| BuildEntry {
                slot: slot.to_string(),
                name: record.name.clone(),
                product_code: record.product_code.clone(),
                category: record.category,
                specs: record.specs.clone(),
            })
            .collect();
        Self {
            components,
            mode,
            export_date: Some(Utc::now()),
            version: BUILD_FILE_VERSION.to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, BuildGuardError> {
        serde_json::from_str(json).map_err(|e| BuildGuardError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, BuildGuardError> {
        let content = std::fs::read_to_string(path)?;
        let file = Self::from_json(&content)?;
        if file.version != BUILD_FILE_VERSION {
            tracing::warn!(
                "Build file {} has version {}, expected {}",
                path.display(),
                file.version,
                BUILD_FILE_VERSION
            );
        }
        Ok(file)
    }

    pub fn to_json_pretty(&self) -> Result<String, BuildGuardError> {
        serde_json::to_string_pretty(self).map_err(|e| BuildGuardError::Other(e.to_string()))
    }

    /// Rebuild the slot map. Unknown slot types are rejected.
    pub fn into_state(self) -> Result<BuildState, BuildGuardError> {
        let mut build = BuildState::new();
        for entry in self.components {
            let slot: SlotId = entry.slot.parse()?;
            let record = ProductRecord {
                name: entry.name,
                product_code: entry.product_code,
                category: entry.category,
                specs: entry.specs,
            };
            if build.insert(slot, record).is_some() {
                tracing::warn!("Duplicate entry for slot {}, keeping the last one", slot);
            }
        }
        Ok(build)
    }
}
