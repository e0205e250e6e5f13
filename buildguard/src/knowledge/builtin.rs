//! Built-in and External Knowledge Tables
//!
//! Tables are loaded from:
//! 1. `hardware.json` / `specs.json` in a user-supplied directory
//! 2. Embedded copies compiled into the binary (fallback)
//!
//! Users can extend the GPU and CPU tables by editing the JSON files without
//! recompiling.

use std::path::Path;

use super::schema::{HardwareTable, SpecDisplayTable};
use super::{KnowledgeBase, KnowledgeError};

pub const HARDWARE_FILE: &str = "hardware.json";
pub const SPECS_FILE: &str = "specs.json";

const EMBEDDED_HARDWARE: &str = include_str!("../../knowledge/hardware.json");
const EMBEDDED_SPECS: &str = include_str!("../../knowledge/specs.json");

fn parse<T: serde::de::DeserializeOwned>(name: &str, json: &str) -> Result<T, KnowledgeError> {
    serde_json::from_str(json).map_err(|e| KnowledgeError::Parse {
        name: name.to_string(),
        message: e.to_string(),
    })
}

pub fn embedded_hardware() -> Result<HardwareTable, KnowledgeError> {
    parse(HARDWARE_FILE, EMBEDDED_HARDWARE)
}

pub fn embedded_specs() -> Result<SpecDisplayTable, KnowledgeError> {
    parse(SPECS_FILE, EMBEDDED_SPECS)
}

/// Read one table from `dir`, or `None` when the file does not exist.
fn load_table<T: serde::de::DeserializeOwned>(
    dir: &Path,
    file: &str,
) -> Result<Option<T>, KnowledgeError> {
    let path = dir.join(file);
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path).map_err(|source| KnowledgeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = parse(&path.display().to_string(), &content)?;
    tracing::info!("Loaded knowledge table from {:?}", path);
    Ok(Some(table))
}

impl KnowledgeBase {
    /// Knowledge base built from the embedded tables.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::new(embedded_hardware()?, embedded_specs()?)
    }

    /// Load tables from `dir`, falling back to the embedded copy for any
    /// table file that is missing. A file that exists but fails to parse is
    /// an error.
    pub fn from_dir(dir: &Path) -> Result<Self, KnowledgeError> {
        if !dir.is_dir() {
            tracing::warn!("Knowledge directory {:?} not found, using built-in tables", dir);
            return Self::builtin();
        }

        let hardware = match load_table(dir, HARDWARE_FILE)? {
            Some(table) => table,
            None => {
                tracing::info!("No {} in {:?}, using built-in table", HARDWARE_FILE, dir);
                embedded_hardware()?
            }
        };
        let display = match load_table(dir, SPECS_FILE)? {
            Some(table) => table,
            None => {
                tracing::info!("No {} in {:?}, using built-in table", SPECS_FILE, dir);
                embedded_specs()?
            }
        };

        let kb = Self::new(hardware, display)?;
        tracing::info!(
            "Knowledge base ready: {} GPU power entries, {} GPU tiers, {} CPU tiers",
            kb.hardware().gpu_power.len(),
            kb.hardware().gpu_tiers.len(),
            kb.hardware().cpu_tiers.len()
        );
        Ok(kb)
    }
}
