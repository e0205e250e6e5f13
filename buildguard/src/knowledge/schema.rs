//! Knowledge base table formats.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Model → power draw / tier lookups (`hardware.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareTable {
    /// `[model substring, watts]`, first match wins.
    #[serde(default)]
    pub gpu_power: Vec<(String, u32)>,
    /// `[model substring, tier]`, first match wins.
    #[serde(default)]
    pub gpu_tiers: Vec<(String, i32)>,
    #[serde(default)]
    pub cpu_tiers: Vec<CpuTierEntry>,
}

/// CPU tier row. Matches when `pattern` matches or `keyword` is contained
/// in the lower-cased product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuTierEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub tier: i32,
}

/// Spec filtering and display table (`specs.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDisplayTable {
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    #[serde(default)]
    pub important_spec_keys: Vec<String>,
    #[serde(default)]
    pub category_key_specs: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub category_display_names: BTreeMap<String, String>,
}
