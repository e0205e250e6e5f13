//! System power estimate.

use crate::extract::{component_tdp, gpu_power, total_memory_sticks};
use crate::knowledge::KnowledgeBase;
use crate::model::BuildState;

pub const DEFAULT_CPU_W: u32 = 65;
pub const DEFAULT_GPU_W: u32 = 150;
pub const MEMORY_STICK_W: u32 = 5;
pub const STORAGE_DEVICE_W: u32 = 5;
pub const COOLER_W: u32 = 10;
/// Motherboard, fans and the rest of the platform.
pub const BASELINE_W: u32 = 50;

/// Additive estimate in watts. Defaults apply only to parts that are present
/// but whose draw cannot be read; absent slots add nothing.
pub fn estimate_system_power(build: &BuildState, kb: &KnowledgeBase) -> u32 {
    if build.is_empty() {
        return 0;
    }
    let mut total = BASELINE_W;

    if let Some(cpu) = build.cpu() {
        total = total.saturating_add(component_tdp(cpu).unwrap_or(DEFAULT_CPU_W));
    }
    if let Some(gpu) = build.gpu() {
        total = total.saturating_add(gpu_power(gpu, kb).unwrap_or(DEFAULT_GPU_W));
    }

    let sticks = total_memory_sticks(&build.memory_modules());
    total = total.saturating_add(sticks.saturating_mul(MEMORY_STICK_W));

    let storage = u32::try_from(build.storage_devices().len()).unwrap_or(u32::MAX);
    total = total.saturating_add(storage.saturating_mul(STORAGE_DEVICE_W));

    if build.cooler().is_some() {
        total = total.saturating_add(COOLER_W);
    }
    total
}
