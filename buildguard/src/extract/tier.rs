//! Relative CPU and GPU performance tiers (higher is more capable).

use crate::knowledge::KnowledgeBase;
use crate::model::ProductRecord;

pub fn cpu_tier(cpu: &ProductRecord, kb: &KnowledgeBase) -> Option<i32> {
    kb.cpu_tier(&cpu.lower_name())
}

pub fn gpu_tier(gpu: &ProductRecord, kb: &KnowledgeBase) -> Option<i32> {
    kb.gpu_tier(&gpu.lower_name())
}
