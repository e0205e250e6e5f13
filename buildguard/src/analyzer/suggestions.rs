//! Advisory suggestions.
//!
//! Runs alongside the rule set and may restate what a rule already reported;
//! suggestions never affect `compatible`.

use super::power::estimate_system_power;
use crate::extract::{
    cpu_includes_cooler, cpu_memory_type, cpu_supports_fast_memory, cpu_tier, gpu_tier,
    memory_speed, memory_stick_count, memory_type, motherboard_memory_slots, psu_wattage,
    MemoryType,
};
use crate::knowledge::KnowledgeBase;
use crate::model::{BuildState, ProductRecord, SlotId};

/// Tier difference that counts as a bottleneck.
pub const BOTTLENECK_TIER_GAP: i32 = 3;
/// Slowest memory speed not worth flagging on recent platforms.
pub const FAST_MEMORY_MHZ: u32 = 3200;
pub const PSU_NEAR_MAX_RATIO: f64 = 0.9;
pub const PSU_OVERSIZED_RATIO: f64 = 0.4;

fn stick_overcommit(memory: &ProductRecord, motherboard: &ProductRecord) -> Option<String> {
    let sticks = memory_stick_count(memory);
    let slots = motherboard_memory_slots(motherboard);
    (sticks > slots).then(|| {
        format!(
            "VAROITUS: Muistikampoja on {} kpl, mutta emolevyssä on vain {} paikkaa.",
            sticks, slots
        )
    })
}

fn memory_type_advice(cpu: &ProductRecord, memory: &ProductRecord) -> Option<String> {
    let supported = cpu_memory_type(cpu)?;
    let actual = memory_type(memory)?;
    if supported == actual {
        return None;
    }
    let text = match supported {
        MemoryType::Ddr4 => "Muisti on DDR5, mutta prosessori tukee vain DDR4. Valitse DDR4-muisti.",
        MemoryType::Ddr5 => "Muisti on DDR4, mutta prosessori tukee vain DDR5. Valitse DDR5-muisti.",
    };
    Some(format!("KRIITTINEN: {text}"))
}

/// Directional bottleneck hint when CPU and GPU tiers are far apart.
pub fn analyze_bottleneck(cpu: &ProductRecord, gpu: &ProductRecord, kb: &KnowledgeBase) -> Option<String> {
    let diff = cpu_tier(cpu, kb)? - gpu_tier(gpu, kb)?;
    if diff >= BOTTLENECK_TIER_GAP {
        Some("Prosessori on selvästi tehokkaampi kuin näytönohjain. Tehokkaampi GPU parantaisi pelisuorituskykyä.".to_string())
    } else if diff <= -BOTTLENECK_TIER_GAP {
        Some("Näytönohjain on selvästi tehokkaampi kuin prosessori. CPU voi pullonkaulata GPU:n suorituskykyä.".to_string())
    } else {
        None
    }
}

fn memory_speed_advice(cpu: &ProductRecord, memory: &ProductRecord) -> Option<String> {
    if !cpu_supports_fast_memory(cpu) {
        return None;
    }
    match memory_speed(memory) {
        Some(speed) if speed >= FAST_MEMORY_MHZ => None,
        _ => Some(
            "SUOSITUS: Harkitse nopeampaa muistia (DDR4-3200 tai nopeampi) parempaan suorituskykyyn."
                .to_string(),
        ),
    }
}

fn psu_headroom_advice(psu: &ProductRecord, draw: u32) -> Option<String> {
    let wattage = psu_wattage(psu)?;
    if wattage == 0 || draw == 0 {
        return None;
    }
    let ratio = f64::from(draw) / f64::from(wattage);
    if ratio > PSU_NEAR_MAX_RATIO {
        Some("VAROITUS: Virtalähde on lähellä maksimitehoaan. Harkitse tehokkaampaa virtalähdettä.".to_string())
    } else if ratio < PSU_OVERSIZED_RATIO {
        Some("HUOMIO: Virtalähde on ylimitoitettu. Pienempi virtalähde olisi energiatehokkaampi.".to_string())
    } else {
        None
    }
}

/// Ordered advisory pass over the build.
pub fn generate_suggestions(build: &BuildState, kb: &KnowledgeBase) -> Vec<String> {
    let mut suggestions = Vec::new();
    let cpu = build.cpu();
    let gpu = build.gpu();
    let memory = build.get(&SlotId::MEMORY);

    if let (Some(memory), Some(motherboard)) = (memory, build.motherboard()) {
        suggestions.extend(stick_overcommit(memory, motherboard));
    }
    if let (Some(cpu), Some(memory)) = (cpu, memory) {
        suggestions.extend(memory_type_advice(cpu, memory));
    }
    if let (Some(cpu), Some(gpu)) = (cpu, gpu) {
        suggestions.extend(analyze_bottleneck(cpu, gpu, kb));
    }
    if let (Some(cpu), Some(memory)) = (cpu, memory) {
        suggestions.extend(memory_speed_advice(cpu, memory));
    }
    if let (Some(psu), Some(_)) = (build.psu(), gpu) {
        suggestions.extend(psu_headroom_advice(psu, estimate_system_power(build, kb)));
    }
    if let Some(cpu) = cpu {
        if build.cooler().is_none() && !cpu_includes_cooler(cpu) {
            suggestions.push("TÄRKEÄÄ: Prosessori tarvitsee erillisen jäähdyttimen!".to_string());
        }
    }
    if build.storage_devices().is_empty() {
        suggestions.push("MUISTUTUS: Järjestelmä tarvitsee tallennustilan (SSD/HDD).".to_string());
    }

    tracing::debug!("Generated {} suggestion(s)", suggestions.len());
    suggestions
}
