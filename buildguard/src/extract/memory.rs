//! Memory type, stick count, slot count and speed extraction.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{capture_u32, contains_any, find_spec, find_spec_by_keys, is_match, synonyms, Pattern};
use crate::model::ProductRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryType {
    #[serde(rename = "DDR4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    Ddr5,
}

impl MemoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryType::Ddr4 => "DDR4",
            MemoryType::Ddr5 => "DDR5",
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static DDR_TOKEN: Pattern = Lazy::new(|| Regex::new(r"(?i)(DDR[45])").ok());
static STICKS_TIMES_SIZE: Pattern = Lazy::new(|| Regex::new(r"(\d+)\s*x\s*\d+\s*(gb|mb)").ok());
static STICK_COUNT: Pattern = Lazy::new(|| Regex::new(r"(\d+)\s*(kpl|pieces|sticks)").ok());
static FIRST_NUMBER: Pattern = Lazy::new(|| Regex::new(r"(\d+)").ok());
static DDR_GENERATION: Pattern = Lazy::new(|| Regex::new(r"ddr\d").ok());
static SPEED: Pattern = Lazy::new(|| Regex::new(r"(?i)(\d{3,5})\s*(mhz|mt/s)").ok());
static NAME_DDR_SPEED: Pattern = Lazy::new(|| Regex::new(r"ddr[45][- ]?(\d{4})").ok());
static INTEL_GEN_10_11: Pattern = Lazy::new(|| Regex::new(r"i[3579]-1[01]").ok());
static INTEL_GEN_11_15: Pattern = Lazy::new(|| Regex::new(r"i[3579]-1[1-5]").ok());
static INTEL_GEN_12_14: Pattern = Lazy::new(|| Regex::new(r"i[3579]-1[234]").ok());
static RYZEN_7000_9000: Pattern = Lazy::new(|| Regex::new(r"[79]\d{3}").ok());

/// `DDR5` before `DDR4` in a lower-cased text.
fn ddr_in_lowercase(text: &str) -> Option<MemoryType> {
    if text.contains("ddr5") {
        Some(MemoryType::Ddr5)
    } else if text.contains("ddr4") {
        Some(MemoryType::Ddr4)
    } else {
        None
    }
}

fn ddr_token(value: &str) -> Option<MemoryType> {
    let caps = super::compiled(&DDR_TOKEN)?.captures(value)?;
    ddr_in_lowercase(&caps.get(1)?.as_str().to_lowercase())
}

pub fn motherboard_memory_type(motherboard: &ProductRecord) -> Option<MemoryType> {
    find_spec_by_keys(motherboard, synonyms::MOTHERBOARD_MEMORY_TYPE, ddr_token)
}

/// Memory module type from any spec value, then from the name.
pub fn memory_type(memory: &ProductRecord) -> Option<MemoryType> {
    memory
        .specs
        .values()
        .find_map(|v| ddr_in_lowercase(&v.to_lowercase()))
        .or_else(|| ddr_in_lowercase(&memory.lower_name()))
}

/// One row of the CPU model-family memory table.
///
/// `memory: None` marks a family whose support cannot be decided from the
/// name alone; lookup stops there and the fact stays absent.
pub struct MemoryFamily {
    pub family: &'static str,
    pub matches: fn(&str) -> bool,
    pub memory: Option<MemoryType>,
}

fn is_intel_gen_12_to_14(name: &str) -> bool {
    is_match(&INTEL_GEN_12_14, name)
}

fn is_core_ultra(name: &str) -> bool {
    name.contains("core ultra")
}

fn is_ryzen_7000_or_9000(name: &str) -> bool {
    name.contains("ryzen") && is_match(&RYZEN_7000_9000, name)
}

fn is_ddr4_generation(name: &str) -> bool {
    name.contains("ryzen 5000") || name.contains("ryzen 3000") || is_match(&INTEL_GEN_10_11, name)
}

/// Evaluated top to bottom against the lower-cased CPU name.
pub static CPU_MEMORY_FAMILIES: &[MemoryFamily] = &[
    MemoryFamily {
        family: "Intel Core 12th-14th gen",
        matches: is_intel_gen_12_to_14,
        memory: None,
    },
    MemoryFamily {
        family: "Intel Core Ultra",
        matches: is_core_ultra,
        memory: Some(MemoryType::Ddr5),
    },
    MemoryFamily {
        family: "AMD Ryzen 7000/9000",
        matches: is_ryzen_7000_or_9000,
        memory: Some(MemoryType::Ddr5),
    },
    MemoryFamily {
        family: "AMD Ryzen 3000/5000, Intel Core 10th-11th gen",
        matches: is_ddr4_generation,
        memory: Some(MemoryType::Ddr4),
    },
];

/// Memory type a CPU supports: explicit spec, else the family table.
pub fn cpu_memory_type(cpu: &ProductRecord) -> Option<MemoryType> {
    if let Some(found) = find_spec_by_keys(cpu, synonyms::CPU_MEMORY_TYPE, |v| {
        ddr_in_lowercase(&v.to_lowercase())
    }) {
        return Some(found);
    }

    let name = cpu.lower_name();
    CPU_MEMORY_FAMILIES
        .iter()
        .find(|row| (row.matches)(&name))
        .and_then(|row| row.memory)
}

/// Whether the CPU generation benefits from DDR4-3200 or faster memory.
pub fn cpu_supports_fast_memory(cpu: &ProductRecord) -> bool {
    let name = cpu.lower_name();
    is_match(&INTEL_GEN_11_15, &name)
        || contains_any(&name, &["core ultra", "ryzen 5000", "ryzen 7000", "ryzen 9000"])
}

/// Sticks in a memory product. Defaults to 1.
pub fn memory_stick_count(memory: &ProductRecord) -> u32 {
    let from_specs = memory.specs.values().find_map(|value| {
        let v = value.to_lowercase();
        capture_u32(&STICKS_TIMES_SIZE, &v).or_else(|| capture_u32(&STICK_COUNT, &v))
    });
    if let Some(count) = from_specs.filter(|n| *n > 0) {
        return count;
    }

    let name = memory.lower_name();
    if let Some(count) = capture_u32(&STICKS_TIMES_SIZE, &name).filter(|n| *n > 0) {
        return count;
    }
    // "Dual Rank" on a single module is not a stick count
    if contains_any(&name, &["kit", "setti"]) {
        if contains_any(&name, &["dual", "2x"]) {
            return 2;
        }
        if contains_any(&name, &["quad", "4x"]) {
            return 4;
        }
    }
    1
}

/// Sticks across all memory instances, saturating on absurd counts.
pub fn total_memory_sticks(modules: &[&ProductRecord]) -> u32 {
    modules
        .iter()
        .fold(0u32, |total, module| total.saturating_add(memory_stick_count(module)))
}

fn slot_number(value: &str) -> Option<u32> {
    let lower = value.to_lowercase();
    // "DDR5, 4 paikkaa": the generation digit is not a slot count
    let cleaned = match super::compiled(&DDR_GENERATION) {
        Some(re) => re.replace_all(&lower, " ").into_owned(),
        None => lower,
    };
    capture_u32(&FIRST_NUMBER, &cleaned).filter(|n| *n > 0)
}

/// DIMM slots on a motherboard. Mini-ITX boards default to 2, others to 4.
pub fn motherboard_memory_slots(motherboard: &ProductRecord) -> u32 {
    let from_specs = find_spec(
        motherboard,
        |key| {
            contains_any(key, synonyms::MEMORY_SLOTS)
                || (key.contains(synonyms::DIMM) && !key.contains(synonyms::SO_DIMM))
        },
        slot_number,
    );
    if let Some(slots) = from_specs {
        return slots;
    }

    let name = motherboard.lower_name();
    if contains_any(&name, &["mini-itx", "mitx"]) {
        2
    } else {
        4
    }
}

/// Rated speed in MHz (or MT/s).
pub fn memory_speed(memory: &ProductRecord) -> Option<u32> {
    memory
        .specs
        .values()
        .find_map(|v| capture_u32(&SPEED, v))
        .or_else(|| {
            let name = memory.lower_name();
            capture_u32(&SPEED, &name).or_else(|| capture_u32(&NAME_DDR_SPEED, &name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_type_sources() {
        let kit = ProductRecord::new("Kingston FURY 32GB").with_spec("Tyyppi", "DDR5 SDRAM");
        assert_eq!(memory_type(&kit), Some(MemoryType::Ddr5));
        let by_name = ProductRecord::new("Corsair Vengeance LPX DDR4 16GB");
        assert_eq!(memory_type(&by_name), Some(MemoryType::Ddr4));
        assert_eq!(memory_type(&ProductRecord::new("RAM")), None);
    }

    #[test]
    fn test_motherboard_memory_type() {
        let board = ProductRecord::new("ASUS PRIME B650M-A emolevy")
            .with_spec("Tuettu muistityyppi", "DDR5-6400 (OC)");
        assert_eq!(motherboard_memory_type(&board), Some(MemoryType::Ddr5));
        let no_key = ProductRecord::new("ASUS PRIME B650M-A DDR5 emolevy");
        assert_eq!(motherboard_memory_type(&no_key), None);
    }

    #[test]
    fn test_cpu_memory_explicit_spec_wins() {
        let cpu = ProductRecord::new("Intel Core i5-13400F")
            .with_spec("Prosessorin tukemat muistityypit", "DDR4-3200, DDR5-4800");
        assert_eq!(cpu_memory_type(&cpu), Some(MemoryType::Ddr5));
    }

    #[test]
    fn test_cpu_memory_family_table() {
        let cases = [
            ("Intel Core i5-12400F", None),
            ("Intel Core i7-14700K", None),
            ("Intel Core Ultra 7 265K", Some(MemoryType::Ddr5)),
            ("AMD Ryzen 7 7800X3D", Some(MemoryType::Ddr5)),
            ("AMD Ryzen 9 9950X", Some(MemoryType::Ddr5)),
            ("AMD Ryzen 5000 series 5600", Some(MemoryType::Ddr4)),
            ("Intel Core i7-11700K", Some(MemoryType::Ddr4)),
            ("Intel Core i9-10900K", Some(MemoryType::Ddr4)),
            ("AMD Ryzen 5 5600X", None),
        ];
        for (name, expected) in cases {
            assert_eq!(cpu_memory_type(&ProductRecord::new(name)), expected, "{name}");
        }
    }

    #[test]
    fn test_fast_memory_generations() {
        assert!(cpu_supports_fast_memory(&ProductRecord::new("Intel Core i5-11400")));
        assert!(cpu_supports_fast_memory(&ProductRecord::new("Intel Core Ultra 5 245K")));
        assert!(!cpu_supports_fast_memory(&ProductRecord::new("Intel Core i5-10400")));
        assert!(!cpu_supports_fast_memory(&ProductRecord::new("AMD Ryzen 5 3600")));
    }

    #[test]
    fn test_stick_count() {
        let spec = ProductRecord::new("Kit").with_spec("Kokoonpano", "2 x 16GB");
        assert_eq!(memory_stick_count(&spec), 2);
        let pieces = ProductRecord::new("Kit").with_spec("Moduuleja", "4 kpl");
        assert_eq!(memory_stick_count(&pieces), 4);
        let name = ProductRecord::new("G.Skill Trident Z5 64GB (2x32GB) DDR5");
        assert_eq!(memory_stick_count(&name), 2);
        let quad = ProductRecord::new("Corsair Quad Channel Kit DDR4");
        assert_eq!(memory_stick_count(&quad), 4);
        assert_eq!(memory_stick_count(&ProductRecord::new("Crucial 16GB DDR4")), 1);
        let dual_setti = ProductRecord::new("Kingston Dual muistisetti DDR4");
        assert_eq!(memory_stick_count(&dual_setti), 2);
    }

    #[test]
    fn test_dual_rank_single_module_is_one_stick() {
        let module = ProductRecord::new("Kingston FURY Beast 32GB DDR5 Dual Rank muisti");
        assert_eq!(memory_stick_count(&module), 1);
        let quad_rank = ProductRecord::new("Samsung 64GB DDR5 RDIMM Quad Rank");
        assert_eq!(memory_stick_count(&quad_rank), 1);
    }

    #[test]
    fn test_total_sticks_saturates() {
        let huge = ProductRecord::new("Muisti").with_spec("Kokoonpano", "999999999 x 16GB");
        assert_eq!(memory_stick_count(&huge), 999_999_999);
        let modules = vec![&huge, &huge, &huge, &huge, &huge];
        assert_eq!(total_memory_sticks(&modules), u32::MAX);
        assert_eq!(total_memory_sticks(&[]), 0);
    }

    #[test]
    fn test_slot_count() {
        let explicit = ProductRecord::new("Board").with_spec("Muistipaikat", "4 x DIMM");
        assert_eq!(motherboard_memory_slots(&explicit), 4);
        let ddr_first = ProductRecord::new("Board").with_spec("DIMM slots", "DDR5, 2");
        assert_eq!(motherboard_memory_slots(&ddr_first), 2);
        let laptop_style = ProductRecord::new("Board").with_spec("SO-DIMM", "2");
        assert_eq!(motherboard_memory_slots(&laptop_style), 4);
        let itx = ProductRecord::new("ASUS ROG STRIX B650E-I Mini-ITX emolevy");
        assert_eq!(motherboard_memory_slots(&itx), 2);
    }

    #[test]
    fn test_speed() {
        let spec = ProductRecord::new("Kit").with_spec("Nopeus", "6000 MHz");
        assert_eq!(memory_speed(&spec), Some(6000));
        let mts = ProductRecord::new("Kit").with_spec("Speed", "5600 MT/s");
        assert_eq!(memory_speed(&mts), Some(5600));
        let name = ProductRecord::new("Kingston FURY Beast DDR4-3200 16GB");
        assert_eq!(memory_speed(&name), Some(3200));
        assert_eq!(memory_speed(&ProductRecord::new("Kingston 16GB DDR4")), None);
    }
}
