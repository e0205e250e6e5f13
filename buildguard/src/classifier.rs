//! Category Classifier
//!
//! Decides what a product actually is from its name (and, for memory, power
//! supplies and storage, its spec keys). The decision list is ordered data:
//! the first predicate that accepts the product wins, so the specific
//! categories are tried before the ones with loose name heuristics.
//!
//! ```rust
//! use buildguard::classifier::classify;
//! use buildguard::model::{Category, ProductRecord};
//!
//! let cooler = ProductRecord::new("Noctua NH-D15 CPU Cooler");
//! assert_eq!(classify(&cooler), Category::Cooler);
//! ```

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::extract::{contains_any, is_match, Pattern};
use crate::model::{Category, ProductRecord, Specs};

type Predicate = fn(&str, &Specs) -> bool;

/// Priority-ordered decision list.
pub const DECISION_LIST: &[(Category, Predicate)] = &[
    (Category::Cooler, is_cooler),
    (Category::Cpu, is_cpu),
    (Category::Gpu, is_gpu),
    (Category::Motherboard, is_motherboard),
    (Category::Memory, is_memory),
    (Category::Psu, is_psu),
    (Category::Case, is_case),
    (Category::Storage, is_storage),
];

static INTEL_MODEL: Pattern = Lazy::new(|| Regex::new(r"i[3579]-\d+").ok());
static WATTAGE_IN_NAME: Pattern = Lazy::new(|| Regex::new(r"\d+\s*w\b").ok());
static CAPACITY_IN_NAME: Pattern = Lazy::new(|| Regex::new(r"(?i)\d+\s*(gb|tb)").ok());

const GPU_TERMS: &[&str] = &["geforce", "radeon", "rtx", "gtx", "rx ", "näytönohjain"];
const MOTHERBOARD_TERMS: &[&str] = &["motherboard", "emolevy", "mainboard"];

fn spec_key_matches(specs: &Specs, test: impl Fn(&str) -> bool) -> bool {
    specs.keys().any(|key| test(&key.to_lowercase()))
}

fn is_cooler(name: &str, _: &Specs) -> bool {
    contains_any(name, &["jäähdytin", "cooler", "cooling"])
        || (name.contains("fan") && name.contains("cpu"))
}

fn names_gpu(name: &str) -> bool {
    contains_any(name, GPU_TERMS) || (name.contains("graphics") && !name.contains("integrated"))
}

fn is_cpu(name: &str, _: &Specs) -> bool {
    let explicit = name.contains("processor")
        || (name.contains("prosessori") && !name.contains("prosessorin"))
        || name.contains("cpu")
        || is_match(&INTEL_MODEL, name);
    // Brand words alone also appear on chipsets and graphics cards.
    // Ryzen APUs name their integrated Radeon graphics
    let brand = (name.contains("ryzen") || (name.contains("intel") && !names_gpu(name)))
        && !contains_any(name, MOTHERBOARD_TERMS);
    explicit || brand
}

fn is_gpu(name: &str, _: &Specs) -> bool {
    names_gpu(name)
}

fn is_motherboard(name: &str, _: &Specs) -> bool {
    contains_any(name, MOTHERBOARD_TERMS)
}

fn is_memory(name: &str, specs: &Specs) -> bool {
    let has_ddr = contains_any(name, &["ddr4", "ddr5"]);
    if !has_ddr {
        return false;
    }
    contains_any(name, &["muisti", "memory", "ram", "dimm"])
        || name.contains("kit")
        || spec_key_matches(specs, |key| {
            key.contains("muistityyppi")
                || key.contains("memory type")
                || (key.contains("speed") && key.contains("mhz"))
        })
}

fn is_psu(name: &str, specs: &Specs) -> bool {
    contains_any(name, &["virtalähde", "power supply", "psu"])
        || (is_match(&WATTAGE_IN_NAME, name)
            && contains_any(name, &["modular", "atx", "bronze", "gold", "supply", "unit"]))
        || spec_key_matches(specs, |key| {
            contains_any(key, &["teho", "efficiency", "modular"])
        })
}

fn is_case(name: &str, _: &Specs) -> bool {
    let case_terms = name.contains("kotelo")
        || name.contains("chassis")
        || (name.contains("case") && !name.contains("briefcase") && !name.contains("showcase"));
    let tower = name.contains("tower") && contains_any(name, &["mid", "full", "mini"]);
    let form_factor = name.contains("atx") && !name.contains("power");
    case_terms || tower || form_factor
}

fn is_storage(name: &str, specs: &Specs) -> bool {
    contains_any(name, &["ssd", "hdd", "nvme", "tallennustila", "kiintolevy"])
        || (is_match(&CAPACITY_IN_NAME, name)
            && contains_any(name, &["sata", "m.2", "drive", "storage"]))
        || spec_key_matches(specs, |key| {
            contains_any(key, &["kapasiteetti", "interface", "read speed", "write speed"])
        })
}

/// The category a product actually belongs to; [`Category::Unknown`] when
/// no entry of [`DECISION_LIST`] accepts it.
pub fn classify(record: &ProductRecord) -> Category {
    let name = record.name.to_lowercase();
    let category = DECISION_LIST
        .iter()
        .find(|(_, accepts)| accepts(&name, &record.specs))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Unknown);
    tracing::debug!("Classified {:?} as {}", record.name, category);
    category
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Category {
        classify(&ProductRecord::new(name))
    }

    #[test]
    fn test_priority_order() {
        // cooler before cpu
        assert_eq!(named("Noctua NH-D15 CPU Cooler"), Category::Cooler);
        assert_eq!(named("Arctic Freezer 36 prosessorin jäähdytin"), Category::Cooler);
        assert_eq!(named("Arctic P12 CPU fan"), Category::Cooler);
        assert_eq!(named("AMD Ryzen 7 7800X3D prosessori"), Category::Cpu);
        assert_eq!(named("Intel Core i5-14600K"), Category::Cpu);
        assert_eq!(named("AMD Ryzen 5 8600G with Radeon Graphics"), Category::Cpu);
        assert_eq!(named("ASUS GeForce RTX 4070 DUAL"), Category::Gpu);
        assert_eq!(named("Sapphire Pulse RX 7800 XT"), Category::Gpu);
        assert_eq!(named("MSI MAG B650 TOMAHAWK WIFI ATX emolevy"), Category::Motherboard);
    }

    #[test]
    fn test_brand_words_do_not_override_other_categories() {
        assert_eq!(named("Intel Arc A770 graphics card"), Category::Gpu);
        assert_eq!(named("ASRock B760M Pro RS Intel emolevy"), Category::Motherboard);
    }

    #[test]
    fn test_memory_needs_ddr_and_context() {
        assert_eq!(named("Kingston FURY Beast 32GB (2 x 16GB) DDR5 muisti"), Category::Memory);
        assert_eq!(named("Corsair Vengeance DDR4 kit"), Category::Memory);
        let by_spec = ProductRecord::new("G.Skill Trident Z5 DDR5-6000")
            .with_spec("Muistityyppi", "DDR5");
        assert_eq!(classify(&by_spec), Category::Memory);
        assert_eq!(named("Random Access Thing 32GB"), Category::Unknown);
    }

    #[test]
    fn test_psu_case_storage() {
        assert_eq!(named("Corsair RM850x virtalähde"), Category::Psu);
        assert_eq!(named("Seasonic Focus GX-750 750W Gold"), Category::Psu);
        let by_spec = ProductRecord::new("Seasonic Prime").with_spec("Hyötysuhde (efficiency)", "94 %");
        assert_eq!(classify(&by_spec), Category::Psu);
        assert_eq!(named("Fractal Design North kotelo"), Category::Case);
        assert_eq!(named("NZXT H5 Flow Mid Tower"), Category::Case);
        assert_eq!(named("Lian Li A3 mATX"), Category::Case);
        assert_eq!(named("Samsung 990 PRO 2TB NVMe"), Category::Storage);
        assert_eq!(named("Seagate BarraCuda 4TB SATA drive"), Category::Storage);
        let by_spec = ProductRecord::new("WD Blue").with_spec("Kapasiteetti", "1 TB");
        assert_eq!(classify(&by_spec), Category::Storage);
    }

    #[test]
    fn test_unknown_and_stable() {
        let record = ProductRecord::new("Logitech G502 hiiri");
        assert_eq!(classify(&record), Category::Unknown);
        assert_eq!(classify(&record), classify(&record));
        assert_eq!(named(""), Category::Unknown);
    }
}
