//! Power supply rating and component power draw.

use super::{capture_u32, contains_any, find_spec, find_spec_by_keys, synonyms, WATTS};
use crate::knowledge::KnowledgeBase;
use crate::model::ProductRecord;

/// Anything at or above this is a PSU rating, not a component's own draw.
const COMPONENT_DRAW_LIMIT_W: u32 = 500;

/// Rated output of a power supply.
pub fn psu_wattage(psu: &ProductRecord) -> Option<u32> {
    find_spec_by_keys(psu, synonyms::PSU_WATTAGE, |v| capture_u32(&WATTS, v))
        .or_else(|| capture_u32(&WATTS, &psu.lower_name()))
}

/// Thermal design power of a component.
///
/// An explicit TDP key wins. Otherwise any power-like key below 500 W that
/// does not describe a power supply is accepted.
pub fn component_tdp(component: &ProductRecord) -> Option<u32> {
    find_spec_by_keys(component, synonyms::TDP, |v| capture_u32(&WATTS, v)).or_else(|| {
        find_spec(
            component,
            |key| contains_any(key, synonyms::POWER_LIKE) && !contains_any(key, synonyms::PSU_OUTPUT),
            |v| capture_u32(&WATTS, v).filter(|w| *w < COMPONENT_DRAW_LIMIT_W),
        )
    })
}

/// Board power of a graphics card: spec sheet first, then the model table.
pub fn gpu_power(gpu: &ProductRecord, kb: &KnowledgeBase) -> Option<u32> {
    find_spec_by_keys(gpu, synonyms::GPU_POWER, |v| capture_u32(&WATTS, v))
        .or_else(|| kb.gpu_power(&gpu.lower_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_psu_wattage() {
        let psu = ProductRecord::new("Corsair RM850x").with_spec("Teho", "850 W");
        assert_eq!(psu_wattage(&psu), Some(850));
        let by_name = ProductRecord::new("be quiet! Pure Power 12 M 750W ATX 3.0");
        assert_eq!(psu_wattage(&by_name), Some(750));
        assert_eq!(psu_wattage(&ProductRecord::new("Seasonic Focus")), None);
    }

    #[test]
    fn test_tdp_prefers_explicit_key() {
        let cpu = ProductRecord::new("CPU")
            .with_spec("Maksimiteho", "253 W")
            .with_spec("TDP", "125 W");
        assert_eq!(component_tdp(&cpu), Some(125));
    }

    #[test]
    fn test_tdp_ignores_psu_ratings() {
        let psu_like = ProductRecord::new("Thing")
            .with_spec("Power supply output", "300 W")
            .with_spec("Power", "750 W");
        assert_eq!(component_tdp(&psu_like), None);
        let draw = ProductRecord::new("CPU").with_spec("Power draw", "88 W");
        assert_eq!(component_tdp(&draw), Some(88));
    }

    #[test]
    fn test_gpu_power_spec_then_table() {
        let kb = KnowledgeBase::builtin().unwrap();
        let spec = ProductRecord::new("ASUS GeForce RTX 4070").with_spec("TGP", "215 W");
        assert_eq!(gpu_power(&spec, &kb), Some(215));
        let table = ProductRecord::new("ASUS GeForce RTX 4070 DUAL");
        assert_eq!(gpu_power(&table, &kb), Some(200));
        assert_eq!(gpu_power(&ProductRecord::new("Unknown card"), &kb), None);
    }
}
