//! Pairwise and aggregate compatibility rules.
//!
//! Each rule is vacuously satisfied when one of its slots is empty or a fact
//! it needs cannot be extracted: unknown is never incompatible.

use super::rules::{Issue, Rule, RuleContext, Severity};
use crate::extract::{
    case_cooler_clearance, case_form_factors, case_gpu_clearance, cooler_height, cooler_sockets,
    cpu_memory_type, cpu_socket, gpu_length, memory_type,
    motherboard_form_factor, motherboard_memory_slots, motherboard_memory_type,
    motherboard_socket, psu_wattage, total_memory_sticks, MemoryType,
};
use crate::model::{ProductRecord, SlotId};

/// First memory module whose type differs from `supported`, with its slot.
fn mismatched_memory(
    modules: &[(SlotId, &ProductRecord)],
    supported: MemoryType,
) -> Option<(SlotId, MemoryType)> {
    modules
        .iter()
        .filter_map(|(slot, module)| memory_type(module).map(|kind| (*slot, kind)))
        .find(|(_, kind)| *kind != supported)
}


pub struct CpuMotherboardSocketRule;

impl Rule for CpuMotherboardSocketRule {
    fn id(&self) -> &str {
        "cpu_motherboard_socket"
    }

    fn name(&self) -> &str {
        "CPU / Motherboard Socket"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let (Some(cpu), Some(motherboard)) = (ctx.build.cpu(), ctx.build.motherboard()) else {
            return Vec::new();
        };
        let (Some(required), Some(offered)) = (cpu_socket(cpu), motherboard_socket(motherboard)) else {
            return Vec::new();
        };
        if required == offered {
            return Vec::new();
        }
        vec![Issue::new(
            self.id(),
            self.severity(),
            format!(
                "Prosessori vaatii {} kantaa, mutta emolevy tukee {} kantaa.",
                required, offered
            ),
            Some(SlotId::MOTHERBOARD),
        )]
    }
}

pub struct MotherboardMemoryTypeRule;

impl Rule for MotherboardMemoryTypeRule {
    fn id(&self) -> &str {
        "motherboard_memory_type"
    }

    fn name(&self) -> &str {
        "Motherboard / Memory Type"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let Some(motherboard) = ctx.build.motherboard() else {
            return Vec::new();
        };
        let Some(supported) = motherboard_memory_type(motherboard) else {
            return Vec::new();
        };
        match mismatched_memory(&ctx.build.memory_entries(), supported) {
            Some((slot, actual)) => vec![Issue::new(
                self.id(),
                self.severity(),
                format!("Emolevy tukee {} muistia, mutta muisti on {} tyyppiä.", supported, actual),
                Some(slot),
            )],
            None => Vec::new(),
        }
    }
}

pub struct CpuMemoryTypeRule;

impl Rule for CpuMemoryTypeRule {
    fn id(&self) -> &str {
        "cpu_memory_type"
    }

    fn name(&self) -> &str {
        "CPU / Memory Type"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let Some(cpu) = ctx.build.cpu() else {
            return Vec::new();
        };
        let Some(supported) = cpu_memory_type(cpu) else {
            return Vec::new();
        };
        match mismatched_memory(&ctx.build.memory_entries(), supported) {
            Some((slot, actual)) => vec![Issue::new(
                self.id(),
                self.severity(),
                format!("Prosessori tukee {} muistia, mutta muisti on {} tyyppiä.", supported, actual),
                Some(slot),
            )],
            None => Vec::new(),
        }
    }
}

pub struct GpuCaseClearanceRule;

impl Rule for GpuCaseClearanceRule {
    fn id(&self) -> &str {
        "gpu_case_clearance"
    }

    fn name(&self) -> &str {
        "GPU Length / Case Clearance"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let (Some(gpu), Some(case)) = (ctx.build.gpu(), ctx.build.case()) else {
            return Vec::new();
        };
        match (gpu_length(gpu), case_gpu_clearance(case)) {
            (Some(length), Some(clearance)) if length > clearance => vec![Issue::new(
                self.id(),
                self.severity(),
                format!(
                    "Näytönohjain on {}mm pitkä, mutta kotelo tukee max {}mm kortteja.",
                    length, clearance
                ),
                Some(SlotId::GPU),
            )],
            _ => Vec::new(),
        }
    }
}

pub struct CoolerSocketRule;

impl Rule for CoolerSocketRule {
    fn id(&self) -> &str {
        "cooler_cpu_socket"
    }

    fn name(&self) -> &str {
        "Cooler / CPU Socket"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let (Some(cpu), Some(cooler)) = (ctx.build.cpu(), ctx.build.cooler()) else {
            return Vec::new();
        };
        let (Some(socket), Some(supported)) = (cpu_socket(cpu), cooler_sockets(cooler)) else {
            return Vec::new();
        };
        if supported.contains(&socket) {
            return Vec::new();
        }
        let listed: Vec<&str> = supported.iter().map(|s| s.as_str()).collect();
        vec![Issue::new(
            self.id(),
            self.severity(),
            format!(
                "Jäähdytin ei tue {} kantaa. Tuetut kannat: {}.",
                socket,
                listed.join(", ")
            ),
            Some(SlotId::COOLER),
        )]
    }
}

pub struct MemorySlotAvailabilityRule;

impl Rule for MemorySlotAvailabilityRule {
    fn id(&self) -> &str {
        "memory_slot_availability"
    }

    fn name(&self) -> &str {
        "Memory Slot Availability"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let Some(motherboard) = ctx.build.motherboard() else {
            return Vec::new();
        };
        let modules = ctx.build.memory_modules();
        if modules.is_empty() {
            return Vec::new();
        }
        let sticks = total_memory_sticks(&modules);
        let slots = motherboard_memory_slots(motherboard);
        if sticks <= slots {
            return Vec::new();
        }
        vec![Issue::new(
            self.id(),
            self.severity(),
            format!(
                "Muistikampoja on yhteensä {} kpl, mutta emolevyssä on vain {} paikkaa.",
                sticks, slots
            ),
            Some(SlotId::MOTHERBOARD),
        )]
    }
}

pub struct FormFactorRule;

impl Rule for FormFactorRule {
    fn id(&self) -> &str {
        "form_factor"
    }

    fn name(&self) -> &str {
        "Motherboard / Case Form Factor"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let (Some(motherboard), Some(case)) = (ctx.build.motherboard(), ctx.build.case()) else {
            return Vec::new();
        };
        let (Some(board), Some(supported)) =
            (motherboard_form_factor(motherboard), case_form_factors(case))
        else {
            return Vec::new();
        };
        if supported.contains(&board) {
            return Vec::new();
        }
        let listed: Vec<&str> = supported.iter().map(|ff| ff.as_str()).collect();
        vec![Issue::new(
            self.id(),
            self.severity(),
            format!("Emolevy on {}, mutta kotelo tukee: {}.", board, listed.join(", ")),
            Some(SlotId::CASE),
        )]
    }
}

pub struct CoolerCaseClearanceRule;

impl Rule for CoolerCaseClearanceRule {
    fn id(&self) -> &str {
        "cooler_case_clearance"
    }

    fn name(&self) -> &str {
        "Cooler Height / Case Clearance"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let (Some(cooler), Some(case)) = (ctx.build.cooler(), ctx.build.case()) else {
            return Vec::new();
        };
        match (cooler_height(cooler), case_cooler_clearance(case)) {
            (Some(height), Some(clearance)) if height > clearance => vec![Issue::new(
                self.id(),
                self.severity(),
                format!(
                    "Jäähdytin on {}mm korkea, mutta kotelo tukee max {}mm jäähdytintä.",
                    height, clearance
                ),
                Some(SlotId::COOLER),
            )],
            _ => Vec::new(),
        }
    }
}

/// Estimated draw against the PSU rating. Over the rating is critical; over
/// 80 % of it is a warning.
pub struct PsuWattageRule;

impl Rule for PsuWattageRule {
    fn id(&self) -> &str {
        "psu_wattage"
    }

    fn name(&self) -> &str {
        "PSU Wattage"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let Some(psu) = ctx.build.psu() else {
            return Vec::new();
        };
        let draw = ctx.estimated_power;
        let Some(wattage) = psu_wattage(psu) else {
            return Vec::new();
        };
        if draw == 0 {
            return Vec::new();
        }
        if draw > wattage {
            return vec![Issue::new(
                self.id(),
                Severity::Critical,
                format!(
                    "Järjestelmän arvioitu tehonkulutus ({}W) ylittää virtalähteen tehon ({}W).",
                    draw, wattage
                ),
                Some(SlotId::PSU),
            )];
        }
        if u64::from(draw) * 5 > u64::from(wattage) * 4 {
            return vec![Issue::new(
                self.id(),
                Severity::Warning,
                format!(
                    "Virtalähteen teho ({}W) on lähellä järjestelmän arviota ({}W). Suositellaan vähintään 20% ylivaraa.",
                    wattage, draw
                ),
                Some(SlotId::PSU),
            )];
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::model::BuildState;

    fn run(rule: &dyn Rule, build: &BuildState, estimated_power: u32) -> Vec<Issue> {
        let kb = KnowledgeBase::builtin().unwrap();
        let ctx = RuleContext {
            build,
            knowledge: &kb,
            estimated_power,
        };
        rule.check(&ctx)
    }

    #[test]
    fn test_socket_mismatch_and_normalization() {
        let build = BuildState::new()
            .with(SlotId::CPU, ProductRecord::new("AMD Ryzen 7 7700X").with_spec("Suoritinkanta", "AM5"))
            .with(SlotId::MOTHERBOARD, ProductRecord::new("B550 emolevy").with_spec("Socket", "AM4"));
        let issues = run(&CpuMotherboardSocketRule, &build, 0);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Prosessori vaatii AM5 kantaa, mutta emolevy tukee AM4 kantaa."
        );

        let build = BuildState::new()
            .with(SlotId::CPU, ProductRecord::new("Intel Core i5-13600K").with_spec("Socket", "LGA 1700"))
            .with(SlotId::MOTHERBOARD, ProductRecord::new("Z790 emolevy").with_spec("Socket", "lga1700"));
        assert!(run(&CpuMotherboardSocketRule, &build, 0).is_empty());
    }

    #[test]
    fn test_memory_type_checks_every_module() {
        let build = BuildState::new()
            .with(SlotId::MOTHERBOARD, ProductRecord::new("B650 emolevy").with_spec("Muistityyppi", "DDR5"))
            .with(SlotId::MEMORY, ProductRecord::new("Kingston 16GB DDR5 muisti"))
            .with(SlotId::memory(2).unwrap(), ProductRecord::new("Corsair 16GB DDR4 muisti"));
        let issues = run(&MotherboardMemoryTypeRule, &build, 0);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Emolevy tukee DDR5 muistia, mutta muisti on DDR4 tyyppiä.");
        assert_eq!(issues[0].slot, Some(SlotId::memory(2).unwrap()));
    }

    #[test]
    fn test_cpu_memory_type_uses_family_table() {
        let build = BuildState::new()
            .with(SlotId::CPU, ProductRecord::new("Intel Core i7-11700K prosessori"))
            .with(SlotId::MEMORY, ProductRecord::new("Kingston 32GB DDR5 muisti"));
        let issues = run(&CpuMemoryTypeRule, &build, 0);
        assert_eq!(issues[0].message, "Prosessori tukee DDR4 muistia, mutta muisti on DDR5 tyyppiä.");

        let undetermined = BuildState::new()
            .with(SlotId::CPU, ProductRecord::new("Intel Core i5-12400F prosessori"))
            .with(SlotId::MEMORY, ProductRecord::new("Kingston 32GB DDR5 muisti"));
        assert!(run(&CpuMemoryTypeRule, &undetermined, 0).is_empty());
    }

    #[test]
    fn test_clearances_are_warnings() {
        let build = BuildState::new()
            .with(SlotId::GPU, ProductRecord::new("RTX 4090").with_spec("Pituus", "357 mm"))
            .with(SlotId::COOLER, ProductRecord::new("NH-D15").with_spec("Korkeus", "165 mm"))
            .with(
                SlotId::CASE,
                ProductRecord::new("Kotelo")
                    .with_spec("Näytönohjaimen maksimipituus", "340 mm")
                    .with_spec("Prosessorijäähdyttimen maksimikorkeus", "160 mm"),
            );
        let gpu = run(&GpuCaseClearanceRule, &build, 0);
        assert_eq!(gpu[0].severity, Severity::Warning);
        assert_eq!(
            gpu[0].message,
            "Näytönohjain on 357mm pitkä, mutta kotelo tukee max 340mm kortteja."
        );
        let cooler = run(&CoolerCaseClearanceRule, &build, 0);
        assert_eq!(
            cooler[0].message,
            "Jäähdytin on 165mm korkea, mutta kotelo tukee max 160mm jäähdytintä."
        );
    }

    #[test]
    fn test_cooler_socket_list() {
        let build = BuildState::new()
            .with(SlotId::CPU, ProductRecord::new("Intel Core Ultra 7 265K").with_spec("Socket", "LGA1851"))
            .with(SlotId::COOLER, ProductRecord::new("Old cooler").with_spec("Socket", "LGA1700, AM4"));
        let issues = run(&CoolerSocketRule, &build, 0);
        assert_eq!(
            issues[0].message,
            "Jäähdytin ei tue LGA1851 kantaa. Tuetut kannat: LGA1700, AM4."
        );
    }

    #[test]
    fn test_form_factor() {
        let build = BuildState::new()
            .with(SlotId::MOTHERBOARD, ProductRecord::new("X670E ATX emolevy"))
            .with(SlotId::CASE, ProductRecord::new("Fractal Design Terra ITX kotelo"));
        let issues = run(&FormFactorRule, &build, 0);
        assert_eq!(issues[0].message, "Emolevy on ATX, mutta kotelo tukee: Mini-ITX.");
    }

    #[test]
    fn test_psu_thresholds() {
        let build = BuildState::new().with(SlotId::PSU, ProductRecord::new("PSU").with_spec("Teho", "500 W"));
        assert!(run(&PsuWattageRule, &build, 400).is_empty());
        let warning = run(&PsuWattageRule, &build, 401);
        assert_eq!(warning[0].severity, Severity::Warning);
        let critical = run(&PsuWattageRule, &build, 501);
        assert_eq!(critical[0].severity, Severity::Critical);
        assert_eq!(
            critical[0].message,
            "Järjestelmän arvioitu tehonkulutus (501W) ylittää virtalähteen tehon (500W)."
        );
    }

    #[test]
    fn test_empty_slots_are_vacuously_compatible() {
        let build = BuildState::new();
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(CpuMotherboardSocketRule),
            Box::new(MotherboardMemoryTypeRule),
            Box::new(CpuMemoryTypeRule),
            Box::new(GpuCaseClearanceRule),
            Box::new(CoolerSocketRule),
            Box::new(MemorySlotAvailabilityRule),
            Box::new(FormFactorRule),
            Box::new(CoolerCaseClearanceRule),
            Box::new(PsuWattageRule),
        ];
        for rule in &rules {
            assert!(run(rule.as_ref(), &build, 1000).is_empty(), "{}", rule.id());
        }
    }
}
