//! Build Compatibility Checker
//!
//! Binds a knowledge base and a rules engine, and runs the full pipeline
//! over a build snapshot.

use serde::Serialize;
use std::sync::Arc;

use super::power::estimate_system_power;
use super::rules::{Issue, RuleContext, RulesEngine, Severity};
use super::suggestions::generate_suggestions;
use crate::knowledge::KnowledgeBase;
use crate::model::BuildState;

/// Outcome of one compatibility run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub issues: Vec<Issue>,
    pub estimated_power: u32,
    /// False as soon as any issue is critical.
    pub compatible: bool,
}

impl CompatibilityReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

pub struct CompatibilityChecker {
    knowledge: Arc<KnowledgeBase>,
    engine: RulesEngine,
}

impl CompatibilityChecker {
    /// Checker with the default rule set.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_engine(knowledge, RulesEngine::with_default_rules())
    }

    /// Checker with a custom rules engine.
    pub fn with_engine(knowledge: Arc<KnowledgeBase>, engine: RulesEngine) -> Self {
        Self { knowledge, engine }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    pub fn estimate_system_power(&self, build: &BuildState) -> u32 {
        estimate_system_power(build, &self.knowledge)
    }

    pub fn generate_suggestions(&self, build: &BuildState) -> Vec<String> {
        generate_suggestions(build, &self.knowledge)
    }

    pub fn run_all_compatibility_checks(&self, build: &BuildState) -> CompatibilityReport {
        let estimated_power = self.estimate_system_power(build);
        let ctx = RuleContext {
            build,
            knowledge: &self.knowledge,
            estimated_power,
        };
        let issues = self.engine.analyze(&ctx);
        let compatible = !issues.iter().any(Issue::is_critical);
        tracing::debug!(
            "Checked {} component(s): {} issue(s), {}W, compatible={}",
            build.len(),
            issues.len(),
            estimated_power,
            compatible
        );
        CompatibilityReport {
            issues,
            estimated_power,
            compatible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductRecord, SlotId};

    fn checker() -> CompatibilityChecker {
        CompatibilityChecker::new(Arc::new(KnowledgeBase::builtin().unwrap()))
    }

    #[test]
    fn test_empty_build() {
        let report = checker().run_all_compatibility_checks(&BuildState::new());
        assert!(report.issues.is_empty());
        assert_eq!(report.estimated_power, 0);
        assert!(report.compatible);
    }

    #[test]
    fn test_placement_issue_comes_first() {
        let build = BuildState::new()
            .with(SlotId::CPU, ProductRecord::new("AMD Ryzen 7 7700X prosessori").with_spec("Socket", "AM5"))
            .with(
                SlotId::MOTHERBOARD,
                ProductRecord::new("MSI B550 emolevy").with_spec("Socket", "AM4"),
            )
            .with(SlotId::GPU, ProductRecord::new("Corsair RM750e virtalähde"));
        let report = checker().run_all_compatibility_checks(&build);
        let rules: Vec<&str> = report.issues.iter().map(|i| i.rule_id.as_str()).collect();
        assert_eq!(rules, vec!["slot_placement", "cpu_motherboard_socket"]);
        assert!(!report.compatible);
        assert_eq!(report.count(Severity::Critical), 2);
    }

    #[test]
    fn test_warnings_do_not_block() {
        let build = BuildState::new()
            .with(SlotId::GPU, ProductRecord::new("GeForce RTX 4090").with_spec("Pituus", "357 mm"))
            .with(SlotId::CASE, ProductRecord::new("Kotelo").with_spec("GPU max length", "330 mm"));
        let report = checker().run_all_compatibility_checks(&build);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::Warning);
        assert!(report.compatible);
    }

    #[test]
    fn test_absurd_memory_configuration_is_reported() {
        let build = BuildState::new()
            .with(SlotId::MOTHERBOARD, ProductRecord::new("B650 emolevy").with_spec("Muistipaikat", "4 x DIMM"))
            .with(SlotId::MEMORY, ProductRecord::new("Muisti").with_spec("Kokoonpano", "999999999 x 16GB"))
            .with(SlotId::PSU, ProductRecord::new("Corsair RM850x virtalähde").with_spec("Teho", "850 W"));
        let report = checker().run_all_compatibility_checks(&build);
        assert_eq!(report.estimated_power, u32::MAX);
        assert!(report.issues.iter().any(|i| i.rule_id == "memory_slot_availability"
            && i.message == "Muistikampoja on yhteensä 999999999 kpl, mutta emolevyssä on vain 4 paikkaa."));
        assert!(report.issues.iter().any(|i| i.rule_id == "psu_wattage" && i.is_critical()));
        assert!(!report.compatible);
    }
}
