use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::compatibility::{
    CoolerCaseClearanceRule, CoolerSocketRule, CpuMemoryTypeRule, CpuMotherboardSocketRule,
    FormFactorRule, GpuCaseClearanceRule, MemorySlotAvailabilityRule, MotherboardMemoryTypeRule,
    PsuWattageRule,
};
use super::placement::PlacementRule;
use crate::knowledge::KnowledgeBase;
use crate::model::{BuildState, SlotId};

/// Issue namespace for deterministic ids.
const ISSUE_NAMESPACE: uuid::Uuid = uuid::Uuid::NAMESPACE_OID;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Blocks overall compatibility.
    Critical,
    /// Informational only.
    Warning,
}

impl Severity {
    /// Finnish label used as the display prefix.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "KRIITTINEN",
            Severity::Warning => "VAROITUS",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    /// Slot the issue is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<SlotId>,
}

impl Issue {
    /// The id is derived from `rule_id` and `message`, so the same finding
    /// always gets the same id.
    pub fn new(
        rule_id: &str,
        severity: Severity,
        message: impl Into<String>,
        slot: Option<SlotId>,
    ) -> Self {
        let message = message.into();
        let id = uuid::Uuid::new_v5(&ISSUE_NAMESPACE, format!("{rule_id}\n{message}").as_bytes());
        Self {
            id: id.to_string(),
            rule_id: rule_id.to_string(),
            severity,
            message,
            slot,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.message)
    }
}

/// Everything a rule may look at.
pub struct RuleContext<'a> {
    pub build: &'a BuildState,
    pub knowledge: &'a KnowledgeBase,
    /// Estimated system draw in watts.
    pub estimated_power: u32,
}

pub trait Rule: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn severity(&self) -> Severity;
    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue>;
}

/// Static description of a registered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub id: String,
    pub name: String,
    pub severity: Severity,
}

pub struct RulesEngine {
    rules: Vec<Arc<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Placement first, then the pairwise checks, power last.
    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Arc::new(PlacementRule));
        engine.add_rule(Arc::new(CpuMotherboardSocketRule));
        engine.add_rule(Arc::new(MotherboardMemoryTypeRule));
        engine.add_rule(Arc::new(CpuMemoryTypeRule));
        engine.add_rule(Arc::new(GpuCaseClearanceRule));
        engine.add_rule(Arc::new(CoolerSocketRule));
        engine.add_rule(Arc::new(MemorySlotAvailabilityRule));
        engine.add_rule(Arc::new(FormFactorRule));
        engine.add_rule(Arc::new(CoolerCaseClearanceRule));
        engine.add_rule(Arc::new(PsuWattageRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Arc<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_infos(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|rule| RuleInfo {
                id: rule.id().to_string(),
                name: rule.name().to_string(),
                severity: rule.severity(),
            })
            .collect()
    }

    /// Run every rule in registration order.
    pub fn analyze(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            let found = rule.check(ctx);
            tracing::debug!("Rule {} produced {} issue(s)", rule.id(), found.len());
            issues.extend(found);
        }
        issues
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_and_id() {
        let a = Issue::new("cpu_motherboard_socket", Severity::Critical, "viesti", None);
        let b = Issue::new("cpu_motherboard_socket", Severity::Critical, "viesti", None);
        let c = Issue::new("cpu_motherboard_socket", Severity::Critical, "toinen", None);
        assert_eq!(a.to_string(), "KRIITTINEN: viesti");
        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert!(a.is_critical());
    }

    #[test]
    fn test_default_rule_order() {
        let ids: Vec<String> = RulesEngine::with_default_rules()
            .rule_infos()
            .into_iter()
            .map(|info| info.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "slot_placement",
                "cpu_motherboard_socket",
                "motherboard_memory_type",
                "cpu_memory_type",
                "gpu_case_clearance",
                "cooler_cpu_socket",
                "memory_slot_availability",
                "form_factor",
                "cooler_case_clearance",
                "psu_wattage",
            ]
        );
    }

    #[test]
    fn test_empty_engine_reports_nothing() {
        let engine = RulesEngine::new();
        let kb = KnowledgeBase::builtin().unwrap();
        let build = BuildState::new();
        let ctx = RuleContext {
            build: &build,
            knowledge: &kb,
            estimated_power: 0,
        };
        assert!(engine.is_empty());
        assert!(engine.analyze(&ctx).is_empty());
    }

    #[test]
    fn test_severity_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"WARNING\"");
    }
}
