//! Slot placement validation.

use serde::Serialize;

use super::rules::{Issue, Rule, RuleContext, Severity};
use crate::classifier::classify;
use crate::model::{ProductRecord, SlotId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PlacementResult {
    fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }
}

/// Check that `record` belongs in `slot`. Numbered memory and storage slots
/// take the same category as their base slot.
pub fn validate_placement(slot: &SlotId, record: &ProductRecord) -> PlacementResult {
    let expected = slot.expected_category();
    let actual = classify(record);
    if actual == expected {
        return PlacementResult::valid();
    }
    PlacementResult {
        valid: false,
        message: Some(format!(
            "\"{}\" on {}, mutta tämä paikka on tarkoitettu {}.",
            record.name,
            actual.nominative(),
            expected.allative()
        )),
    }
}

pub struct PlacementRule;

impl Rule for PlacementRule {
    fn id(&self) -> &str {
        "slot_placement"
    }

    fn name(&self) -> &str {
        "Slot Placement"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Issue> {
        ctx.build
            .iter()
            .filter_map(|(slot, record)| {
                let result = validate_placement(slot, record);
                result
                    .message
                    .map(|message| Issue::new(self.id(), self.severity(), message, Some(*slot)))
            })
            .collect()
    }
}
