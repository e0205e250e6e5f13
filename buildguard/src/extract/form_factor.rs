//! Motherboard and case form factors.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{contains_any, find_spec_by_keys, synonyms};
use crate::model::ProductRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormFactor {
    #[serde(rename = "E-ATX")]
    EAtx,
    #[serde(rename = "ATX")]
    Atx,
    #[serde(rename = "Micro-ATX")]
    MicroAtx,
    #[serde(rename = "Mini-ITX")]
    MiniItx,
}

impl FormFactor {
    pub const ALL: [FormFactor; 4] = [
        FormFactor::EAtx,
        FormFactor::Atx,
        FormFactor::MicroAtx,
        FormFactor::MiniItx,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormFactor::EAtx => "E-ATX",
            FormFactor::Atx => "ATX",
            FormFactor::MicroAtx => "Micro-ATX",
            FormFactor::MiniItx => "Mini-ITX",
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const E_ATX_TOKENS: &[&str] = &["e-atx", "eatx"];
const MICRO_ATX_TOKENS: &[&str] = &["micro-atx", "micro atx", "matx", "m-atx", "µatx"];
const MINI_ITX_TOKENS: &[&str] = &["mini-itx", "mini itx", "mitx", "itx"];

/// Token lists checked in order; plain `atx` last so longer names win.
const FORM_FACTOR_TOKENS: &[(FormFactor, &[&str])] = &[
    (FormFactor::EAtx, E_ATX_TOKENS),
    (FormFactor::MicroAtx, MICRO_ATX_TOKENS),
    (FormFactor::MiniItx, MINI_ITX_TOKENS),
    (FormFactor::Atx, &["atx"]),
];

/// Chassis-size words in a case name → supported board sizes.
const CHASSIS_SIZES: &[(&[&str], &[FormFactor])] = &[
    (&["full tower", "full-tower"], &FormFactor::ALL),
    (
        &["mid tower", "midi tower", "mid-tower", "midi-tower"],
        &[FormFactor::Atx, FormFactor::MicroAtx, FormFactor::MiniItx],
    ),
    (
        &["mini tower", "mini-tower", "micro"],
        &[FormFactor::MicroAtx, FormFactor::MiniItx],
    ),
    (&["mini-itx", "itx"], &[FormFactor::MiniItx]),
];

/// Single best form factor named in a lower-cased text.
fn detect_form_factor(text: &str) -> Option<FormFactor> {
    FORM_FACTOR_TOKENS
        .iter()
        .find(|(_, tokens)| contains_any(text, tokens))
        .map(|(ff, _)| *ff)
}

/// Every form factor named in a lower-cased text, in [`FormFactor::ALL`] order.
fn detect_all_form_factors(text: &str) -> Vec<FormFactor> {
    // Plain ATX only counts when it remains after removing the longer names.
    let mut remainder = text.to_string();
    for token in E_ATX_TOKENS.iter().chain(MICRO_ATX_TOKENS) {
        remainder = remainder.replace(token, " ");
    }
    FormFactor::ALL
        .into_iter()
        .filter(|ff| match ff {
            FormFactor::EAtx => contains_any(text, E_ATX_TOKENS),
            FormFactor::Atx => remainder.contains("atx"),
            FormFactor::MicroAtx => contains_any(text, MICRO_ATX_TOKENS),
            FormFactor::MiniItx => contains_any(text, MINI_ITX_TOKENS),
        })
        .collect()
}

pub fn motherboard_form_factor(motherboard: &ProductRecord) -> Option<FormFactor> {
    find_spec_by_keys(motherboard, synonyms::MOTHERBOARD_FORM_FACTOR, |v| {
        detect_form_factor(&v.to_lowercase())
    })
    .or_else(|| detect_form_factor(&motherboard.lower_name()))
}

/// Board sizes a case accepts: explicit spec entries, else chassis size
/// words in the name.
pub fn case_form_factors(case: &ProductRecord) -> Option<Vec<FormFactor>> {
    let mut supported: Vec<FormFactor> = Vec::new();
    for (key, value) in case.specs.iter() {
        if !contains_any(&key.to_lowercase(), synonyms::CASE_FORM_FACTORS) {
            continue;
        }
        for ff in detect_all_form_factors(&value.to_lowercase()) {
            if !supported.contains(&ff) {
                supported.push(ff);
            }
        }
    }
    if !supported.is_empty() {
        return Some(supported);
    }

    let name = case.lower_name();
    CHASSIS_SIZES
        .iter()
        .find(|(words, _)| contains_any(&name, words))
        .map(|(_, sizes)| sizes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motherboard_form_factor() {
        let spec = ProductRecord::new("Board").with_spec("Form Factor", "Micro-ATX (24.4 x 24.4 cm)");
        assert_eq!(motherboard_form_factor(&spec), Some(FormFactor::MicroAtx));
        let finnish = ProductRecord::new("Board").with_spec("Muotokerroin", "E-ATX");
        assert_eq!(motherboard_form_factor(&finnish), Some(FormFactor::EAtx));
        let name = ProductRecord::new("Gigabyte B650I AORUS ULTRA Mini-ITX emolevy");
        assert_eq!(motherboard_form_factor(&name), Some(FormFactor::MiniItx));
        let plain = ProductRecord::new("MSI MAG X670E TOMAHAWK WIFI ATX emolevy");
        assert_eq!(motherboard_form_factor(&plain), Some(FormFactor::Atx));
        assert_eq!(motherboard_form_factor(&ProductRecord::new("Emolevy")), None);
    }

    #[test]
    fn test_case_list_keeps_atx_next_to_smaller_sizes() {
        let case = ProductRecord::new("Kotelo").with_spec("Tuetut emolevyt", "ATX, Micro-ATX, Mini-ITX");
        assert_eq!(
            case_form_factors(&case),
            Some(vec![FormFactor::Atx, FormFactor::MicroAtx, FormFactor::MiniItx])
        );
        let small = ProductRecord::new("Kotelo").with_spec("Form factor", "mATX / Mini-ITX");
        assert_eq!(
            case_form_factors(&small),
            Some(vec![FormFactor::MicroAtx, FormFactor::MiniItx])
        );
    }

    #[test]
    fn test_case_name_inference() {
        let full = ProductRecord::new("Corsair 7000D Full Tower kotelo");
        assert_eq!(case_form_factors(&full), Some(FormFactor::ALL.to_vec()));
        let mid = ProductRecord::new("NZXT H5 Flow Mid Tower");
        assert_eq!(
            case_form_factors(&mid),
            Some(vec![FormFactor::Atx, FormFactor::MicroAtx, FormFactor::MiniItx])
        );
        let micro = ProductRecord::new("Cooler Master MasterBox Q300L Micro kotelo");
        assert_eq!(
            case_form_factors(&micro),
            Some(vec![FormFactor::MicroAtx, FormFactor::MiniItx])
        );
        let itx = ProductRecord::new("Fractal Design Terra ITX");
        assert_eq!(case_form_factors(&itx), Some(vec![FormFactor::MiniItx]));
        assert_eq!(case_form_factors(&ProductRecord::new("Lian Li O11 kotelo")), None);
    }
}
