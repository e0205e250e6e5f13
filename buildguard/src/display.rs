//! Spec sheet presentation helpers.
//!
//! Everything here reads the spec display table only. Compatibility and
//! power logic never depend on it.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::classifier::classify;
use crate::extract::{compiled, Pattern};
use crate::knowledge::SpecDisplayTable;
use crate::model::{Category, DisplayMode, ProductRecord, Specs};

pub const MAX_VALUE_CHARS: usize = 150;
pub const IMPORTANT_SPECS_LIMIT: usize = 8;
pub const CATEGORY_KEY_SPECS_LIMIT: usize = 3;

static CASE_JOIN: Pattern = Lazy::new(|| Regex::new(r"([a-zäöå])([A-ZÄÖÅ])").ok());
static DIGIT_WORD_JOIN: Pattern = Lazy::new(|| Regex::new(r"(\d)([A-ZÄÖÅ][a-zäöå])").ok());

pub type SpecLine = (String, String);

fn separate(pattern: &Pattern, text: String) -> String {
    match compiled(pattern) {
        Some(re) => re.replace_all(&text, "${1} ${2}").into_owned(),
        None => text,
    }
}

/// Trim, cap the length and split glued words: `"ValmistajaIntel"` becomes
/// `"Valmistaja Intel"` and `"16Gigatavua"` becomes `"16 Gigatavua"`.
pub fn clean_spec_value(value: &str) -> String {
    let trimmed = value.trim();
    let mut cleaned: String = trimmed.chars().take(MAX_VALUE_CHARS).collect();
    if trimmed.chars().count() > MAX_VALUE_CHARS {
        cleaned.push_str("...");
    }
    let cleaned = separate(&CASE_JOIN, cleaned);
    separate(&DIGIT_WORD_JOIN, cleaned)
}

fn is_excluded(key: &str, table: &SpecDisplayTable) -> bool {
    let key = key.to_lowercase();
    table.exclude_patterns.iter().any(|p| key.contains(p.as_str()))
}

/// Drop bookkeeping entries (warranty, EAN, weight, ...) and clean values.
pub fn filter_relevant_specs<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    table: &SpecDisplayTable,
) -> Vec<SpecLine> {
    entries
        .into_iter()
        .filter(|(key, _)| !is_excluded(key, table))
        .map(|(key, value)| (key.to_string(), clean_spec_value(value)))
        .collect()
}

/// Entries whose key names an important attribute, at most eight.
pub fn important_specs(specs: &Specs, table: &SpecDisplayTable) -> Vec<SpecLine> {
    let important = specs.iter().filter(|(key, _)| {
        let key = key.to_lowercase();
        table
            .important_spec_keys
            .iter()
            .any(|imp| key.contains(&imp.to_lowercase()))
    });
    let mut lines = filter_relevant_specs(important, table);
    lines.truncate(IMPORTANT_SPECS_LIMIT);
    lines
}

/// The first three entries relevant to the product's classified category.
pub fn category_key_specs(record: &ProductRecord, table: &SpecDisplayTable) -> Vec<SpecLine> {
    let category = classify(record);
    let Some(keys) = table.category_key_specs.get(category.as_str()) else {
        return Vec::new();
    };
    record
        .specs
        .iter()
        .filter(|(key, _)| {
            let key = key.to_lowercase();
            keys.iter().any(|k| key.contains(k.as_str()))
        })
        .take(CATEGORY_KEY_SPECS_LIMIT)
        .map(|(key, value)| (key.to_string(), clean_spec_value(value)))
        .collect()
}

pub fn category_display_name(category: Category, table: &SpecDisplayTable) -> String {
    table
        .category_display_names
        .get(category.as_str())
        .cloned()
        .unwrap_or_else(|| category.as_str().to_string())
}

/// Spec lines to show for a product: key specs in simple mode; important
/// specs in expert mode, falling back to the first filtered entries.
pub fn spec_summary(record: &ProductRecord, mode: DisplayMode, table: &SpecDisplayTable) -> Vec<SpecLine> {
    match mode {
        DisplayMode::Simple => category_key_specs(record, table),
        DisplayMode::Expert => {
            let important = important_specs(&record.specs, table);
            if !important.is_empty() {
                return important;
            }
            let mut lines = filter_relevant_specs(record.specs.iter(), table);
            lines.truncate(IMPORTANT_SPECS_LIMIT);
            lines
        }
    }
}
