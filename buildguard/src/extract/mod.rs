//! Attribute Extraction
//!
//! Pure functions deriving normalized facts from a single [`ProductRecord`].
//! Every extractor follows the same resolution order and stops at the first
//! hit:
//!
//! 1. spec entries whose lower-cased key contains one of the attribute's
//!    synonyms (see [`synonyms`]);
//! 2. a fixed pattern applied to the matching entry's value;
//! 3. the product name, with the same or a looser pattern;
//! 4. for CPU memory support only, the model-family table in [`memory`];
//! 5. otherwise `None`.
//!
//! `None` means "undeterminable from the available text". Extractors never
//! substitute defaults; the power estimator is the only place that does.
//!
//! [`ProductRecord`]: crate::model::ProductRecord

pub mod cooler;
pub mod dimensions;
pub mod form_factor;
pub mod memory;
pub mod power;
pub mod socket;
pub mod synonyms;
pub mod tier;

pub use cooler::{case_cooler_clearance, cooler_height, cooler_sockets, cpu_includes_cooler};
pub use dimensions::{case_gpu_clearance, gpu_length};
pub use form_factor::{case_form_factors, motherboard_form_factor, FormFactor};
pub use memory::{
    cpu_memory_type, cpu_supports_fast_memory, memory_speed, memory_stick_count, memory_type,
    motherboard_memory_slots, motherboard_memory_type, total_memory_sticks, MemoryType,
};
pub use power::{component_tdp, gpu_power, psu_wattage};
pub use socket::{cpu_socket, motherboard_socket, normalize_socket, Socket};
pub use tier::{cpu_tier, gpu_tier};

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::model::ProductRecord;

/// Lazily compiled pattern. A pattern that fails to compile matches nothing.
pub(crate) type Pattern = Lazy<Option<Regex>>;

pub(crate) static MILLIMETRES: Pattern = Lazy::new(|| Regex::new(r"(\d{2,4})\s*mm").ok());
pub(crate) static WATTS: Pattern = Lazy::new(|| Regex::new(r"(?i)(\d{2,4})\s*w").ok());

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// First `(key, value)` entry whose lower-cased key satisfies `key_test`
/// and whose value yields a fact.
pub(crate) fn find_spec<T>(
    record: &ProductRecord,
    key_test: impl Fn(&str) -> bool,
    mut value_fn: impl FnMut(&str) -> Option<T>,
) -> Option<T> {
    record
        .specs
        .iter()
        .filter(|(key, _)| key_test(&key.to_lowercase()))
        .find_map(|(_, value)| value_fn(value))
}

/// [`find_spec`] over keys containing any of `synonyms`.
pub(crate) fn find_spec_by_keys<T>(
    record: &ProductRecord,
    synonyms: &[&str],
    value_fn: impl FnMut(&str) -> Option<T>,
) -> Option<T> {
    find_spec(record, |key| contains_any(key, synonyms), value_fn)
}

pub(crate) fn compiled(pattern: &Pattern) -> Option<&Regex> {
    Lazy::force(pattern).as_ref()
}

pub(crate) fn is_match(pattern: &Pattern, text: &str) -> bool {
    compiled(pattern).is_some_and(|re| re.is_match(text))
}

/// First capture group of `pattern` in `text`, parsed as a number.
pub(crate) fn capture_u32(pattern: &Pattern, text: &str) -> Option<u32> {
    compiled(pattern)?
        .captures(text)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}
