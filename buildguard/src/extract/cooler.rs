//! CPU cooler facts: supported sockets, height, case clearance, bundling.

use super::socket::{find_all_sockets, Socket};
use super::{capture_u32, contains_any, find_spec, find_spec_by_keys, synonyms, MILLIMETRES};
use crate::model::ProductRecord;

/// Sockets listed by the cooler, deduplicated in listing order.
pub fn cooler_sockets(cooler: &ProductRecord) -> Option<Vec<Socket>> {
    let mut sockets: Vec<Socket> = Vec::new();
    for (key, value) in cooler.specs.iter() {
        if !contains_any(&key.to_lowercase(), synonyms::COOLER_SOCKETS) {
            continue;
        }
        for socket in find_all_sockets(value) {
            if !sockets.contains(&socket) {
                sockets.push(socket);
            }
        }
    }
    if sockets.is_empty() {
        None
    } else {
        Some(sockets)
    }
}

pub fn cooler_height(cooler: &ProductRecord) -> Option<u32> {
    find_spec_by_keys(cooler, synonyms::COOLER_HEIGHT, |v| capture_u32(&MILLIMETRES, v))
}

/// Tallest CPU cooler the case accepts.
pub fn case_cooler_clearance(case: &ProductRecord) -> Option<u32> {
    find_spec(
        case,
        |key| {
            contains_any(key, synonyms::CASE_COOLER_SUBJECT)
                && contains_any(key, synonyms::CASE_COOLER_LIMIT)
        },
        |v| capture_u32(&MILLIMETRES, v),
    )
}

fn says_no(value: &str) -> bool {
    value == "ei"
        || value == "no"
        || value.starts_with("ei ")
        || value.starts_with("no ")
        || value.contains("not included")
        || value.contains("ei mukana")
}

/// True when the CPU spec sheet states a boxed cooler is included.
pub fn cpu_includes_cooler(cpu: &ProductRecord) -> bool {
    find_spec_by_keys(cpu, synonyms::CPU_BUNDLED_COOLER, |value| {
        let v = value.trim().to_lowercase();
        if says_no(&v) {
            return None;
        }
        contains_any(&v, &["kyllä", "yes", "included", "mukana"]).then_some(())
    })
    .is_some()
}
