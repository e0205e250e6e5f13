//! CPU socket extraction.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{compiled, find_spec_by_keys, synonyms, Pattern};
use crate::model::ProductRecord;

static SOCKET: Pattern =
    Lazy::new(|| Regex::new(r"(?i)(AM4|AM5|LGA\s*1700|LGA\s*1851|LGA\s*1200)").ok());

/// Strip whitespace and upper-case: `"lga 1700"` → `"LGA1700"`.
pub fn normalize_socket(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// A normalized socket token such as `AM5` or `LGA1700`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Socket(String);

impl Socket {
    pub fn new(raw: &str) -> Self {
        Self(normalize_socket(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// First socket token in `text`.
pub(crate) fn find_socket(text: &str) -> Option<Socket> {
    compiled(&SOCKET)?
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| Socket::new(m.as_str()))
}

/// Every socket token in `text`, in order of appearance.
pub(crate) fn find_all_sockets(text: &str) -> Vec<Socket> {
    match compiled(&SOCKET) {
        Some(re) => re.find_iter(text).map(|m| Socket::new(m.as_str())).collect(),
        None => Vec::new(),
    }
}

pub fn cpu_socket(cpu: &ProductRecord) -> Option<Socket> {
    find_spec_by_keys(cpu, synonyms::CPU_SOCKET, find_socket).or_else(|| find_socket(&cpu.name))
}

pub fn motherboard_socket(motherboard: &ProductRecord) -> Option<Socket> {
    find_spec_by_keys(motherboard, synonyms::MOTHERBOARD_SOCKET, find_socket)
        .or_else(|| find_socket(&motherboard.name))
}
