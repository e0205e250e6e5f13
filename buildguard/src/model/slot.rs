//! Build slot identifiers (`cpu`, `memory`, `memory-2`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::product::Category;

/// Base slot kinds, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotKind {
    Cpu,
    Motherboard,
    Memory,
    Gpu,
    Psu,
    Case,
    Cooler,
    Storage,
}

impl SlotKind {
    pub const ALL: [SlotKind; 8] = [
        SlotKind::Cpu,
        SlotKind::Motherboard,
        SlotKind::Memory,
        SlotKind::Gpu,
        SlotKind::Psu,
        SlotKind::Case,
        SlotKind::Cooler,
        SlotKind::Storage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Cpu => "cpu",
            SlotKind::Motherboard => "motherboard",
            SlotKind::Memory => "memory",
            SlotKind::Gpu => "gpu",
            SlotKind::Psu => "psu",
            SlotKind::Case => "case",
            SlotKind::Cooler => "cooler",
            SlotKind::Storage => "storage",
        }
    }

    /// Category a product must classify as to sit in this slot.
    pub fn expected_category(&self) -> Category {
        match self {
            SlotKind::Cpu => Category::Cpu,
            SlotKind::Motherboard => Category::Motherboard,
            SlotKind::Memory => Category::Memory,
            SlotKind::Gpu => Category::Gpu,
            SlotKind::Psu => Category::Psu,
            SlotKind::Case => Category::Case,
            SlotKind::Cooler => Category::Cooler,
            SlotKind::Storage => Category::Storage,
        }
    }

    /// Only memory and storage slots repeat.
    pub fn allows_suffix(&self) -> bool {
        matches!(self, SlotKind::Memory | SlotKind::Storage)
    }
}

/// A named position in the build holding at most one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotId {
    kind: SlotKind,
    index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid slot identifier: {0}")]
pub struct InvalidSlot(pub String);

impl SlotId {
    pub const CPU: SlotId = SlotId::base(SlotKind::Cpu);
    pub const MOTHERBOARD: SlotId = SlotId::base(SlotKind::Motherboard);
    pub const MEMORY: SlotId = SlotId::base(SlotKind::Memory);
    pub const GPU: SlotId = SlotId::base(SlotKind::Gpu);
    pub const PSU: SlotId = SlotId::base(SlotKind::Psu);
    pub const CASE: SlotId = SlotId::base(SlotKind::Case);
    pub const COOLER: SlotId = SlotId::base(SlotKind::Cooler);
    pub const STORAGE: SlotId = SlotId::base(SlotKind::Storage);

    pub const fn base(kind: SlotKind) -> Self {
        Self { kind, index: None }
    }

    /// `memory-<n>` for n >= 1.
    pub fn memory(n: u32) -> Result<Self, InvalidSlot> {
        Self::suffixed(SlotKind::Memory, n)
    }

    /// `storage-<n>` for n >= 1.
    pub fn storage(n: u32) -> Result<Self, InvalidSlot> {
        Self::suffixed(SlotKind::Storage, n)
    }

    pub fn suffixed(kind: SlotKind, n: u32) -> Result<Self, InvalidSlot> {
        if !kind.allows_suffix() || n == 0 {
            return Err(InvalidSlot(format!("{}-{}", kind.as_str(), n)));
        }
        Ok(Self {
            kind,
            index: Some(n),
        })
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn index(&self) -> Option<u32> {
        self.index
    }

    pub fn expected_category(&self) -> Category {
        self.kind.expected_category()
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(n) => write!(f, "{}-{}", self.kind.as_str(), n),
            None => f.write_str(self.kind.as_str()),
        }
    }
}

impl FromStr for SlotId {
    type Err = InvalidSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSlot(s.to_string());
        if let Some(kind) = SlotKind::ALL.iter().find(|k| k.as_str() == s) {
            return Ok(SlotId::base(*kind));
        }
        let (prefix, suffix) = s.rsplit_once('-').ok_or_else(invalid)?;
        let kind = SlotKind::ALL
            .iter()
            .find(|k| k.as_str() == prefix)
            .ok_or_else(invalid)?;
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let n: u32 = suffix.parse().map_err(|_| invalid())?;
        SlotId::suffixed(*kind, n).map_err(|_| invalid())
    }
}

impl TryFrom<String> for SlotId {
    type Error = InvalidSlot;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotId> for String {
    fn from(slot: SlotId) -> Self {
        slot.to_string()
    }
}
