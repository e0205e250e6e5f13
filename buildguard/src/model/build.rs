//! The set of currently selected parts.

use std::collections::BTreeMap;

use super::product::ProductRecord;
use super::slot::{SlotId, SlotKind};

/// Slot → product mapping plus the memory/storage suffix counters.
///
/// Iteration is in canonical slot order, so every engine pass over the same
/// state visits slots identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildState {
    components: BTreeMap<SlotId, ProductRecord>,
    memory_counter: u32,
    storage_counter: u32,
}

impl BuildState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `record` into `slot`, returning the product it replaced.
    pub fn insert(&mut self, slot: SlotId, record: ProductRecord) -> Option<ProductRecord> {
        if let Some(n) = slot.index() {
            match slot.kind() {
                SlotKind::Memory => self.memory_counter = self.memory_counter.max(n),
                SlotKind::Storage => self.storage_counter = self.storage_counter.max(n),
                _ => {}
            }
        }
        self.components.insert(slot, record)
    }

    pub fn with(mut self, slot: SlotId, record: ProductRecord) -> Self {
        self.insert(slot, record);
        self
    }

    /// Clear a slot. Counters never go down.
    pub fn remove(&mut self, slot: &SlotId) -> Option<ProductRecord> {
        self.components.remove(slot)
    }

    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Allocate the next `memory-<n>` slot; `None` once the counter is exhausted.
    pub fn allocate_memory_slot(&mut self) -> Option<SlotId> {
        let next = self.memory_counter.checked_add(1)?;
        self.memory_counter = next;
        SlotId::suffixed(SlotKind::Memory, next).ok()
    }

    /// Allocate the next `storage-<n>` slot; `None` once the counter is exhausted.
    pub fn allocate_storage_slot(&mut self) -> Option<SlotId> {
        let next = self.storage_counter.checked_add(1)?;
        self.storage_counter = next;
        SlotId::suffixed(SlotKind::Storage, next).ok()
    }

    pub fn get(&self, slot: &SlotId) -> Option<&ProductRecord> {
        self.components.get(slot)
    }

    pub fn contains(&self, slot: &SlotId) -> bool {
        self.components.contains_key(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SlotId, &ProductRecord)> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn memory_counter(&self) -> u32 {
        self.memory_counter
    }

    pub fn storage_counter(&self) -> u32 {
        self.storage_counter
    }

    pub fn cpu(&self) -> Option<&ProductRecord> {
        self.get(&SlotId::CPU)
    }

    pub fn motherboard(&self) -> Option<&ProductRecord> {
        self.get(&SlotId::MOTHERBOARD)
    }

    pub fn gpu(&self) -> Option<&ProductRecord> {
        self.get(&SlotId::GPU)
    }

    pub fn psu(&self) -> Option<&ProductRecord> {
        self.get(&SlotId::PSU)
    }

    pub fn case(&self) -> Option<&ProductRecord> {
        self.get(&SlotId::CASE)
    }

    pub fn cooler(&self) -> Option<&ProductRecord> {
        self.get(&SlotId::COOLER)
    }

    /// Occupied memory slots with their modules: `memory`, then `memory-<n>`
    /// by ascending suffix.
    pub fn memory_entries(&self) -> Vec<(SlotId, &ProductRecord)> {
        self.instances(SlotKind::Memory).collect()
    }

    /// All memory instances, in slot order.
    pub fn memory_modules(&self) -> Vec<&ProductRecord> {
        self.instances(SlotKind::Memory).map(|(_, record)| record).collect()
    }

    /// All storage instances, in slot order.
    pub fn storage_devices(&self) -> Vec<&ProductRecord> {
        self.instances(SlotKind::Storage).map(|(_, record)| record).collect()
    }

    /// Occupied slots of `kind`. The base slot sorts before its suffixed
    /// variants, so this is a single range walk over occupied entries.
    fn instances(&self, kind: SlotKind) -> impl Iterator<Item = (SlotId, &ProductRecord)> + '_ {
        self.components
            .range(SlotId::base(kind)..)
            .take_while(move |(slot, _)| slot.kind() == kind)
            .map(|(slot, record)| (*slot, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_raises_counters() {
        let mut build = BuildState::new();
        build.insert(SlotId::memory(3).unwrap(), ProductRecord::new("DDR5 kit"));
        assert_eq!(build.memory_counter(), 3);
        assert_eq!(build.storage_counter(), 0);
        build.remove(&SlotId::memory(3).unwrap());
        assert_eq!(build.memory_counter(), 3);
    }

    #[test]
    fn test_memory_modules_order() {
        let mut build = BuildState::new();
        let second = build.allocate_memory_slot().unwrap();
        let third = build.allocate_memory_slot().unwrap();
        build.insert(third, ProductRecord::new("c"));
        build.insert(SlotId::MEMORY, ProductRecord::new("a"));
        build.insert(second, ProductRecord::new("b"));
        let names: Vec<_> = build.memory_modules().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_gaps_are_skipped() {
        let build = BuildState::new()
            .with(SlotId::storage(2).unwrap(), ProductRecord::new("ssd"));
        assert_eq!(build.storage_devices().len(), 1);
        assert!(build.memory_modules().is_empty());
    }

    #[test]
    fn test_huge_suffix_is_cheap_and_allocation_saturates() {
        let mut build = BuildState::new()
            .with(SlotId::MEMORY, ProductRecord::new("a"))
            .with(SlotId::memory(u32::MAX).unwrap(), ProductRecord::new("b"))
            .with(SlotId::STORAGE, ProductRecord::new("ssd"));
        let slots: Vec<String> = build
            .memory_entries()
            .iter()
            .map(|(slot, _)| slot.to_string())
            .collect();
        assert_eq!(slots, vec!["memory".to_string(), format!("memory-{}", u32::MAX)]);
        assert_eq!(build.storage_devices().len(), 1);

        assert_eq!(build.allocate_memory_slot(), None);
        assert_eq!(build.memory_counter(), u32::MAX);
        assert_eq!(build.allocate_storage_slot(), SlotId::storage(1).ok());
    }
}
