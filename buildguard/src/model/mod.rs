//! Build data model: products, slots, build state and build documents.

pub mod build;
pub mod file;
pub mod product;
pub mod slot;

pub use build::BuildState;
pub use file::{BuildEntry, BuildFile, DisplayMode};
pub use product::{Category, ProductRecord, Specs};
pub use slot::{InvalidSlot, SlotId, SlotKind};
