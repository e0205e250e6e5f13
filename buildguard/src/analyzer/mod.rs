pub mod checker;
pub mod compatibility;
pub mod placement;
pub mod power;
pub mod rules;
pub mod suggestions;

pub use checker::{CompatibilityChecker, CompatibilityReport};
pub use placement::{validate_placement, PlacementResult};
pub use power::estimate_system_power;
pub use rules::*;
pub use suggestions::{analyze_bottleneck, generate_suggestions};
