//! Type-safe wrappers and enums shared by the engine, storage and CLI.

pub mod ids;
pub mod mode;

pub use ids::{Phase, PlayerId, Season};
pub use mode::{PercentileScale, StatMode};
