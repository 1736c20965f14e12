// qualis-core/src/application/mod.rs

pub mod engine;
pub mod factory;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use qualis_core::application::{ValidationEngine, RunReport};`
// without knowing the file layout.

pub use engine::ValidationEngine;
pub use factory::{build_validator, build_validators};
pub use report::{RecordOutcome, RunReport};
