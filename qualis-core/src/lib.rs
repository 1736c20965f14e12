// qualis-core/src/lib.rs

// 1. Documentation is not enforced yet
#![allow(missing_docs)]
// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (traits)
// The `Validator` contract every rule implements.
pub mod ports;

// 2. Domain (pure logic, no I/O)
// Records, outcomes, config normalization, rules, scoring.
pub mod domain;

// 3. Infrastructure (adapters)
// Config files, record files, report output.
pub mod infrastructure;

// 4. Application (use cases)
// Engine orchestration, validator factory, run reports.
pub mod application;

// --- ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::{RunReport, ValidationEngine};
pub use domain::{FieldValue, QualityScorer, Record, Severity, ValidationError, ValidationResult};
pub use error::QualisError;
pub use ports::Validator;

/// Loads a configuration file and builds a ready-to-use engine.
pub fn engine_from_file(path: &std::path::Path) -> Result<ValidationEngine, QualisError> {
    let raw = infrastructure::config::load_validation_config(path)?;
    let config = domain::config::normalize(&raw)?;
    Ok(ValidationEngine::from_config(&config))
}
