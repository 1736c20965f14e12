pub mod config;
pub mod error;
pub mod outcome;
pub mod record;
pub mod rules;
pub mod scoring;

// Short paths for the rest of the crate and for the CLI.
pub use error::DomainError;
pub use outcome::{Severity, ValidationError, ValidationResult};
pub use record::{FieldValue, Record};
pub use scoring::QualityScorer;
