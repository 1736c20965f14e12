// qualis-core/src/ports/validator.rs

// The contract every rule implements. The engine only ever sees this trait.

use crate::domain::outcome::ValidationResult;
use crate::domain::record::Record;

pub trait Validator: Send + Sync {
    /// Never panics or fails on malformed data: problems become error entries and a lower
    /// local score.
    fn evaluate(&self, record: &Record) -> ValidationResult;

    fn name(&self) -> &str;

    /// Higher runs first.
    fn priority(&self) -> i64;
}
