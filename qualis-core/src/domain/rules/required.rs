// qualis-core/src/domain/rules/required.rs

use tracing::debug;

use crate::domain::outcome::{Severity, ValidationError, ValidationResult};
use crate::domain::record::{FieldValue, Record};
use crate::ports::Validator;

/// Checks that a list of fields is present and non-null.
///
/// Each missing field costs `1/N` of the score, each blank string (strict mode only) `0.5/N`.
/// Outside strict mode missing fields are reported at `Medium` and never invalidate.
#[derive(Debug, Clone)]
pub struct RequiredFieldValidator {
    name: String,
    fields: Vec<String>,
    priority: i64,
    strict: bool,
}

impl RequiredFieldValidator {
    pub fn new(name: impl Into<String>, fields: Vec<String>, priority: i64, strict: bool) -> Self {
        Self {
            name: name.into(),
            fields,
            priority,
            strict,
        }
    }
}

impl Validator for RequiredFieldValidator {
    fn evaluate(&self, record: &Record) -> ValidationResult {
        let mut errors = Vec::new();
        let mut score = 1.0;
        let n = self.fields.len() as f64;

        for field in &self.fields {
            match record.get(field) {
                None | Some(FieldValue::Null) => {
                    let severity = if self.strict {
                        Severity::Critical
                    } else {
                        Severity::Medium
                    };
                    errors.push(ValidationError::new(
                        &self.name,
                        field,
                        "Required field is missing or null",
                        severity,
                    ));
                    score -= 1.0 / n;
                }
                Some(value) if self.strict && value.to_string().trim().is_empty() => {
                    errors.push(ValidationError::new(
                        &self.name,
                        field,
                        "Required field is empty",
                        Severity::High,
                    ));
                    score -= 0.5 / n;
                }
                Some(_) => {}
            }
        }

        let valid = errors.is_empty()
            || (!self.strict && !errors.iter().any(|e| e.severity == Severity::Critical));

        debug!(rule = %self.name, errors = errors.len(), score, "required check done");
        ValidationResult::new(valid, errors, score)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i64 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    fn validator(fields: &[&str], strict: bool) -> RequiredFieldValidator {
        RequiredFieldValidator::new(
            "required",
            fields.iter().map(|f| f.to_string()).collect(),
            5,
            strict,
        )
    }

    #[test]
    fn test_all_present_scores_full() {
        let result = validator(&["id", "name"], false).evaluate(&record! { "id" => 1, "name" => "x" });
        assert!(result.is_valid());
        assert_eq!(result.quality_score(), 1.0);
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_strict_missing_field_is_critical() {
        let result = validator(&["id", "name"], true).evaluate(&record! { "id" => 1 });
        assert!(!result.is_valid());
        assert_eq!(result.quality_score(), 0.5);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].severity, Severity::Critical);
        assert_eq!(result.errors()[0].field, "name");
    }

    #[test]
    fn test_relaxed_missing_field_stays_valid() {
        let mut rec = record! { "id" => 1 };
        rec.insert("name".into(), FieldValue::Null);
        let result = validator(&["id", "name"], false).evaluate(&rec);
        assert!(result.is_valid());
        assert_eq!(result.quality_score(), 0.5);
        assert_eq!(result.errors()[0].severity, Severity::Medium);
    }

    #[test]
    fn test_blank_string_only_counts_in_strict_mode() {
        let rec = record! { "id" => 1, "name" => "   " };

        let strict = validator(&["id", "name"], true).evaluate(&rec);
        assert!(!strict.is_valid());
        assert_eq!(strict.quality_score(), 0.75);
        assert_eq!(strict.errors()[0].severity, Severity::High);

        let lenient = validator(&["id", "name"], false).evaluate(&rec);
        assert!(lenient.is_valid());
        assert_eq!(lenient.quality_score(), 1.0);
    }

    #[test]
    fn test_no_required_fields_is_vacuous_pass() {
        let result = validator(&[], true).evaluate(&record! {});
        assert!(result.is_valid());
        assert_eq!(result.quality_score(), 1.0);
    }

    #[test]
    fn test_score_never_goes_negative() {
        let result = validator(&["a", "b", "c"], true).evaluate(&record! {});
        assert_eq!(result.errors().len(), 3);
        assert!(result.quality_score() >= 0.0);
        assert!(result.quality_score() < 1e-9);
    }
}
