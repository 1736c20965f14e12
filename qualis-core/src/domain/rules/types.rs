// qualis-core/src/domain/rules/types.rs

use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::outcome::{Severity, ValidationError, ValidationResult};
use crate::domain::record::{FieldValue, Record};
use crate::ports::Validator;

const MISMATCH_PENALTY: f64 = 0.3;

/// Checks field values against expected type names.
///
/// Absent fields belong to the required-field rule and are ignored here. Present-but-null
/// fields are counted as checked but never mismatch.
#[derive(Debug, Clone)]
pub struct TypeValidator {
    name: String,
    types: BTreeMap<String, String>,
    priority: i64,
    allow_coercion: bool,
}

impl TypeValidator {
    pub fn new(
        name: impl Into<String>,
        types: BTreeMap<String, String>,
        priority: i64,
        allow_coercion: bool,
    ) -> Self {
        Self {
            name: name.into(),
            types,
            priority,
            allow_coercion,
        }
    }

    fn matches(&self, value: &FieldValue, expected: &str) -> bool {
        let actual = value.type_name();
        let expected = expected.to_lowercase();

        // Loose match: "int" ~ "integer", "bool" ~ "boolean", ...
        if actual.contains(expected.as_str()) || expected.contains(actual) {
            return true;
        }

        if !self.allow_coercion {
            return false;
        }
        match value {
            FieldValue::Integer(_) | FieldValue::Float(_) | FieldValue::String(_) => {
                let text = value.to_string();
                match expected.as_str() {
                    "integer" => text.parse::<i64>().is_ok(),
                    "double" => text.trim().parse::<f64>().is_ok(),
                    _ => false,
                }
            }
            FieldValue::Null | FieldValue::Boolean(_) => false,
        }
    }
}

impl Validator for TypeValidator {
    fn evaluate(&self, record: &Record) -> ValidationResult {
        let mut errors = Vec::new();
        let mut score = 1.0;
        let mut checked = 0usize;

        for (field, expected) in &self.types {
            let Some(value) = record.get(field) else {
                continue;
            };
            checked += 1;
            if value.is_null() {
                continue;
            }

            if !self.matches(value, expected) {
                let severity = if self.allow_coercion {
                    Severity::Low
                } else {
                    Severity::High
                };
                errors.push(ValidationError::new(
                    &self.name,
                    field,
                    format!("Expected type {} but got {}", expected, value.type_name()),
                    severity,
                ));
                score -= MISMATCH_PENALTY;
            }
        }

        // Penalty per checked field, scaled back up to the configured field count.
        if checked > 0 {
            score = (score / checked as f64 * self.types.len() as f64).max(0.0);
        }

        let valid = errors.is_empty()
            || (self.allow_coercion && !errors.iter().any(|e| e.severity == Severity::High));

        debug!(rule = %self.name, checked, errors = errors.len(), score, "type check done");
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

    fn validator(pairs: &[(&str, &str)], allow_coercion: bool) -> TypeValidator {
        let types = pairs
            .iter()
            .map(|(f, t)| (f.to_string(), t.to_string()))
            .collect();
        TypeValidator::new("types", types, 5, allow_coercion)
    }

    #[test]
    fn test_loose_type_names_match() {
        let v = validator(
            &[("id", "int"), ("name", "String"), ("active", "bool"), ("ratio", "double")],
            false,
        );
        let rec = record! { "id" => 1, "name" => "x", "active" => true, "ratio" => 0.5 };
        let result = v.evaluate(&rec);
        assert!(result.is_valid());
        assert_eq!(result.quality_score(), 1.0);
    }

    #[test]
    fn test_mismatch_without_coercion_is_high() {
        let v = validator(&[("id", "integer")], false);
        let result = v.evaluate(&record! { "id" => "42" });
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].severity, Severity::High);
        assert_eq!(result.errors()[0].message, "Expected type integer but got string");
        assert!((result.quality_score() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_coercion_accepts_parseable_strings() {
        let v = validator(&[("id", "integer"), ("price", "double")], true);
        let result = v.evaluate(&record! { "id" => "42", "price" => " 9.99 " });
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_failed_coercion_is_low_and_still_valid() {
        let v = validator(&[("id", "integer")], true);
        let result = v.evaluate(&record! { "id" => "forty-two" });
        assert!(result.is_valid());
        assert_eq!(result.errors()[0].severity, Severity::Low);
    }

    #[test]
    fn test_float_does_not_coerce_to_integer() {
        let v = validator(&[("id", "integer")], true);
        let result = v.evaluate(&record! { "id" => 3.0 });
        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn test_absent_and_null_fields_are_skipped() {
        let v = validator(&[("id", "integer"), ("name", "string")], false);
        let mut rec = record! {};
        rec.insert("name".into(), FieldValue::Null);
        let result = v.evaluate(&rec);
        assert!(result.is_valid());
        assert_eq!(result.quality_score(), 1.0);
    }

    #[test]
    fn test_present_null_counts_as_checked() {
        // Both fields checked, one mismatch: (1 - 0.3) / 2 * 2 = 0.7. Skipping the null would
        // rescale by one field and clamp to 1.0.
        let v = validator(&[("a", "integer"), ("b", "integer")], false);
        let mut rec = record! { "a" => "x" };
        rec.insert("b".into(), FieldValue::Null);
        let result = v.evaluate(&rec);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert!((result.quality_score() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_rescaled_by_checked_fields() {
        // 4 configured, 2 present, 1 mismatch: (1 - 0.3) / 2 * 4 = 1.4 -> clamped to 1.0
        let v = validator(
            &[("a", "integer"), ("b", "integer"), ("c", "integer"), ("d", "integer")],
            false,
        );
        let result = v.evaluate(&record! { "a" => 1, "b" => "x" });
        assert!(!result.is_valid());
        assert_eq!(result.quality_score(), 1.0);

        // 2 configured, both present, both mismatch: (1 - 0.6) / 2 * 2 = 0.4
        let v = validator(&[("a", "integer"), ("b", "integer")], false);
        let result = v.evaluate(&record! { "a" => "x", "b" => "y" });
        assert!((result.quality_score() - 0.4).abs() < 1e-9);
    }
}
