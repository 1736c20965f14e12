// qualis-core/src/domain/rules/range.rs

use tracing::debug;

use crate::domain::outcome::{Severity, ValidationError, ValidationResult};
use crate::domain::record::Record;
use crate::ports::Validator;

const OUT_OF_RANGE_SCORE: f64 = 0.5;

/// Numeric bounds on a single field. Absence and null pass: presence is not this rule's job.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    name: String,
    field: String,
    min: Option<f64>,
    max: Option<f64>,
    inclusive: bool,
    priority: i64,
}

impl RangeValidator {
    pub fn new(
        name: impl Into<String>,
        field: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
        inclusive: bool,
        priority: i64,
    ) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            min,
            max,
            inclusive,
            priority,
        }
    }

    fn bound_kind(&self) -> &'static str {
        if self.inclusive { "inclusive" } else { "exclusive" }
    }
}

impl Validator for RangeValidator {
    fn evaluate(&self, record: &Record) -> ValidationResult {
        let value = match record.get(&self.field) {
            None => return ValidationResult::pass(),
            Some(v) if v.is_null() => return ValidationResult::pass(),
            Some(v) => v,
        };

        let Some(number) = value.as_number() else {
            let error = ValidationError::new(
                &self.name,
                &self.field,
                "Value is not a number",
                Severity::High,
            );
            return ValidationResult::new(false, vec![error], 0.0);
        };

        let mut errors = Vec::new();
        let mut in_range = true;

        if let Some(min) = self.min {
            in_range = if self.inclusive {
                number >= min
            } else {
                number > min
            };
            if !in_range {
                errors.push(ValidationError::new(
                    &self.name,
                    &self.field,
                    format!(
                        "Value {:.2} is below {} minimum {:.2}",
                        number,
                        self.bound_kind(),
                        min
                    ),
                    Severity::Medium,
                ));
            }
        }

        // The upper bound is only looked at when the lower one held.
        if let (Some(max), true) = (self.max, in_range) {
            in_range = if self.inclusive {
                number <= max
            } else {
                number < max
            };
            if !in_range {
                errors.push(ValidationError::new(
                    &self.name,
                    &self.field,
                    format!(
                        "Value {:.2} is above {} maximum {:.2}",
                        number,
                        self.bound_kind(),
                        max
                    ),
                    Severity::Medium,
                ));
            }
        }

        debug!(rule = %self.name, field = %self.field, number, in_range, "range check done");
        let score = if in_range { 1.0 } else { OUT_OF_RANGE_SCORE };
        ValidationResult::new(in_range, errors, score)
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
    use crate::domain::record::FieldValue;
    use crate::record;

    fn validator(inclusive: bool) -> RangeValidator {
        RangeValidator::new("score_range", "score", Some(0.0), Some(10.0), inclusive, 5)
    }

    #[test]
    fn test_upper_boundary_respects_inclusivity() {
        let rec = record! { "score" => 10 };
        assert!(validator(true).evaluate(&rec).is_valid());

        let result = validator(false).evaluate(&rec);
        assert!(!result.is_valid());
        assert_eq!(result.quality_score(), 0.5);
        assert_eq!(result.errors()[0].severity, Severity::Medium);
        assert_eq!(
            result.errors()[0].message,
            "Value 10.00 is above exclusive maximum 10.00"
        );
    }

    #[test]
    fn test_below_minimum() {
        let result = validator(true).evaluate(&record! { "score" => -1.5 });
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].message,
            "Value -1.50 is below inclusive minimum 0.00"
        );
    }

    #[test]
    fn test_non_numeric_overrides_bounds() {
        let result = validator(true).evaluate(&record! { "score" => "abc" });
        assert!(!result.is_valid());
        assert_eq!(result.quality_score(), 0.0);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].severity, Severity::High);

        let unbounded = RangeValidator::new("any", "score", None, None, true, 1);
        let result = unbounded.evaluate(&record! { "score" => true });
        assert_eq!(result.quality_score(), 0.0);
        assert_eq!(result.errors()[0].severity, Severity::High);
    }

    #[test]
    fn test_numeric_strings_are_read() {
        assert!(validator(true).evaluate(&record! { "score" => " 7 " }).is_valid());
    }

    #[test]
    fn test_absent_or_null_passes() {
        let absent = validator(true).evaluate(&record! { "other" => 99 });
        assert!(absent.is_valid());
        assert_eq!(absent.quality_score(), 1.0);

        let mut rec = record! {};
        rec.insert("score".into(), FieldValue::Null);
        assert!(validator(true).evaluate(&rec).is_valid());
    }

    #[test]
    fn test_one_sided_bounds() {
        let floor = RangeValidator::new("floor", "score", Some(5.0), None, false, 1);
        assert!(floor.evaluate(&record! { "score" => 1_000_000 }).is_valid());
        assert!(!floor.evaluate(&record! { "score" => 5 }).is_valid());
    }
}
