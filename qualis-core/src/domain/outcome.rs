// qualis-core/src/domain/outcome.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// Declaration order gives Low < Medium < High < Critical for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One data-quality problem found by a rule. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub rule_name: String,
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationError {
    pub fn new(
        rule_name: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            field: field.into(),
            message: message.into(),
            severity,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}.{}: {}",
            self.severity, self.rule_name, self.field, self.message
        )
    }
}

/// Outcome of one rule (local result) or of a whole engine run (aggregate result).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
    quality_score: f64,
}

impl ValidationResult {
    /// The score is clamped into `[0.0, 1.0]`; NaN collapses to 0.0.
    pub fn new(valid: bool, errors: Vec<ValidationError>, quality_score: f64) -> Self {
        Self {
            valid,
            errors,
            quality_score: clamp_score(quality_score),
        }
    }

    pub fn pass() -> Self {
        Self::new(true, Vec::new(), 1.0)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn quality_score(&self) -> f64 {
        self.quality_score
    }

    pub fn has_severity(&self, severity: Severity) -> bool {
        self.errors.iter().any(|e| e.severity == severity)
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} score={:.3} errors={}",
            if self.valid { "PASS" } else { "FAIL" },
            self.quality_score,
            self.errors.len()
        )
    }
}

pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_score_is_clamped_by_constructor() {
        assert_eq!(ValidationResult::new(true, vec![], 1.4).quality_score(), 1.0);
        assert_eq!(ValidationResult::new(false, vec![], -0.2).quality_score(), 0.0);
        assert_eq!(ValidationResult::new(false, vec![], f64::NAN).quality_score(), 0.0);
    }

    #[test]
    fn test_summary_line() {
        let err = ValidationError::new("ids", "id", "missing", Severity::Critical);
        let result = ValidationResult::new(false, vec![err], 0.5);
        insta::assert_snapshot!(result.summary_line(), @"FAIL score=0.500 errors=1");
        insta::assert_snapshot!(ValidationResult::pass().summary_line(), @"PASS score=1.000 errors=0");
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new("ids", "id", "Required field is missing or null", Severity::High);
        assert_eq!(err.to_string(), "[high] ids.id: Required field is missing or null");
    }
}
