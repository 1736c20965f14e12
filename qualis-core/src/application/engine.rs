// qualis-core/src/application/engine.rs

use std::cmp::Reverse;
use tracing::{debug, instrument};

use crate::application::factory::build_validators;
use crate::domain::config::{NormalizedConfig, ValidationMode};
use crate::domain::outcome::ValidationResult;
use crate::domain::record::Record;
use crate::domain::scoring::QualityScorer;
use crate::ports::Validator;

/// Runs every validator against a record, scores the local results and applies the
/// validity policy of the configured mode.
///
/// Immutable once built: `validate` can be called from several threads at once.
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
    scorer: QualityScorer,
    mode: ValidationMode,
}

impl ValidationEngine {
    /// Validators are stable-sorted by priority, highest first; ties keep their given order.
    pub fn new(
        mut validators: Vec<Box<dyn Validator>>,
        scorer: QualityScorer,
        mode: ValidationMode,
    ) -> Self {
        validators.sort_by_key(|v| Reverse(v.priority()));
        Self {
            validators,
            scorer,
            mode,
        }
    }

    pub fn from_config(config: &NormalizedConfig) -> Self {
        Self::new(
            build_validators(&config.rules),
            QualityScorer::from(config.scoring),
            config.mode,
        )
    }

    /// Validators in evaluation order.
    pub fn validators(&self) -> &[Box<dyn Validator>] {
        &self.validators
    }

    pub fn scorer(&self) -> &QualityScorer {
        &self.scorer
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    #[instrument(skip_all, fields(validators = self.validators.len(), mode = %self.mode))]
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let mut results = Vec::with_capacity(self.validators.len());
        let mut all_errors = Vec::new();

        for validator in &self.validators {
            let result = validator.evaluate(record);
            debug!(
                rule = validator.name(),
                valid = result.is_valid(),
                score = result.quality_score(),
                "rule evaluated"
            );
            all_errors.extend_from_slice(result.errors());
            results.push(result);
        }

        let overall_score = self.scorer.calculate_score(&results);
        let overall_valid = self.is_valid(&results, overall_score);

        ValidationResult::new(overall_valid, all_errors, overall_score)
    }

    fn is_valid(&self, results: &[ValidationResult], overall_score: f64) -> bool {
        match self.mode {
            ValidationMode::Strict => results.iter().all(ValidationResult::is_valid),
            // Strict majority: 2 of 4 is not enough.
            ValidationMode::Relaxed => {
                let passed = results.iter().filter(|r| r.is_valid()).count();
                passed > results.len() / 2
            }
            ValidationMode::Threshold => self.scorer.passes_threshold(overall_score),
        }
    }
}
