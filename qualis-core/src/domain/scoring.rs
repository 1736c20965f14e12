// qualis-core/src/domain/scoring.rs

use crate::domain::config::normalize::canonical_ratio;
use crate::domain::config::spec::{ScoringMode, ScoringSpec};
use crate::domain::outcome::{ValidationResult, clamp_score};

/// Reduces local results to one overall score and answers threshold questions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityScorer {
    mode: ScoringMode,
    threshold: f64,
}

impl QualityScorer {
    /// `threshold` may be a fraction or a percentage; it is stored canonical and clamped
    /// into `[0, 1]`. Out-of-range configuration values are rejected earlier, by the normalizer.
    pub fn new(mode: ScoringMode, threshold: f64) -> Self {
        Self {
            mode,
            threshold: clamp_score(canonical_ratio(threshold)),
        }
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// `results` must already be in engine order (priority descending).
    /// An empty sequence scores 1.0.
    pub fn calculate_score(&self, results: &[ValidationResult]) -> f64 {
        if results.is_empty() {
            return 1.0;
        }
        let scores = results.iter().map(ValidationResult::quality_score);

        let score = match self.mode {
            ScoringMode::Average => mean(scores),
            ScoringMode::Minimum => scores.fold(f64::INFINITY, f64::min),
            // Weight 2^i by position, not by priority value. Taken relative to the last
            // position (weight 1.0) so long sequences never overflow.
            ScoringMode::Weighted => {
                let last = results.len() - 1;
                let (sum, total) = scores.enumerate().fold((0.0, 0.0), |(sum, total), (i, s)| {
                    let distance = i32::try_from(last - i).unwrap_or(i32::MAX);
                    let weight = 0.5f64.powi(distance);
                    (sum + s * weight, total + weight)
                });
                sum / total
            }
            // Binary: did the batch clear the bar.
            ScoringMode::Threshold => {
                if mean(scores) >= self.threshold {
                    1.0
                } else {
                    0.0
                }
            }
        };
        clamp_score(score)
    }

    /// Both sides go through the same fraction/percentage rule, so 85 vs 0.85 compare equal.
    pub fn passes_threshold(&self, score: f64) -> bool {
        canonical_ratio(score) >= self.threshold
    }
}

impl From<ScoringSpec> for QualityScorer {
    fn from(spec: ScoringSpec) -> Self {
        Self::new(spec.mode, spec.threshold)
    }
}

fn mean(scores: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = scores.fold((0.0, 0usize), |(sum, count), s| (sum + s, count + 1));
    sum / count as f64
}
