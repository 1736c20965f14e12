// qualis-core/src/application/report.rs

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::application::engine::ValidationEngine;
use crate::domain::config::{ScoringMode, ValidationMode};
use crate::domain::outcome::ValidationResult;
use crate::domain::record::Record;

// --- DTOs ---
// What the CLI prints or writes for a run over one input file.

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub generated_at: String,
    pub mode: ValidationMode,
    pub scoring_mode: ScoringMode,
    pub threshold: f64,
    pub records: Vec<RecordOutcome>,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
pub struct RecordOutcome {
    pub index: usize,
    pub result: ValidationResult,
}

impl RunReport {
    /// Each record is validated on its own; one bad record never affects another.
    pub fn run(engine: &ValidationEngine, records: &[Record]) -> Self {
        let outcomes: Vec<RecordOutcome> = records
            .iter()
            .enumerate()
            .map(|(index, record)| RecordOutcome {
                index,
                result: engine.validate(record),
            })
            .collect();

        let passed = outcomes.iter().filter(|o| o.result.is_valid()).count();
        let failed = outcomes.len() - passed;
        info!(records = outcomes.len(), passed, failed, "Validation run finished");

        Self {
            generated_at: Utc::now().to_rfc3339(),
            mode: engine.mode(),
            scoring_mode: engine.scorer().mode(),
            threshold: engine.scorer().threshold(),
            records: outcomes,
            passed,
            failed,
        }
    }

    pub fn success(&self) -> bool {
        self.failed == 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
