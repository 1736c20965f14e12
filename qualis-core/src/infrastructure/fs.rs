// qualis-core/src/infrastructure/fs.rs

use crate::application::report::RunReport;
use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Writes the JSON report so that readers never see a half-written file: the content goes
/// to a temporary file in the target directory, which is then renamed over the target.
pub fn save_report(path: &Path, report: &RunReport) -> Result<(), InfrastructureError> {
    let json = report.to_json()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        std::fs::create_dir_all(parent)?;
    }

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(json.as_bytes())?;
    temp_file.persist(path).map_err(|e| InfrastructureError::Io(e.error))?;

    tracing::info!(path = ?path, "Report written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::engine::ValidationEngine;
    use crate::domain::config::{ScoringMode, ValidationMode};
    use crate::domain::scoring::QualityScorer;
    use crate::record;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn report() -> RunReport {
        let engine = ValidationEngine::new(
            vec![],
            QualityScorer::new(ScoringMode::Average, 0.8),
            ValidationMode::Strict,
        );
        RunReport::run(&engine, &[record! { "id" => 1 }])
    }

    #[test]
    fn test_save_creates_missing_directories() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out/nested/report.json");

        save_report(&path, &report())?;

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(json["passed"], 1);
        Ok(())
    }

    #[test]
    fn test_save_overwrites_existing() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("report.json");
        fs::write(&path, "stale")?;

        save_report(&path, &report())?;

        assert!(fs::read_to_string(&path)?.starts_with('{'));
        Ok(())
    }
}
