// qualis-core/src/infrastructure/config/loader.rs

use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::config::raw::{RawScoringConfig, RawThreshold, RawValidationConfig};
use crate::infrastructure::error::InfrastructureError;

pub const ENV_MODE: &str = "QUALIS_MODE";
pub const ENV_SCORING_MODE: &str = "QUALIS_SCORING_MODE";
pub const ENV_THRESHOLD: &str = "QUALIS_THRESHOLD";

enum Format {
    Yaml,
    Json,
}

fn detect_format(path: &Path) -> Result<Format, InfrastructureError> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(InfrastructureError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}

/// Reads and parses a configuration file, then layers the environment on top. The result
/// is still raw: structural checks and normalization happen in `normalize`.
#[instrument]
pub fn load_validation_config(path: &Path) -> Result<RawValidationConfig, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    let format = detect_format(path)?;
    let content = fs::read_to_string(path)?;

    let mut config: RawValidationConfig = match format {
        Format::Yaml => serde_yaml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    info!(path = ?path, rules = config.rules.len(), "Validation config loaded");
    Ok(config)
}

/// Override via environment (layering). `lookup` is injected so tests stay off the
/// process environment.
pub fn apply_env_overrides<F>(config: &mut RawValidationConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_MODE) {
        info!(old = ?config.mode, new = %val, "Overriding validation mode via ENV");
        config.mode = Some(val);
    }
    if let Some(val) = lookup(ENV_SCORING_MODE) {
        let scoring = config.scoring.get_or_insert_with(RawScoringConfig::default);
        info!(old = ?scoring.mode, new = %val, "Overriding scoring mode via ENV");
        scoring.mode = Some(val);
    }
    if let Some(val) = lookup(ENV_THRESHOLD) {
        let scoring = config.scoring.get_or_insert_with(RawScoringConfig::default);
        info!(old = ?scoring.threshold, new = %val, "Overriding threshold via ENV");
        // Kept as text: the normalizer owns parsing and range checks.
        scoring.threshold = Some(RawThreshold::Text(val));
    }
}
