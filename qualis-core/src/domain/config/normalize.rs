// qualis-core/src/domain/config/normalize.rs
//
// Single place where ambiguous configuration values get their canonical meaning.
// Nothing downstream re-reads a raw priority, threshold or boolean default.

use tracing::{debug, instrument, warn};
use validator::Validate;

use crate::domain::config::raw::{RawPriority, RawRuleConfig, RawThreshold, RawValidationConfig};
use crate::domain::config::spec::{
    NormalizedConfig, RuleKind, RuleSpec, ScoringMode, ScoringSpec, ValidationMode,
};
use crate::domain::error::DomainError;

// --- Priority scale ---
pub const PRIORITY_HIGH: i64 = 10;
pub const PRIORITY_MEDIUM: i64 = 5;
pub const PRIORITY_LOW: i64 = 1;
pub const DEFAULT_PRIORITY: i64 = PRIORITY_MEDIUM;

// --- Boolean defaults ---
pub const DEFAULT_STRICT: bool = false;
pub const DEFAULT_INCLUSIVE: bool = true;
pub const DEFAULT_ALLOW_COERCION: bool = false;

// --- Threshold ---
/// Used when the scoring block gives no threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Named priorities are case-insensitive; unknown names and missing values get the default.
/// Fractional numbers are truncated toward zero.
pub fn canonical_priority(raw: Option<&RawPriority>) -> i64 {
    match raw {
        Some(RawPriority::Integer(i)) => *i,
        Some(RawPriority::Float(f)) => f.trunc() as i64,
        Some(RawPriority::Name(name)) => match name.to_lowercase().as_str() {
            "high" => PRIORITY_HIGH,
            "medium" => PRIORITY_MEDIUM,
            "low" => PRIORITY_LOW,
            _ => DEFAULT_PRIORITY,
        },
        Some(RawPriority::Other(_)) | None => DEFAULT_PRIORITY,
    }
}

/// Dual-format rule: anything above 1.0 is a percentage. Applied to thresholds and to the
/// scores compared against them alike.
pub fn canonical_ratio(value: f64) -> f64 {
    if value > 1.0 { value / 100.0 } else { value }
}

pub fn canonical_threshold(raw: Option<&RawThreshold>) -> Result<f64, DomainError> {
    let value = match raw {
        None => return Ok(DEFAULT_THRESHOLD),
        Some(RawThreshold::Number(n)) => *n,
        Some(RawThreshold::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidThreshold(format!("'{}' is not a number", s)))?,
    };

    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(DomainError::InvalidThreshold(format!(
            "{} is outside [0, 100]",
            value
        )));
    }
    Ok(canonical_ratio(value))
}

pub fn validation_mode(raw: Option<&str>) -> ValidationMode {
    match raw {
        None => ValidationMode::default(),
        Some(s) => s.parse().unwrap_or_else(|e: String| {
            warn!("{}, falling back to '{}'", e, ValidationMode::default());
            ValidationMode::default()
        }),
    }
}

pub fn scoring_mode(raw: Option<&str>) -> ScoringMode {
    match raw {
        None => ScoringMode::default(),
        Some(s) => s.parse().unwrap_or_else(|e: String| {
            warn!("{}, falling back to '{}'", e, ScoringMode::default());
            ScoringMode::default()
        }),
    }
}

/// Canonical rule, `Ok(None)` for an unknown rule type (skipped with a warning), or an error
/// for a known type whose constraints are unusable.
pub fn normalize_rule(raw: &RawRuleConfig) -> Result<Option<RuleSpec>, DomainError> {
    let name = raw.name.clone().unwrap_or_else(|| raw.rule_type.clone());
    let priority = canonical_priority(raw.priority.as_ref());

    // Rule types are case-sensitive.
    let kind = match raw.rule_type.as_str() {
        "required" => RuleKind::Required {
            fields: raw.fields.clone().unwrap_or_default(),
            strict: raw.strict.unwrap_or(DEFAULT_STRICT),
        },
        "type" => RuleKind::Type {
            types: raw.types.clone().unwrap_or_default(),
            allow_coercion: raw.allow_coercion.unwrap_or(DEFAULT_ALLOW_COERCION),
        },
        "range" => {
            let field = raw.field.clone().ok_or_else(|| DomainError::InvalidRule {
                rule: name.clone(),
                reason: "range rule needs a 'field'".into(),
            })?;
            if let (Some(min), Some(max)) = (raw.min, raw.max) {
                if min > max {
                    return Err(DomainError::InvalidRule {
                        rule: name,
                        reason: format!("min {} is greater than max {}", min, max),
                    });
                }
            }
            RuleKind::Range {
                field,
                min: raw.min,
                max: raw.max,
                inclusive: raw.inclusive.unwrap_or(DEFAULT_INCLUSIVE),
            }
        }
        other => {
            warn!(rule = %name, rule_type = %other, "Unknown rule type, skipping rule");
            return Ok(None);
        }
    };

    Ok(Some(RuleSpec {
        name,
        priority,
        kind,
    }))
}

/// Raw config -> canonical config. Rules keep their declaration order.
#[instrument(skip_all, fields(rules = raw.rules.len()))]
pub fn normalize(raw: &RawValidationConfig) -> Result<NormalizedConfig, DomainError> {
    raw.validate().map_err(|e| DomainError::InvalidConfig(e.to_string()))?;

    let scoring_raw = raw.scoring.clone().unwrap_or_default();
    let scoring = ScoringSpec {
        mode: scoring_mode(scoring_raw.mode.as_deref()),
        threshold: canonical_threshold(scoring_raw.threshold.as_ref())?,
    };

    let mut rules = Vec::with_capacity(raw.rules.len());
    for rule in &raw.rules {
        if let Some(spec) = normalize_rule(rule)? {
            rules.push(spec);
        }
    }

    let config = NormalizedConfig {
        mode: validation_mode(raw.mode.as_deref()),
        scoring,
        rules,
    };
    debug!(
        mode = %config.mode,
        scoring = %config.scoring.mode,
        threshold = config.scoring.threshold,
        kept = config.rules.len(),
        "Configuration normalized"
    );
    Ok(config)
}
