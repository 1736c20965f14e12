// qualis-core/src/domain/config/raw.rs
//
// Configuration as it appears on disk. Several fields accept more than one shape
// (priority as number or name, threshold as number or string); nothing here interprets
// them. See `normalize` for the canonical reading.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, Clone, Default)]
pub struct RawValidationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<RawScoringConfig>,

    #[validate(nested)]
    #[serde(default)]
    pub rules: Vec<RawRuleConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RawScoringConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<RawThreshold>,
}

/// Fraction (0.85), percentage (85) or either written as a string ("85").
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawThreshold {
    Number(f64),
    Text(String),
}

/// Numeric priority (10) or a named one ("high"). Any other shape is kept as-is and
/// read as the default priority.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawPriority {
    Integer(i64),
    Float(f64),
    Name(String),
    Other(serde_yaml::Value),
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawRuleConfig {
    #[validate(length(min = 1, message = "rule name cannot be empty"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "rule type cannot be empty"))]
    #[serde(rename = "type")]
    pub rule_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<RawPriority>,

    // --- required ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,

    // --- type ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_coercion: Option<bool>,

    // --- range ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
}
