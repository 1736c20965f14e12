// qualis-core/src/domain/config/spec.rs
//
// Canonical, post-normalization configuration. Built once, never mutated.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Every validator must pass.
    #[default]
    Strict,
    /// Strictly more than half of the validators must pass.
    Relaxed,
    /// The overall score must clear the scorer's threshold.
    Threshold,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
            Self::Threshold => "threshold",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "relaxed" => Ok(Self::Relaxed),
            "threshold" => Ok(Self::Threshold),
            _ => Err(format!("Unknown validation mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    Weighted,
    #[default]
    Average,
    Minimum,
    Threshold,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weighted => "weighted",
            Self::Average => "average",
            Self::Minimum => "minimum",
            Self::Threshold => "threshold",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weighted" => Ok(Self::Weighted),
            "average" => Ok(Self::Average),
            "minimum" => Ok(Self::Minimum),
            "threshold" => Ok(Self::Threshold),
            _ => Err(format!("Unknown scoring mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringSpec {
    pub mode: ScoringMode,
    /// Always in `[0, 1]`.
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSpec {
    pub name: String,
    pub priority: i64,
    pub kind: RuleKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleKind {
    Required {
        fields: Vec<String>,
        strict: bool,
    },
    Type {
        types: BTreeMap<String, String>,
        allow_coercion: bool,
    },
    Range {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
        inclusive: bool,
    },
}

impl RuleKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::Type { .. } => "type",
            Self::Range { .. } => "range",
        }
    }

    /// Human summary of the rule's constraints, used by listings.
    pub fn describe(&self) -> String {
        match self {
            Self::Required { fields, strict } => {
                format!("fields=[{}] strict={}", fields.join(", "), strict)
            }
            Self::Type {
                types,
                allow_coercion,
            } => {
                let pairs: Vec<String> = types.iter().map(|(f, t)| format!("{}:{}", f, t)).collect();
                format!("types=[{}] coercion={}", pairs.join(", "), allow_coercion)
            }
            Self::Range {
                field,
                min,
                max,
                inclusive,
            } => {
                let (open, close) = if *inclusive { ('[', ']') } else { ('(', ')') };
                let lo = min.map_or("-inf".to_string(), |v| v.to_string());
                let hi = max.map_or("+inf".to_string(), |v| v.to_string());
                format!("{} in {}{}, {}{}", field, open, lo, hi, close)
            }
        }
    }
}

/// Everything the engine needs, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedConfig {
    pub mode: ValidationMode,
    pub scoring: ScoringSpec,
    pub rules: Vec<RuleSpec>,
}

impl NormalizedConfig {
    /// Rules as the engine runs them: priority descending, ties in declaration order.
    pub fn evaluation_order(&self) -> Vec<&RuleSpec> {
        let mut ordered: Vec<&RuleSpec> = self.rules.iter().collect();
        ordered.sort_by_key(|r| std::cmp::Reverse(r.priority));
        ordered
    }
}
