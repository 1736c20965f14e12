// qualis-core/src/domain/config/mod.rs

pub mod normalize;
pub mod raw;
pub mod spec;

pub use normalize::normalize;
pub use raw::{RawPriority, RawRuleConfig, RawScoringConfig, RawThreshold, RawValidationConfig};
pub use spec::{NormalizedConfig, RuleKind, RuleSpec, ScoringMode, ScoringSpec, ValidationMode};
