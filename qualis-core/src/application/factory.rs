// qualis-core/src/application/factory.rs

use crate::domain::config::{RuleKind, RuleSpec};
use crate::domain::rules::{RangeValidator, RequiredFieldValidator, TypeValidator};
use crate::ports::Validator;

/// One validator per rule, in declaration order. Specs are already normalized, so this
/// cannot fail.
pub fn build_validators(rules: &[RuleSpec]) -> Vec<Box<dyn Validator>> {
    rules.iter().map(build_validator).collect()
}

pub fn build_validator(rule: &RuleSpec) -> Box<dyn Validator> {
    match &rule.kind {
        RuleKind::Required { fields, strict } => Box::new(RequiredFieldValidator::new(
            &rule.name,
            fields.clone(),
            rule.priority,
            *strict,
        )),
        RuleKind::Type {
            types,
            allow_coercion,
        } => Box::new(TypeValidator::new(
            &rule.name,
            types.clone(),
            rule.priority,
            *allow_coercion,
        )),
        RuleKind::Range {
            field,
            min,
            max,
            inclusive,
        } => Box::new(RangeValidator::new(
            &rule.name,
            field,
            *min,
            *max,
            *inclusive,
            rule.priority,
        )),
    }
}
