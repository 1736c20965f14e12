// qualis-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid scoring threshold: {0}")]
    #[diagnostic(
        code(qualis::domain::threshold),
        help("Use a fraction in [0, 1] (e.g. 0.85) or a percentage in (1, 100] (e.g. 85).")
    )]
    InvalidThreshold(String),

    #[error("Rule '{rule}' is invalid: {reason}")]
    #[diagnostic(code(qualis::domain::rule))]
    InvalidRule { rule: String, reason: String },

    #[error("Configuration rejected: {0}")]
    #[diagnostic(
        code(qualis::domain::config),
        help("Every rule needs a non-empty 'type'; 'name' may be omitted but not empty.")
    )]
    InvalidConfig(String),
}
