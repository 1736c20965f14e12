// qualis-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(qualis::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(qualis::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    // --- JSON (config or records) ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(code(qualis::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration not found at '{0}'")]
    #[diagnostic(code(qualis::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Unsupported file format for '{0}'")]
    #[diagnostic(
        code(qualis::infra::format),
        help("Use .yaml/.yml or .json for configuration files.")
    )]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(qualis::infra::input),
        help("Input must be a JSON object or an array of JSON objects.")
    )]
    InvalidInput(String),
}
