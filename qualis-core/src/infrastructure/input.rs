// qualis-core/src/infrastructure/input.rs

use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::record::{Record, record_from_json};
use crate::infrastructure::error::InfrastructureError;

/// Loads records from a JSON file holding one object or an array of objects.
#[instrument]
pub fn load_records(path: &Path) -> Result<Vec<Record>, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    let records = parse_records(&content)?;
    info!(path = ?path, records = records.len(), "Records loaded");
    Ok(records)
}

pub fn parse_records(content: &str) -> Result<Vec<Record>, InfrastructureError> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                record_from_json(item).ok_or_else(|| {
                    InfrastructureError::InvalidInput(format!("element {} is not an object", i))
                })
            })
            .collect(),
        object @ serde_json::Value::Object(_) => Ok(record_from_json(object).into_iter().collect()),
        other => Err(InfrastructureError::InvalidInput(format!(
            "expected an object or an array, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::record::FieldValue;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_single_object() -> Result<()> {
        let records = parse_records(r#"{"id": 1, "name": "x"}"#)?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], FieldValue::Integer(1));
        Ok(())
    }

    #[test]
    fn test_array_of_objects() -> Result<()> {
        let records = parse_records(r#"[{"id": 1}, {"id": null}, {}]"#)?;
        assert_eq!(records.len(), 3);
        assert!(records[1]["id"].is_null());
        assert!(!records[2].contains_key("id"));
        Ok(())
    }

    #[test]
    fn test_rejects_scalars_and_mixed_arrays() {
        assert!(matches!(
            parse_records("42"),
            Err(InfrastructureError::InvalidInput(msg)) if msg.contains("a number")
        ));
        assert!(matches!(
            parse_records(r#"[{"id": 1}, "oops"]"#),
            Err(InfrastructureError::InvalidInput(msg)) if msg.contains("element 1")
        ));
        assert!(matches!(
            parse_records("{not json"),
            Err(InfrastructureError::JsonError(_))
        ));
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("records.json");
        std::fs::write(&path, r#"[{"id": 1}, {"id": 2}]"#)?;
        assert_eq!(load_records(&path)?.len(), 2);
        Ok(())
    }
}
