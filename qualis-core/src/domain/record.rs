// qualis-core/src/domain/record.rs

use std::collections::BTreeMap;
use std::fmt;

/// A record under validation: field name -> value.
/// A field that is not a key of the map is "absent", which is distinct from `FieldValue::Null`.
pub type Record = BTreeMap<String, FieldValue>;

/// Closed set of value shapes a record can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl FieldValue {
    /// Runtime type name used by the loose type match ("int" matches "integer", etc.).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "double",
            Self::String(_) => "string",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric reading of the value. Strings are trimmed then parsed; non-finite results
    /// (`NaN`, `inf`) and booleans are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Integer(i) => *i as f64,
            Self::Float(f) => *f,
            Self::String(s) => s.trim().parse::<f64>().ok()?,
            Self::Null | Self::Boolean(_) => return None,
        };
        n.is_finite().then_some(n)
    }
}

// Floats always keep a fractional part ("3.0", not "3") so that an integer coercion of a
// float never silently succeeds.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            Value::String(s) => Self::String(s),
            // Compound values are outside the closed union: keep their JSON text.
            compound @ (Value::Array(_) | Value::Object(_)) => Self::String(compound.to_string()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// Converts a JSON object into a record. Returns `None` for any other JSON shape.
pub fn record_from_json(value: serde_json::Value) -> Option<Record> {
    match value {
        serde_json::Value::Object(map) => Some(
            map.into_iter()
                .map(|(k, v)| (k, FieldValue::from(v)))
                .collect(),
        ),
        _ => None,
    }
}

/// Test/embedding helper: `record! { "id" => 1, "name" => "x" }`.
#[macro_export]
macro_rules! record {
    () => { $crate::domain::record::Record::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut r = $crate::domain::record::Record::new();
        $( r.insert($key.to_string(), $crate::domain::record::FieldValue::from($value)); )+
        r
    }};
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_conversion_covers_every_shape() {
        let record = record_from_json(json!({
            "id": 42,
            "ratio": 0.5,
            "name": "alice",
            "active": true,
            "deleted_at": null,
            "tags": ["a", "b"]
        }))
        .unwrap();

        assert_eq!(record["id"], FieldValue::Integer(42));
        assert_eq!(record["ratio"], FieldValue::Float(0.5));
        assert_eq!(record["name"], FieldValue::String("alice".into()));
        assert_eq!(record["active"], FieldValue::Boolean(true));
        assert!(record["deleted_at"].is_null());
        assert_eq!(record["tags"], FieldValue::String(r#"["a","b"]"#.into()));
    }

    #[test]
    fn test_non_object_is_not_a_record() {
        assert!(record_from_json(json!([1, 2])).is_none());
        assert!(record_from_json(json!("id")).is_none());
    }

    #[test]
    fn test_numeric_reading() {
        assert_eq!(FieldValue::from(7).as_number(), Some(7.0));
        assert_eq!(FieldValue::from(" 3.5 ").as_number(), Some(3.5));
        assert_eq!(FieldValue::from("abc").as_number(), None);
        assert_eq!(FieldValue::from("NaN").as_number(), None);
        assert_eq!(FieldValue::from(true).as_number(), None);
        assert_eq!(FieldValue::Null.as_number(), None);
    }

    #[test]
    fn test_float_display_keeps_fraction() {
        assert_eq!(FieldValue::from(3.0).to_string(), "3.0");
        assert_eq!(FieldValue::from(12).to_string(), "12");
    }

    #[test]
    fn test_record_macro() {
        let r = record! { "id" => 1, "name" => "x" };
        assert_eq!(r.len(), 2);
        assert_eq!(r["name"], FieldValue::String("x".into()));
    }
}
