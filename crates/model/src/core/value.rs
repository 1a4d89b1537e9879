use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single cell of a trip batch. Timestamps are timezone-naive because the
/// upstream TLC datetimes carry no zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::String(v) => Some(v.clone()),
            Value::Boolean(v) => Some(v.to_string()),
            Value::Date(v) => Some(v.to_string()),
            Value::Timestamp(v) => Some(v.format("%Y-%m-%d %H:%M:%S%.6f").to_string()),
            Value::Null => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Int(0).is_null());
    }

    #[test]
    fn test_as_string() {
        assert_eq!(Value::Int(42).as_string(), Some("42".to_string()));
        assert_eq!(Value::Boolean(false).as_string(), Some("false".to_string()));
        assert_eq!(Value::Null.as_string(), None);

        let ts: NaiveDateTime = "2022-01-01T12:00:00".parse().unwrap();
        assert_eq!(
            Value::Timestamp(ts).as_string(),
            Some("2022-01-01 12:00:00.000000".to_string())
        );
    }
}
