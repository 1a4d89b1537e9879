use model::core::{utils::escape_copy_text, value::Value};

/// Encodes cells for the COPY text format (tab-delimited, `\N` null).
pub struct PgCopyValueEncoder;

impl PgCopyValueEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode_value(&self, value: &Value) -> String {
        match value {
            Value::Null => self.encode_null(),
            Value::String(s) => escape_copy_text(s),
            Value::Boolean(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => ryu::Buffer::new().format(*v).to_string(),
            Value::Date(d) => d.to_string(),
            Value::Timestamp(ts) => ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
        }
    }

    pub fn encode_null(&self) -> String {
        r"\N".to_string()
    }
}

impl Default for PgCopyValueEncoder {
    fn default() -> Self {
        Self::new()
    }
}
