use crate::{core::value::Value, error::SchemaError};
use serde::{Deserialize, Serialize};

/// An in-memory tabular dataset: ordered column names plus row-major cells.
/// Rows have no identity beyond their position and are immutable once read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripBatch {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl TripBatch {
    pub fn new(columns: Vec<String>) -> Self {
        TripBatch {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), SchemaError> {
        if row.len() != self.columns.len() {
            return Err(SchemaError::RowWidth {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Exact-match column lookup. Header spellings are preserved as read, so
    /// matching is case-sensitive; case variants are handled by the alias
    /// table, not here.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Rename a column in place. A no-op when `from` is absent.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(idx) = self.column_index(from) {
            self.columns[idx] = to.to_string();
        }
    }

    /// Project to exactly `columns`, in the given order, dropping any other
    /// column. Fails if a requested column is absent.
    pub fn select(&self, columns: &[&str]) -> Result<TripBatch, SchemaError> {
        let indices = columns
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| SchemaError::UnknownColumn(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(TripBatch {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> TripBatch {
        let mut batch = TripBatch::new(vec!["a".into(), "b".into(), "c".into()]);
        batch
            .push_row(vec![Value::Int(1), Value::String("x".into()), Value::Null])
            .unwrap();
        batch
            .push_row(vec![Value::Int(2), Value::String("y".into()), Value::Float(0.5)])
            .unwrap();
        batch
    }

    #[test]
    fn test_push_row_width_mismatch() {
        let mut batch = TripBatch::new(vec!["a".into()]);
        let err = batch.push_row(vec![Value::Int(1), Value::Int(2)]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::RowWidth {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_rename_column() {
        let mut batch = batch();
        batch.rename_column("b", "renamed");
        assert_eq!(batch.columns(), &["a", "renamed", "c"]);

        // Absent source is a no-op
        batch.rename_column("nope", "other");
        assert_eq!(batch.columns(), &["a", "renamed", "c"]);
    }

    #[test]
    fn test_column_lookup_is_case_sensitive() {
        let batch = batch();
        assert!(batch.has_column("a"));
        assert!(!batch.has_column("A"));
    }

    #[test]
    fn test_select_reorders_and_drops() {
        let batch = batch();
        let projected = batch.select(&["c", "a"]).unwrap();
        assert_eq!(projected.columns(), &["c", "a"]);
        assert_eq!(projected.num_rows(), 2);
        assert_eq!(projected.rows()[0], vec![Value::Null, Value::Int(1)]);
        assert_eq!(projected.rows()[1], vec![Value::Float(0.5), Value::Int(2)]);
    }

    #[test]
    fn test_select_unknown_column() {
        let batch = batch();
        let err = batch.select(&["a", "missing"]).unwrap_err();
        assert_eq!(err, SchemaError::UnknownColumn("missing".into()));
    }
}
