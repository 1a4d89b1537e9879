use crate::{
    error::SchemaError,
    records::batch::TripBatch,
    schema::canonical::{CANONICAL_COLUMNS, COLUMN_ALIASES},
};

/// Bring a freshly read batch onto the canonical schema: apply the alias
/// table, verify every expected column is present, then project to exactly
/// the canonical columns in order. Extra columns are dropped silently; a
/// missing column aborts before any write happens downstream.
pub fn normalize(batch: TripBatch) -> Result<TripBatch, SchemaError> {
    let batch = apply_aliases(batch)?;

    let missing = missing_columns(&batch);
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns {
            missing,
            available: batch.columns().to_vec(),
        });
    }

    batch.select(&CANONICAL_COLUMNS)
}

/// Rename every present alias source to its canonical name. The table is
/// conflict-free by construction, so application order does not matter; a
/// dataset carrying two different spellings of the same canonical column is
/// rejected up front.
pub fn apply_aliases(mut batch: TripBatch) -> Result<TripBatch, SchemaError> {
    for target in CANONICAL_COLUMNS {
        let present: Vec<String> = COLUMN_ALIASES
            .iter()
            .filter(|(src, tgt)| *tgt == target && batch.has_column(src))
            .map(|(src, _)| src.to_string())
            .collect();
        if present.len() > 1 {
            return Err(SchemaError::ConflictingAliases {
                target: target.to_string(),
                aliases: present,
            });
        }
    }

    for (src, tgt) in COLUMN_ALIASES {
        if src != tgt {
            batch.rename_column(src, tgt);
        }
    }
    Ok(batch)
}

/// Canonical columns the batch does not carry, in canonical order.
pub fn missing_columns(batch: &TripBatch) -> Vec<String> {
    CANONICAL_COLUMNS
        .iter()
        .filter(|col| !batch.has_column(col))
        .map(|col| col.to_string())
        .collect()
}
