use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    /// Canonical columns still absent after alias application. Fatal; no
    /// load is attempted.
    #[error(
        "Still missing expected columns after rename: {missing:?}. Available columns: {available:?}"
    )]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    /// Two different source spellings of the same canonical column are
    /// present at once; picking one silently would hide a schema drift.
    #[error("Conflicting aliases for column '{target}': {aliases:?}")]
    ConflictingAliases {
        target: String,
        aliases: Vec<String>,
    },

    /// A column name was requested that the batch does not carry.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A row was pushed with a different width than the batch header.
    #[error("Row has {actual} cells but the batch has {expected} columns")]
    RowWidth { expected: usize, actual: usize },
}
