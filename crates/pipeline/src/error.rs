use connectors::{
    file::error::FileError,
    sql::error::{ConnectorError, DbError},
};
use model::error::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Expected columns absent or ambiguous after alias application. Always
    /// fatal, never retried; raised before any write.
    #[error("Schema mismatch: {0}")]
    Schema(#[from] SchemaError),

    #[error("Failed to read source dataset: {0}")]
    File(#[from] FileError),

    #[error("Failed to connect to the database: {0}")]
    Connector(#[from] ConnectorError),

    /// Write or execution failure from the database driver, propagated
    /// untouched.
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read SQL script {path}: {source}")]
    ScriptRead {
        path: String,
        source: std::io::Error,
    },
}
