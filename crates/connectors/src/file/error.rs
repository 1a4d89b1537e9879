use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    /// I/O failure opening or reading the source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parquet-level failure (corrupt footer, bad metadata, ...).
    #[error("Parquet error: {0}")]
    Parquet(#[from] ::parquet::errors::ParquetError),

    /// Arrow-level failure while decoding record batches.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// The file carries a column type the loader cannot represent.
    #[error("Unsupported type {data_type} in column '{column}'")]
    UnsupportedType { column: String, data_type: String },

    /// A cell could not be converted to its target representation.
    #[error("Conversion error in column '{column}': {message}")]
    Conversion { column: String, message: String },

    /// The decoded rows disagreed with the file schema.
    #[error("Schema error: {0}")]
    Schema(#[from] model::error::SchemaError),
}
