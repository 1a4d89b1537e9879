pub mod error;
pub mod parquet;
