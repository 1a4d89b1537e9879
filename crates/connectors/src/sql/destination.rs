use crate::sql::error::DbError;
use async_trait::async_trait;
use model::records::batch::TripBatch;

/// Write side of the load target. Truncate and append are deliberately two
/// separate operations: truncating keeps the table's structure, indexes and
/// constraints, where an overwrite-style drop/recreate would not.
#[async_trait]
pub trait TripDestination: Send + Sync {
    /// Empty the table's rows while preserving its structure.
    async fn truncate(&self, table: &str) -> Result<(), DbError>;

    /// Append every row of the batch, returning the count written.
    async fn append(&self, table: &str, batch: &TripBatch) -> Result<u64, DbError>;
}

/// Executes an opaque SQL payload as one statement batch. Statements run
/// outside any explicit transaction, so effects commit as they complete.
#[async_trait]
pub trait ScriptExecutor: Send + Sync {
    async fn execute_batch(&self, sql: &str) -> Result<(), DbError>;
}
