//! Component A: read the curated dataset, bring it onto the canonical
//! schema, and replace the target table's contents.

use crate::error::PipelineError;
use connectors::{file::parquet::reader::read_trip_batch, sql::destination::TripDestination};
use model::{records::batch::TripBatch, schema::normalize::normalize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct LoadArgs {
    pub source_path: PathBuf,
    pub target_table: String,
}

#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub rows_loaded: u64,
    pub source_path: PathBuf,
    pub target_table: String,
}

pub async fn run_load<D: TripDestination>(
    destination: &D,
    args: &LoadArgs,
) -> Result<LoadSummary, PipelineError> {
    let batch = read_trip_batch(&args.source_path)?;
    load_batch(destination, batch, args).await
}

/// Normalize and load an already-read batch. Validation happens before any
/// write: a schema mismatch leaves the target table untouched. The write is
/// two explicit operations, truncate then append, so the table keeps its
/// structure across loads.
pub async fn load_batch<D: TripDestination>(
    destination: &D,
    batch: TripBatch,
    args: &LoadArgs,
) -> Result<LoadSummary, PipelineError> {
    let batch = normalize(batch)?;

    destination.truncate(&args.target_table).await?;
    let rows_loaded = destination.append(&args.target_table, &batch).await?;

    info!(
        rows = rows_loaded,
        source = %args.source_path.display(),
        table = %args.target_table,
        "Loaded curated trips"
    );

    Ok(LoadSummary {
        rows_loaded,
        source_path: args.source_path.clone(),
        target_table: args.target_table.clone(),
    })
}
