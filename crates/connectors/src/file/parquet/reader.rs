//! Parquet file reader producing an in-memory trip batch.

use crate::file::{error::FileError, parquet::conversion::record_batch_to_rows};
use model::records::batch::TripBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::{fs::File, path::Path};
use tracing::info;

/// Read the whole dataset at `path` into memory. No schema is assumed
/// beyond "has named columns"; validation happens later against the
/// canonical column set.
pub fn read_trip_batch(path: &Path) -> Result<TripBatch, FileError> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|field| field.name().clone())
        .collect();
    let mut batch = TripBatch::new(columns);

    let reader = builder.build()?;
    for record_batch in reader {
        let record_batch = record_batch?;
        for row in record_batch_to_rows(&record_batch)? {
            batch.push_row(row)?;
        }
    }

    info!(
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        path = %path.display(),
        "Read curated trip dataset"
    );
    Ok(batch)
}
