use std::path::Path;

use log::info;

use crate::error::GenError;
use crate::record::{TransactionRecord, COLUMNS};

pub const DEFAULT_OUTPUT_FILE: &str = "mock_transactions.csv";

/// Writes the batch to a CSV file at `path`, header row first, one row per
/// record in batch order. Creates or overwrites the file. The header is
/// written even when the batch is empty.
///
/// # Errors
/// Errors when the file cannot be created or a record cannot be written.
pub fn write_csv<P: AsRef<Path>>(path: P, records: &[TransactionRecord]) -> Result<(), GenError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!("Wrote {} records", records.len());

    Ok(())
}
