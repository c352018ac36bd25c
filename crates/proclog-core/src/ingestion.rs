use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::types::RawRecord;

const RECORD_FIELDS: usize = 4;

/// Read the raw log into 1-based numbered records.
///
/// Fails before yielding anything if the file is missing or empty. Rows
/// that don't carry all four fields, or carry a blank one, never reach
/// validation: they are dropped here, so their pids stay out of the
/// rejection set.
pub fn read_log(path: &Path) -> Result<Vec<(usize, RawRecord)>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(PipelineError::MissingInput {
                path: path.display().to_string(),
            });
        }
        Err(err) => return Err(err.into()),
    };
    if metadata.len() == 0 {
        return Err(PipelineError::EmptyInput {
            path: path.display().to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let line = index + 1;
        let row = result?;
        if row.len() < RECORD_FIELDS || row.iter().take(RECORD_FIELDS).any(str::is_empty) {
            debug!("line {line}: dropped row with missing fields");
            continue;
        }
        records.push((
            line,
            RawRecord::new(&row[0], &row[1], &row[2], &row[3]),
        ));
    }

    Ok(records)
}
