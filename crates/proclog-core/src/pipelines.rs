use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::aggregation::aggregate;
use crate::classifier::Thresholds;
use crate::error::Result;
use crate::ingestion::read_log;
use crate::report::{render, write_report};

/// Everything one run needs: the two resource names plus the duration
/// thresholds.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub thresholds: Thresholds,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("logs.log"),
            output: PathBuf::from("output.txt"),
            thresholds: Thresholds::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub records_read: usize,
    pub processes: usize,
    pub flagged: usize,
}

/// Run the whole pipeline: read, aggregate, classify, write the report.
///
/// The entire input is validated before any output is produced; a fatal
/// precondition leaves the output untouched.
pub fn execute_pipeline(config: &PipelineConfig) -> Result<PipelineSummary> {
    let records = read_log(&config.input)?;
    let records_read = records.len();

    let processes = aggregate(records);
    let lines = render(&processes, &config.thresholds);
    write_report(&config.output, &lines)?;

    let summary = PipelineSummary {
        records_read,
        processes: processes.len(),
        flagged: lines.len(),
    };
    info!(
        records_read = summary.records_read,
        processes = summary.processes,
        flagged = summary.flagged,
        "report written"
    );
    Ok(summary)
}
