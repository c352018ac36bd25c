// crates/proclog-core/src/error.rs

use thiserror::Error;

/// Fatal failures that abort a whole run before any report is written.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("the log file {path} doesn't exist")]
    MissingInput { path: String },

    #[error("the log file {path} is empty")]
    EmptyInput { path: String },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Per-record failures. Never fatal: the offending record is skipped and
/// its pid is excluded from the final report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("line {line}: timestamp doesn't follow the HH:MM:SS format, got '{value}'")]
    InvalidTimestamp { line: usize, value: String },

    #[error("line {line}: description must be text, got numeric value '{value}'")]
    InvalidDescription { line: usize, value: String },

    #[error("line {line}: '{value}' is not a \"START\" or \"END\" marker")]
    InvalidMarker { line: usize, value: String },

    #[error("line {line}: '{value}' is not a valid PID")]
    InvalidPid { line: usize, value: String },
}

impl RecordError {
    /// 1-based line number of the record that failed validation.
    pub fn line(&self) -> usize {
        match self {
            RecordError::InvalidTimestamp { line, .. }
            | RecordError::InvalidDescription { line, .. }
            | RecordError::InvalidMarker { line, .. }
            | RecordError::InvalidPid { line, .. } => *line,
        }
    }
}
