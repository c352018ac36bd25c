// crates/proclog-core/src/validation.rs

use chrono::NaiveTime;

use crate::error::RecordError;
use crate::types::{LogRecord, Marker, RawRecord};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Check every field of a raw record, short-circuiting on the first
/// failure. A passing record comes back with its fields parsed.
pub fn validate(record: &RawRecord, line: usize) -> Result<LogRecord, RecordError> {
    let time = parse_time(&record.timestamp, line)?;
    let description = parse_description(&record.description, line)?;
    let marker = parse_marker(&record.marker, line)?;
    let pid = parse_pid(&record.pid, line)?;

    Ok(LogRecord {
        time,
        description,
        marker,
        pid,
    })
}

fn parse_time(value: &str, line: usize) -> Result<NaiveTime, RecordError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| RecordError::InvalidTimestamp {
        line,
        value: value.to_string(),
    })
}

/// The log carries descriptions as free text. A cell that parses cleanly
/// as a number is a stray value in the description column, not text.
fn parse_description(value: &str, line: usize) -> Result<String, RecordError> {
    if value.trim().parse::<f64>().is_ok() {
        return Err(RecordError::InvalidDescription {
            line,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

fn parse_marker(value: &str, line: usize) -> Result<Marker, RecordError> {
    Marker::try_from(value).map_err(|_| RecordError::InvalidMarker {
        line,
        value: value.trim().to_string(),
    })
}

fn parse_pid(value: &str, line: usize) -> Result<String, RecordError> {
    let trimmed = value.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidPid {
            line,
            value: value.to_string(),
        })?;
    Ok(trimmed.to_string())
}
