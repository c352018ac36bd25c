// crates/proclog-core/src/types.rs

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One raw line from the lifecycle log, before any validation.
///
/// All four fields are kept as text; parsing and format checks live in
/// the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub timestamp: String,
    pub description: String,
    pub marker: String,
    pub pid: String,
}

impl RawRecord {
    pub fn new(
        timestamp: impl Into<String>,
        description: impl Into<String>,
        marker: impl Into<String>,
        pid: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            description: description.into(),
            marker: marker.into(),
            pid: pid.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    Start,
    End,
}

impl Marker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Start => "START",
            Marker::End => "END",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Marker {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "START" => Ok(Marker::Start),
            "END" => Ok(Marker::End),
            other => Err(format!("unknown lifecycle marker '{other}'")),
        }
    }
}

/// A record that passed every field check, with the fields parsed into
/// their working representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub time: NaiveTime,
    pub description: String,
    pub marker: Marker,
    /// Trimmed pid text, verified to parse as an integer. It stays text
    /// because it is only ever used as a grouping key.
    pub pid: String,
}

/// Accumulated lifecycle state for one pid.
///
/// `description` keeps the first valid record's value; `start` and `end`
/// keep the last one seen for their marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessState {
    pub description: Option<String>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}
