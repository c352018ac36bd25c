use chrono::TimeDelta;

use crate::types::ProcessState;

/// Duration thresholds applied at report time. Passed explicitly through
/// the pipeline instead of living in module-level constants.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub warn_after: TimeDelta,
    pub error_after: TimeDelta,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warn_after: TimeDelta::minutes(5),
            error_after: TimeDelta::minutes(10),
        }
    }
}

/// Report outcome for a single process. At most one flag per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessFlag {
    NotStarted { description: String },
    NotFinished { description: String },
    EndBeforeStart,
    OverErrorThreshold { elapsed: TimeDelta },
    OverWarnThreshold { elapsed: TimeDelta },
}

/// Decide which report line, if any, a process deserves.
///
/// First matching rule wins. Durations exactly at a threshold stay quiet,
/// and `end < start` is always the inversion case: times carry no date, so
/// day rollover is not modeled.
pub fn classify(state: &ProcessState, thresholds: &Thresholds) -> Option<ProcessFlag> {
    let description = || state.description.clone().unwrap_or_default();

    let start = match state.start {
        Some(start) => start,
        None => {
            return Some(ProcessFlag::NotStarted {
                description: description(),
            })
        }
    };
    let end = match state.end {
        Some(end) => end,
        None => {
            return Some(ProcessFlag::NotFinished {
                description: description(),
            })
        }
    };

    if end < start {
        return Some(ProcessFlag::EndBeforeStart);
    }

    let elapsed = end - start;
    if elapsed > thresholds.error_after {
        return Some(ProcessFlag::OverErrorThreshold { elapsed });
    }
    if elapsed > thresholds.warn_after && elapsed < thresholds.error_after {
        return Some(ProcessFlag::OverWarnThreshold { elapsed });
    }

    None
}
