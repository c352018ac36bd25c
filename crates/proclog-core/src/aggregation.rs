use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use crate::types::{Marker, ProcessState, RawRecord};
use crate::validation::validate;

/// Per-pid lifecycle state, keyed by trimmed pid text. A BTreeMap keeps
/// report order deterministic for a fixed input.
pub type ProcessMap = BTreeMap<String, ProcessState>;

/// Fold numbered records into per-pid lifecycle state.
///
/// Accumulation and rejection run as two phases: an invalid record can
/// arrive after valid ones for the same pid, so rejected pids are purged
/// only once the whole stream has been folded.
pub fn aggregate<I>(records: I) -> ProcessMap
where
    I: IntoIterator<Item = (usize, RawRecord)>,
{
    let mut processes = ProcessMap::new();
    let mut rejected: HashSet<String> = HashSet::new();

    for (line, record) in records {
        let parsed = match validate(&record, line) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("{err}");
                rejected.insert(record.pid.trim().to_string());
                continue;
            }
        };

        let state = processes.entry(parsed.pid).or_default();
        if state.description.is_none() {
            state.description = Some(parsed.description);
        }
        match parsed.marker {
            Marker::Start => state.start = Some(parsed.time),
            Marker::End => state.end = Some(parsed.time),
        }
    }

    for pid in &rejected {
        processes.remove(pid);
    }

    processes
}
