use std::fs;
use std::path::Path;

use chrono::TimeDelta;

use crate::aggregation::ProcessMap;
use crate::classifier::{classify, ProcessFlag, Thresholds};
use crate::error::Result;

/// Render one report line per flagged process, in map order. Processes
/// whose duration stays inside the quiet window produce nothing.
pub fn render(processes: &ProcessMap, thresholds: &Thresholds) -> Vec<String> {
    processes
        .iter()
        .filter_map(|(pid, state)| classify(state, thresholds).map(|flag| format_line(pid, &flag)))
        .collect()
}

pub fn format_line(pid: &str, flag: &ProcessFlag) -> String {
    match flag {
        ProcessFlag::NotStarted { description } => {
            format!("The \"{description}\" with PID {pid} hasn't started yet.")
        }
        ProcessFlag::NotFinished { description } => {
            format!("The \"{description}\" with PID {pid} hasn't finished yet.")
        }
        ProcessFlag::EndBeforeStart => {
            format!("The process {pid} has the \"END\" process before the \"START\" process.")
        }
        ProcessFlag::OverErrorThreshold { elapsed } => format!(
            "Error: The process {pid} took more than 10 minutes to finish. Actual time: {}.",
            format_elapsed(*elapsed)
        ),
        ProcessFlag::OverWarnThreshold { elapsed } => format!(
            "Warning: The process {pid} took more than 5 minutes to finish. Actual time: {}.",
            format_elapsed(*elapsed)
        ),
    }
}

/// Elapsed wall-clock time as `H:MM:SS`, hours unpadded.
fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

/// Write the report to its sink. An unflagged run leaves an empty file.
pub fn write_report(path: &Path, lines: &[String]) -> Result<()> {
    let mut body = lines.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    fs::write(path, body)?;
    Ok(())
}
