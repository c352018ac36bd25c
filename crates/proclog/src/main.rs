use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use proclog_core::{execute_pipeline, PipelineConfig, Thresholds};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check process lifecycle logs and report stragglers", long_about = None)]
struct Cli {
    /// Path to the lifecycle log to check
    #[arg(long, default_value = "logs.log")]
    input: PathBuf,

    /// Where to write the report
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig {
        input: cli.input,
        output: cli.output,
        thresholds: Thresholds::default(),
    };

    let summary = execute_pipeline(&config)?;
    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        info!(
            records_read = summary.records_read,
            processes = summary.processes,
            flagged = summary.flagged,
            "run complete"
        );
    }
    Ok(())
}
