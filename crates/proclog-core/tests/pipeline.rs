use std::fs;
use std::path::{Path, PathBuf};

use proclog_core::{execute_pipeline, PipelineConfig, PipelineError, Thresholds};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn output_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn end_to_end_run_writes_expected_report() {
    let output = output_path("proclog_pipeline_e2e.txt");
    let config = PipelineConfig {
        input: fixture_path("sample.log"),
        output: output.clone(),
        thresholds: Thresholds::default(),
    };

    let summary = execute_pipeline(&config).expect("pipeline should run");

    // Nine raw records; pid 606 is purged for its bad marker.
    assert_eq!(summary.records_read, 9);
    assert_eq!(summary.processes, 5);
    assert_eq!(summary.flagged, 4);

    let report = fs::read_to_string(&output).expect("report file should exist");
    assert_eq!(
        report,
        "Warning: The process 202 took more than 5 minutes to finish. Actual time: 0:06:30.\n\
         Error: The process 303 took more than 10 minutes to finish. Actual time: 0:18:00.\n\
         The \"mail queue flush\" with PID 404 hasn't finished yet.\n\
         The \"report compaction\" with PID 505 hasn't started yet.\n"
    );

    fs::remove_file(&output).ok();
}

#[test]
fn rerunning_the_same_input_is_idempotent() {
    let first_output = output_path("proclog_pipeline_idem_1.txt");
    let second_output = output_path("proclog_pipeline_idem_2.txt");

    for output in [&first_output, &second_output] {
        let config = PipelineConfig {
            input: fixture_path("sample.log"),
            output: (*output).clone(),
            thresholds: Thresholds::default(),
        };
        execute_pipeline(&config).expect("pipeline should run");
    }

    let first = fs::read_to_string(&first_output).expect("first report");
    let second = fs::read_to_string(&second_output).expect("second report");
    assert_eq!(first, second);

    fs::remove_file(&first_output).ok();
    fs::remove_file(&second_output).ok();
}

#[test]
fn missing_input_aborts_before_writing_any_output() {
    let output = output_path("proclog_pipeline_missing.txt");
    fs::remove_file(&output).ok();

    let config = PipelineConfig {
        input: fixture_path("absent.log"),
        output: output.clone(),
        thresholds: Thresholds::default(),
    };

    match execute_pipeline(&config) {
        Err(PipelineError::MissingInput { .. }) => {}
        other => panic!("expected MissingInput error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn empty_input_aborts_before_writing_any_output() {
    let output = output_path("proclog_pipeline_empty.txt");
    fs::remove_file(&output).ok();

    let config = PipelineConfig {
        input: fixture_path("empty.log"),
        output: output.clone(),
        thresholds: Thresholds::default(),
    };

    match execute_pipeline(&config) {
        Err(PipelineError::EmptyInput { .. }) => {}
        other => panic!("expected EmptyInput error, got {other:?}"),
    }
    assert!(!output.exists());
}
