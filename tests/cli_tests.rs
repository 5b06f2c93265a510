use std::path::PathBuf;
use std::process::Command;

use fbchart::app::{self, AppError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fbchart() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fbchart"));
    command.env("FBCHART_LOG", "off");
    command
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let output = fbchart().output().expect("spawn");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "stdout: {stdout}");
}

#[test]
fn too_many_arguments_prints_usage_and_exits_1() {
    let output = fbchart()
        .arg(fixture("basic.json"))
        .arg(fixture("empty.json"))
        .output()
        .expect("spawn");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));
}

#[test]
fn missing_file_exits_1_without_rendering() {
    let missing = fixture("nope.json");
    let output = fbchart().arg(&missing).output().expect("spawn");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("does not exist"), "stdout: {stdout}");
    assert!(!stdout.contains("markers"));
}

#[test]
fn invalid_symbol_fails_with_diagnostic() {
    let output = fbchart()
        .arg(fixture("invalid_symbol.json"))
        .output()
        .expect("spawn");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid string value 'Z'"), "stderr: {stderr}");
}

#[test]
fn dump_scene_prints_composed_frame_json() {
    let output = fbchart()
        .arg(fixture("basic.json"))
        .arg("--dump-scene")
        .output()
        .expect("spawn");

    assert_eq!(output.status.code(), Some(0));
    let scene: serde_json::Value = serde_json::from_slice(&output.stdout).expect("scene json");
    assert_eq!(scene["circles"].as_array().map(Vec::len), Some(2));
    assert_eq!(scene["viewport"]["x_min"], 0.0);
    assert_eq!(scene["viewport"]["x_max"], 4.0);
}

#[test]
fn run_reports_usage_and_missing_input_as_notices() {
    let err = app::run(["fbchart"]).expect_err("no input");
    assert!(matches!(err, AppError::Usage(_)));
    assert!(err.is_notice());
    assert_eq!(err.exit_code(), 1);

    let err = app::run(["fbchart", "/definitely/not/here.json"]).expect_err("missing");
    assert!(matches!(err, AppError::MissingInput(_)));
    assert!(err.is_notice());
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn run_surfaces_schema_errors() {
    let path = fixture("not_a_list.json");
    let err = app::run([
        "fbchart".to_owned(),
        path.display().to_string(),
        "--dump-scene".to_owned(),
    ])
    .expect_err("schema");
    assert!(matches!(err, AppError::Chart(fbchart::ChartError::Schema(_))));
    assert!(!err.is_notice());
}

#[test]
fn help_is_not_an_error() {
    assert!(app::run(["fbchart", "--help"]).is_ok());
}
