//! CLI Contract Tests
//!
//! Exit codes and stdout of the `entity-table-gen` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const INPUT: &str = r#"{"&lt": {"characters": "<"}, "&lt;": {"characters": "<"}}"#;

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("entities.json");
    fs::write(&path, content).unwrap();
    path
}

fn run_cli(input: &Path, output: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_entity-table-gen"))
        .arg(input)
        .arg(output)
        .args(args)
        .env_remove("ENTITY_TABLE_FORMATTER")
        .output()
        .unwrap()
}

fn stdout_report(out: &Output) -> Value {
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn cli_no_format_writes_table() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("entities.mbt");

    let out = run_cli(&input, &output, &["--no-format", "--regen-hint", "moon build"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("/// To regenerate, run `moon build`.\n"));
    assert!(text.ends_with("\"lt\": \"<\",\n}\n"));
}

#[test]
fn cli_json_report_on_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("entities.mbt");

    let out = run_cli(&input, &output, &["--no-format", "--json"]);

    assert_eq!(out.status.code(), Some(0));
    let report = stdout_report(&out);
    assert_eq!(report["entities_total"], 2);
    assert_eq!(report["entities_emitted"], 1);
    assert_eq!(report["entities_skipped"], 1);
    assert_eq!(report["formatter"]["status"], "skipped");
    assert_eq!(report["sha256"].as_str().unwrap().len(), 64);
}

#[test]
fn cli_missing_input_exits_one() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("entities.mbt");

    let out = run_cli(&dir.path().join("absent.json"), &output, &["--no-format"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn cli_data_error_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, r#"{"&lt;": {"codepoints": [60]}}"#);
    let output = dir.path().join("entities.mbt");

    let out = run_cli(&input, &output, &["--no-format"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn cli_unwritable_output_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("no-such-dir").join("entities.mbt");

    let out = run_cli(&input, &output, &["--no-format"]);

    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn cli_blank_formatter_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("entities.mbt");

    let out = run_cli(&input, &output, &["--formatter", " "]);

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn cli_missing_formatter_exits_zero() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("entities.mbt");

    let out = run_cli(&input, &output, &["--formatter", "entity-table-no-such-formatter", "--json"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_report(&out)["formatter"]["status"], "not_found");
    assert!(output.exists());
}

#[cfg(unix)]
#[test]
fn cli_failing_formatter_exits_zero() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("entities.mbt");

    let out = run_cli(&input, &output, &["--formatter", "false", "--json"]);

    assert_eq!(out.status.code(), Some(0));
    let report = stdout_report(&out);
    assert_eq!(report["formatter"]["status"], "failed");
    assert_eq!(report["formatter"]["code"], 1);
}

#[cfg(unix)]
#[test]
fn cli_formatter_gets_in_place_flag_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("entities.mbt");

    // echo writes its arguments to the inherited stdout
    let out = run_cli(&input, &output, &["--formatter", "echo"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!("-w {}\n", output.display())
    );
}

#[cfg(unix)]
#[test]
fn cli_formatter_arg_replaces_default() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("entities.mbt");

    let out = run_cli(
        &input,
        &output,
        &["--formatter", "echo", "--formatter-arg", "--check"],
    );

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!("--check {}\n", output.display())
    );
}
