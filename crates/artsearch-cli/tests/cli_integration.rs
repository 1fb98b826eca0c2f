//! Integration tests for the artsearch binary.
//!
//! These only exercise paths that never reach the network.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_artsearch"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to spawn artsearch binary")
}

#[test]
fn test_help() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: artsearch"));
    assert!(stdout.contains("--config <FILE>"));
    assert!(stdout.contains("packaging"));
}

#[test]
fn test_unknown_option_is_usage_error() {
    let output = run(&["--bogus"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'--bogus'"));
}

#[test]
fn test_malformed_field_is_usage_error() {
    let output = run(&["groupId"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected FIELD=VALUE"));
}

#[test]
fn test_no_fields_prints_nothing() {
    let output = run(&[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unrecognized_field_prints_nothing() {
    let output = run(&["classes=org.example.Foo"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_config_file_fails() {
    let output = run(&["--config", "/nonexistent/artsearch.json", "name=junit"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
