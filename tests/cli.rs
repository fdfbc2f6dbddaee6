//! Tests for the `remainder-fsm` binary
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::process::{Command, Output};

use remainder_fsm::FsmDefinition;

fn remainder_fsm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_remainder-fsm"))
        .args(args)
        .env("LOG_LEVEL", "off")
        .output()
        .expect("Failed to run remainder-fsm")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not valid UTF-8")
}

#[test]
fn remainder_prints_each_input() {
    let output = remainder_fsm(&["remainder", "1010", "1111"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        ">> Input: 1010, Remainder: 1\n>> Input: 1111, Remainder: 0\n"
    );
}

#[test]
fn remainder_uses_sample_inputs_by_default() {
    let output = remainder_fsm(&["remainder"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        ">> Input: 110, Remainder: 0\n>> Input: 1010, Remainder: 1\n"
    );
}

#[test]
fn remainder_reports_errors_and_continues() {
    let output = remainder_fsm(&["remainder", "102", "11"]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), ">> Input: 11, Remainder: 0\n");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains(">> Input: 102, Error: Invalid character '2' at position 2"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn dump_prints_a_loadable_definition() {
    let output = remainder_fsm(&["dump"]);
    assert!(output.status.success());

    let definition = FsmDefinition::from_toml_str(&stdout(&output)).unwrap();
    assert_eq!(definition, FsmDefinition::remainder());
}

#[test]
fn run_loads_a_definition_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remainder.toml");
    std::fs::write(&path, FsmDefinition::remainder().to_toml_string().unwrap()).unwrap();

    let output = remainder_fsm(&[
        "run",
        "--definition",
        path.to_str().unwrap(),
        "1010",
        "",
        "12",
    ]);

    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        ">> Input: 1010, State: S1, accepted\n>> Input: , State: S0, accepted\n"
    );
    assert!(String::from_utf8(output.stderr).unwrap().contains("Symbol 2 not in input alphabet"));
}

#[test]
fn run_fails_for_missing_definition() {
    let output = remainder_fsm(&["run", "--definition", "/nonexistent/machine.toml", "1"]);

    assert!(!output.status.success());
}
