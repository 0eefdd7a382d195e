// Integration tests for the climate-report CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and written report files.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the climate-report binary.
fn climate_report() -> Command {
    Command::cargo_bin("climate-report").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    climate_report()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("climate-report"));
}

#[test]
fn cli_help_flag() {
    climate_report()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Code Climate"));
}

#[test]
fn verbose_and_quiet_conflict() {
    climate_report()
        .args(["-v", "-q", "-"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn empty_stdin_results_print_empty_array() {
    climate_report()
        .arg("-")
        .write_stdin("[]")
        .assert()
        .code(0)
        .stdout("[]\n");
}
