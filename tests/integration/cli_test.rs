//! Integration tests for CLI parsing, help and error reporting

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{fixture_arg, run_srtplay};

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_srtplay(&["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["play", "simulate", "locate", "info", "config", "completions"] {
        assert!(stdout.contains(name), "help should mention {}", name);
    }
}

#[test]
fn play_help_documents_keys() {
    let (stdout, _stderr, exit_code) = run_srtplay(&["play", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("<FILE>"));
    assert!(stdout.contains("--start"));
    assert!(stdout.contains("right click"));
}

#[test]
fn version_shows_package_version() {
    Command::new(env!("CARGO_BIN_EXE_srtplay"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_for_bash() {
    let (stdout, _stderr, exit_code) = run_srtplay(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("srtplay"));
    assert!(stdout.contains("simulate"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn missing_file_argument_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_srtplay(&["info"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<FILE>"));
}

#[test]
fn invalid_start_time_is_rejected() {
    let (_stdout, stderr, exit_code) =
        run_srtplay(&["simulate", &fixture_arg("sample.srt"), "--start", "1:2"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Invalid time"));
}

#[test]
fn nonexistent_file_fails() {
    let (_stdout, stderr, exit_code) = run_srtplay(&["info", "/nonexistent/movie.srt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to open file"));
}

#[test]
fn malformed_timing_reports_line() {
    let (_stdout, stderr, exit_code) = run_srtplay(&["info", &fixture_arg("malformed.srt")]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid cue timing on line 2"));
}

#[test]
fn play_empty_file_fails_without_touching_terminal() {
    Command::new(env!("CARGO_BIN_EXE_srtplay"))
        .env("SRTPLAY_CONFIG", "/nonexistent/srtplay/config.toml")
        .args(["play", &fixture_arg("empty.srt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains no cues"));
}
