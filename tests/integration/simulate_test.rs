//! Integration tests for the simulate command

use super::helpers::{fixture_arg, run_srtplay};

#[test]
fn simulate_sample_from_start() {
    let (stdout, stderr, exit_code) = run_srtplay(&["simulate", &fixture_arg("sample.srt")]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    start 00:00:00,000
    +00:00:00,000 (blank)
    +00:00:01,000 [0] Hello there.
    +00:00:02,500 [1] General Kenobi!
    +00:00:03,500 [2] You are a bold one. | Second line.
    finished: 3 of 3 cues shown
    ");
}

#[test]
fn gap_between_cues_is_not_waited_for() {
    let (stdout, _stderr, exit_code) = run_srtplay(&["simulate", &fixture_arg("gap.srt")]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.contains(&"+00:00:00,000 [0] A"));
    // B follows after A's duration, not at its own start (1.5s)
    assert!(lines.contains(&"+00:00:01,000 [1] B"));
}

#[test]
fn start_inside_cue_shows_it_immediately() {
    let (stdout, _stderr, exit_code) = run_srtplay(&[
        "simulate",
        &fixture_arg("sample.srt"),
        "--start",
        "00:00:03,500",
    ]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "+00:00:00,000 [1] General Kenobi!");
    // Next change at the end of the cue in progress: 4000 - 3500
    assert_eq!(lines[2], "+00:00:00,500 [2] You are a bold one. | Second line.");
    assert_eq!(lines.last(), Some(&"finished: 2 of 3 cues shown"));
}

#[test]
fn start_after_last_cue_shows_last_cue() {
    let (stdout, _stderr, exit_code) = run_srtplay(&[
        "simulate",
        &fixture_arg("sample.srt"),
        "--start",
        "01:00:00,000",
    ]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "start 01:00:00,000",
            "+00:00:00,000 [2] You are a bold one. | Second line.",
            "finished: 1 of 3 cues shown",
        ]
    );
}

#[test]
fn simulate_empty_file_fails() {
    let (_stdout, stderr, exit_code) = run_srtplay(&["simulate", &fixture_arg("empty.srt")]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("contains no cues"));
}
