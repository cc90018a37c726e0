//! Integration tests for parsing, locate and info

use std::fs;
use std::rc::Rc;

use srtplay::player::playback::locate;
use srtplay::player::{ManualClock, PlaybackScheduler, PlaybackStatus};
use srtplay::subtitle::srt;
use srtplay::TimeOffset;

use super::helpers::{fixture_arg, load_fixture, run_srtplay, temp_fixture};

#[test]
fn sample_fixture_parses() {
    let track = srt::parse_str(&load_fixture("sample.srt")).unwrap();

    assert_eq!(track.len(), 3);
    assert_eq!(track[2].text, "You are a bold one.\nSecond line.");
    assert_eq!(track.total_duration(), TimeOffset::from_secs(8));
}

#[test]
fn non_utf8_file_is_decoded_lossily() {
    let (_temp_dir, path) = temp_fixture("sample.srt");
    let mut bytes = fs::read(&path).unwrap();
    // Latin-1 "é" in the last text line
    bytes.extend_from_slice(b"\n\n4\n00:00:09,000 --> 00:00:10,000\ncaf\xe9\n");
    fs::write(&path, bytes).unwrap();

    let track = srt::parse_file(&path).unwrap();
    assert_eq!(track.len(), 4);
    assert_eq!(track[3].text, "caf\u{fffd}");
}

#[test]
fn unsorted_file_is_sorted_before_playback() {
    let content = "2\n00:00:05,000 --> 00:00:06,000\nlater\n\n1\n00:00:01,000 --> 00:00:02,000\nearlier\n";
    let track = Rc::new(srt::parse_str(content).unwrap());

    assert_eq!(locate(&track, TimeOffset::from_millis(1_500)), Ok(0));

    let mut scheduler = PlaybackScheduler::new(ManualClock::new());
    scheduler.open(track, TimeOffset::ZERO).unwrap();
    let texts: Vec<String> = scheduler
        .run_to_end()
        .into_iter()
        .map(|c| c.change.text)
        .collect();
    assert_eq!(texts, vec!["earlier", "later"]);
    assert_eq!(scheduler.status(), PlaybackStatus::Finished);
}

#[test]
fn locate_reports_active_cue() {
    let (stdout, _stderr, exit_code) =
        run_srtplay(&["locate", &fixture_arg("sample.srt"), "00:00:03,250"]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "[1] 00:00:03,000 --> 00:00:04,000 (active)\n    General Kenobi!\n"
    );
}

#[test]
fn locate_in_gap_uses_search_fallback() {
    // mid=1: 5000 > 4000 → low=2; mid=2: 5000 < 6000 → range empty, last mid 2
    let (stdout, _stderr, exit_code) =
        run_srtplay(&["locate", &fixture_arg("sample.srt"), "00:00:05,000"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("[2] 00:00:06,000 --> 00:00:08,000 (upcoming)"));
}

#[test]
fn locate_empty_file_fails() {
    let (_stdout, stderr, exit_code) =
        run_srtplay(&["locate", &fixture_arg("empty.srt"), "00:00:00,000"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("contains no cues"));
}

#[test]
fn info_summarizes_sample() {
    let (stdout, _stderr, exit_code) = run_srtplay(&["info", &fixture_arg("sample.srt")]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Cues:  3"));
    assert!(stdout.contains("First: 00:00:01,000"));
    assert!(stdout.contains("Last:  00:00:08,000"));
}

#[test]
fn info_on_empty_file_reports_zero_cues() {
    let (stdout, _stderr, exit_code) = run_srtplay(&["info", &fixture_arg("empty.srt")]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Cues:  0"));
}
