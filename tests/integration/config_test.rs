//! Integration tests for the config commands

use std::fs;

use tempfile::TempDir;

use super::helpers::{fixture_arg, srtplay};

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let output = srtplay(dir.path()).args(["config", "path"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn config_show_prints_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let output = srtplay(dir.path()).args(["config", "show"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[player]"));
    assert!(stdout.contains("seek_step_secs = 5"));
    assert!(stdout.contains("level = \"warn\""));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let output = srtplay(dir.path()).args(["config", "init"]).output().unwrap();
    assert!(output.status.success());
    assert!(path.exists());

    fs::write(&path, "[player]\nseek_step_secs = 9\n").unwrap();
    let output = srtplay(dir.path()).args(["config", "init"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("already exists"));
    assert!(fs::read_to_string(&path).unwrap().contains("seek_step_secs = 9"));

    let output = srtplay(dir.path())
        .args(["config", "init", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(fs::read_to_string(&path).unwrap().contains("seek_step_secs = 5"));
}

#[test]
fn config_show_reflects_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[player]\nplaceholder = \"...\"\n",
    )
    .unwrap();

    let output = srtplay(dir.path()).args(["config", "show"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("placeholder = \"...\""));
    assert!(stdout.contains("show_status_bar = true"));
}

#[test]
fn broken_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[player\n").unwrap();

    let output = srtplay(dir.path())
        .args(["info", &fixture_arg("sample.srt")])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid config file"));
}

#[test]
fn log_file_receives_debug_output() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("srtplay.log");

    let output = srtplay(dir.path())
        .env("SRTPLAY_LOG", "srtplay=debug")
        .args([
            "simulate",
            &fixture_arg("sample.srt"),
            "--log-file",
            log_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("armed transition"));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("armed transition"));
}
