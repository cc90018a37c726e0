//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the `.srt` fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture into a string.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).expect("Failed to read fixture")
}

/// Copy a fixture into a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (temp_dir, path)
}

/// Build an srtplay command isolated from the user's config.
pub fn srtplay(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_srtplay"));
    cmd.env("SRTPLAY_CONFIG", config_dir.join("config.toml"))
        .env_remove("SRTPLAY_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Run srtplay with `args` and capture output.
pub fn run_srtplay(args: &[&str]) -> (String, String, i32) {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    let output = srtplay(config_dir.path())
        .args(args)
        .output()
        .expect("Failed to execute srtplay");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Path of a fixture as a `&str`-friendly string.
pub fn fixture_arg(name: &str) -> String {
    fixtures_dir().join(name).to_string_lossy().into_owned()
}
