//! Tracing subscriber setup.
//!
//! The filter comes from `SRTPLAY_LOG` when set, otherwise from the
//! configured level. The interactive player owns the terminal, so it logs to
//! a file or not at all.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SRTPLAY_LOG";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber is installed
    Disabled,
}

/// Build the filter: `SRTPLAY_LOG` wins over `default_level`.
pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("Invalid log level: {:?}", default_level)),
    }
}

/// Install the global subscriber.
pub fn init(target: LogTarget<'_>, default_level: &str) -> Result<()> {
    let filter = build_filter(default_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {:?}", path))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
