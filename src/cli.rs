//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::subtitle::TimeOffset;

/// Play SRT subtitles in the terminal, in sync with the clock.
#[derive(Debug, Parser)]
#[command(name = "srtplay", version, about, long_about = None)]
pub struct Cli {
    /// Write logs to this file (overrides the config)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a subtitle file in the terminal
    #[command(long_about = "Play a subtitle file in the terminal.

Keys: Space pause, Left/Right seek, g (or right click) seek to a typed
time, Home restart, ? help, q quit.")]
    Play {
        /// Path to the .srt file
        file: PathBuf,

        /// Position to start from
        #[arg(short, long, default_value = "00:00:00,000", value_name = "HH:MM:SS,mmm")]
        start: TimeOffset,
    },

    /// Print every cue transition without waiting
    Simulate {
        /// Path to the .srt file
        file: PathBuf,

        /// Position to start from
        #[arg(short, long, default_value = "00:00:00,000", value_name = "HH:MM:SS,mmm")]
        start: TimeOffset,
    },

    /// Show which cue playback would resume from at a time
    Locate {
        /// Path to the .srt file
        file: PathBuf,

        /// Target position
        #[arg(value_name = "HH:MM:SS,mmm")]
        time: TimeOffset,
    },

    /// Show cue count and duration of a subtitle file
    Info {
        /// Path to the .srt file
        file: PathBuf,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
