//! Play subcommand handler

use std::path::Path;

use anyhow::Result;

use srtplay::player::{play_file, PlayOptions, PlaybackResult};
use srtplay::{Config, TimeOffset};

/// Play `file` interactively from `start`.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, start: TimeOffset, config: &Config) -> Result<()> {
    let options = PlayOptions::from_config(&config.player, start);
    match play_file(file, &options)? {
        PlaybackResult::Success(name) => println!("Finished: {}", name),
        PlaybackResult::Interrupted => println!("Stopped by user"),
    }
    Ok(())
}
