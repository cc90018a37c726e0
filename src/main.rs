//! srtplay - terminal subtitle player

mod commands;

use std::sync::OnceLock;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};

use srtplay::cli::{Cli, Commands, ConfigCommands};
use srtplay::logging::{self, LogTarget};
use srtplay::Config;

/// Version plus build metadata for `--version`.
fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let mut version = env!("CARGO_PKG_VERSION").to_string();
        if let Some(sha) = option_env!("VERGEN_GIT_SHA").filter(|sha| *sha != "unknown") {
            let short = sha.get(..7).unwrap_or(sha);
            version.push_str(&format!(" ({})", short));
        }
        version.push_str(&format!("\nbuilt {}", env!("SRTPLAY_BUILD_DATE")));
        version
    })
}

fn main() -> Result<()> {
    let matches = Cli::command().long_version(long_version()).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let config = Config::load()?;

    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    let target = match (&cli.command, log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        // The player owns the terminal
        (Commands::Play { .. }, None) => LogTarget::Disabled,
        _ => LogTarget::Stderr,
    };
    logging::init(target, &config.logging.level)?;

    match cli.command {
        Commands::Play { file, start } => commands::play::handle(&file, start, &config),
        Commands::Simulate { file, start } => commands::simulate::handle(&file, start),
        Commands::Locate { file, time } => commands::inspect::handle_locate(&file, time),
        Commands::Info { file } => commands::inspect::handle_info(&file),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
