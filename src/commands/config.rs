//! Config subcommands handler

use anyhow::Result;

use srtplay::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print where the config file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration.
///
/// An existing file is left alone unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() && !force {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
