//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod inspect;
pub mod play;
pub mod simulate;
