//! Integration tests for srtplay

mod cli_test;
mod config_test;
mod helpers;
mod simulate_test;
mod track_test;
