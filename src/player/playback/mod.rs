//! Playback logic for the player.
//!
//! This module handles mapping playback positions to cues.

mod seeking;

pub use seeking::locate;
