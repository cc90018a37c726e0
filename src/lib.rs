//! srtplay - terminal subtitle player
//!
//! Parses SRT subtitle files and shows each cue in sync with the wall
//! clock, with seeking by keys or by typed timestamp.
//!
//! The core is [`player::PlaybackScheduler`], which walks a
//! [`subtitle::CueTrack`] by chaining one timer per cue transition, and
//! [`player::playback::locate`], which finds the cue to resume from after a
//! seek.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod player;
pub mod subtitle;

pub use config::Config;
pub use error::PlayerError;
pub use subtitle::{Cue, CueTrack, TimeOffset};
