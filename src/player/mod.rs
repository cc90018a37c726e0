//! Subtitle player
//!
//! Schedules cue transitions against a timer and presents them in the
//! terminal.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `clock`: the `Timer` capability (`DeadlineTimer` for real time, `ManualClock` for tests)
//! - `playback/`: cue lookup for seeking
//! - `scheduler`: `PlaybackScheduler`, the timer-chained cue walker
//! - `state`: PlayerState struct and shared types (Playhead, SeekPrompt, InputResult)
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (subtitle text, status bar, seek prompt, help)
//!
//! # Usage
//!
//! ```no_run
//! use srtplay::player::{play_file, PlayOptions, PlaybackResult};
//! use std::path::Path;
//!
//! let result = play_file(Path::new("movie.srt"), &PlayOptions::default()).unwrap();
//! match result {
//!     PlaybackResult::Success(name) => println!("Finished: {}", name),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//! }
//! ```

pub mod clock;
pub(crate) mod input;
mod native;
pub mod playback;
pub mod render;
pub mod scheduler;
pub mod state;

pub use clock::{DeadlineTimer, ManualClock, Timer, TimerHandle};
pub use native::{play_file, play_track, PlayOptions, PlaybackResult};
pub use scheduler::{PlaybackScheduler, PlaybackStatus, TextChange, TimedChange};
pub use state::{InputResult, PlayerState};
