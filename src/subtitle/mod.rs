//! Subtitle data model and SRT parsing
//!
//! - `time`: `TimeOffset`, the millisecond timeline unit
//! - `cue`: `Cue` and the ordered `CueTrack`
//! - `srt`: SubRip (`.srt`) parser producing a `CueTrack`

mod cue;
pub mod srt;
mod time;

pub use cue::{Cue, CueTrack};
pub use time::TimeOffset;
