//! Errors raised by the playback core.

/// Errors surfaced synchronously by the position finder and the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("Subtitle track contains no cues")]
    EmptyTrack,

    #[error("No subtitle track loaded")]
    NoTrackLoaded,

    #[error("Invalid time '{0}', expected HH:MM:SS,mmm")]
    InvalidTimeString(String),
}
