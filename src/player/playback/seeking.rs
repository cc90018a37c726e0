//! Cue lookup for seeking.
//!
//! Maps a playback position to the index of the cue that is active there,
//! or the cue playback should continue from when the position falls outside
//! every cue.

use crate::error::PlayerError;
use crate::subtitle::{CueTrack, TimeOffset};

/// Find the cue to play from at `target`.
///
/// Binary search over cues sorted by `start`. A cue matches when `target`
/// lies within `[start, end]`. When no cue matches, the index of the last
/// midpoint the search examined is returned. That is position in the sort
/// order, not the cue closest in time:
///
/// - before the first cue → `0`
/// - after the last cue → `len - 1`
/// - inside a gap → whichever neighbour the search examined last
///
/// The result is always a valid index. It is deliberately not snapped to
/// the cue before a gap (`[0-1000, 2000-3000]` at 1500 gives `1`).
///
/// The track must be sorted by `start` (see [`CueTrack`]).
///
/// # Errors
/// [`PlayerError::EmptyTrack`] when the track has no cues.
pub fn locate(track: &CueTrack, target: TimeOffset) -> Result<usize, PlayerError> {
    if track.is_empty() {
        return Err(PlayerError::EmptyTrack);
    }

    let mut low = 0usize;
    let mut high = track.len() - 1;
    let mut last_mid = 0usize;

    while low <= high {
        let mid = low + (high - low) / 2;
        last_mid = mid;
        let cue = &track[mid];

        if target > cue.end {
            low = mid + 1;
        } else if target < cue.start {
            match mid.checked_sub(1) {
                Some(below) => high = below,
                // Range [low, -1] is empty
                None => break,
            }
        } else {
            return Ok(mid);
        }
    }

    Ok(last_mid)
}
