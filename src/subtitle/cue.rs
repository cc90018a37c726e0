//! Cues and cue tracks.

use std::ops::Index;

use crate::subtitle::TimeOffset;

/// A single timed text unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    /// When the cue appears
    pub start: TimeOffset,
    /// When the cue disappears
    pub end: TimeOffset,
    /// Text to display (may span several lines)
    pub text: String,
}

impl Cue {
    pub fn new(start: TimeOffset, end: TimeOffset, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Shorthand for fixtures and tests: bounds in milliseconds.
    pub fn from_millis(start: i64, end: i64, text: impl Into<String>) -> Self {
        Self::new(
            TimeOffset::from_millis(start),
            TimeOffset::from_millis(end),
            text,
        )
    }

    /// `end - start`. Negative for malformed cues.
    pub fn duration(&self) -> TimeOffset {
        self.end - self.start
    }

    /// Whether `time` lies within `[start, end]` (both ends inclusive).
    pub fn contains(&self, time: TimeOffset) -> bool {
        self.start <= time && time <= self.end
    }
}

/// The ordered, read-only cue sequence of one subtitle source.
///
/// # Precondition
///
/// Cues must be sorted by non-decreasing `start`. The track does not check
/// this; the parser that builds it is responsible. The position finder
/// returns meaningless indices for unsorted tracks. Gaps and overlaps
/// between neighbouring cues are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueTrack {
    cues: Vec<Cue>,
}

impl CueTrack {
    pub fn new(cues: Vec<Cue>) -> Self {
        Self { cues }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cue> {
        self.cues.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// End time of the last cue, or zero for an empty track.
    pub fn total_duration(&self) -> TimeOffset {
        self.cues.last().map(|c| c.end).unwrap_or(TimeOffset::ZERO)
    }
}

impl Index<usize> for CueTrack {
    type Output = Cue;

    fn index(&self, index: usize) -> &Cue {
        &self.cues[index]
    }
}

impl<'a> IntoIterator for &'a CueTrack {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.iter()
    }
}

impl FromIterator<Cue> for CueTrack {
    fn from_iter<I: IntoIterator<Item = Cue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
