//! Cue scheduling.
//!
//! `PlaybackScheduler` walks a `CueTrack` one cue at a time. It arms a single
//! timer for the next transition, and when that timer is delivered through
//! [`PlaybackScheduler::on_elapsed`] it reports the new display text and
//! arms the following transition. Seeking cancels the chain and starts a new
//! one from the located cue.
//!
//! ```
//! use std::rc::Rc;
//! use std::time::Duration;
//! use srtplay::player::clock::ManualClock;
//! use srtplay::player::scheduler::PlaybackScheduler;
//! use srtplay::subtitle::{Cue, CueTrack, TimeOffset};
//!
//! let track = Rc::new(CueTrack::new(vec![
//!     Cue::from_millis(0, 1_000, "A"),
//!     Cue::from_millis(1_500, 2_500, "B"),
//! ]));
//!
//! let mut scheduler = PlaybackScheduler::new(ManualClock::new());
//! scheduler.open(track, TimeOffset::ZERO).unwrap();
//!
//! let shown: Vec<_> = scheduler
//!     .run_to_end()
//!     .into_iter()
//!     .map(|c| (c.at, c.change.text))
//!     .collect();
//! assert_eq!(
//!     shown,
//!     vec![
//!         (Duration::ZERO, "A".to_string()),
//!         (Duration::from_millis(1_000), "B".to_string()),
//!     ]
//! );
//! ```

use std::rc::Rc;
use std::time::Duration;

use crate::error::PlayerError;
use crate::player::clock::{ManualClock, Timer, TimerHandle};
use crate::player::playback::locate;
use crate::subtitle::{CueTrack, TimeOffset};

/// Scheduler lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing pending: never started, stopped, or a start failed
    Idle,
    /// Exactly one transition timer is pending
    Armed,
    /// Every cue has been shown
    Finished,
}

/// "Display text changed" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    /// Index of the cue now shown, `None` for the blank display
    pub index: Option<usize>,
    /// Text to display, empty for the blank display
    pub text: String,
}

impl TextChange {
    pub fn blank() -> Self {
        Self {
            index: None,
            text: String::new(),
        }
    }

    pub fn cue(index: usize, text: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.index.is_none()
    }
}

/// A text change stamped with the virtual time it was emitted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedChange {
    /// Time on the scheduler's `ManualClock`
    pub at: Duration,
    pub change: TextChange,
}

/// Drives timer-chained transitions through a cue track.
///
/// Generic over the [`Timer`] so that the interactive player uses wall-clock
/// deadlines while tests drive a [`ManualClock`].
#[derive(Debug)]
pub struct PlaybackScheduler<T: Timer> {
    timer: T,
    track: Option<Rc<CueTrack>>,
    /// Next cue to show; `track.len()` once past the end
    current_index: usize,
    /// The single armed transition, if any
    pending: Option<TimerHandle>,
    status: PlaybackStatus,
    /// Offset the current session was started from
    origin: Option<TimeOffset>,
}

impl<T: Timer> PlaybackScheduler<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            track: None,
            current_index: 0,
            pending: None,
            status: PlaybackStatus::Idle,
            origin: None,
        }
    }

    /// Load a track, replacing any previous one, and start playback at `offset`.
    ///
    /// # Errors
    /// [`PlayerError::EmptyTrack`] if the track has no cues. The previous
    /// session is stopped and unloaded either way, leaving the scheduler
    /// `Idle` with no track on error.
    pub fn open(
        &mut self,
        track: Rc<CueTrack>,
        offset: TimeOffset,
    ) -> Result<TextChange, PlayerError> {
        self.stop();
        self.track = None;
        self.current_index = 0;
        self.origin = None;

        if track.is_empty() {
            return Err(PlayerError::EmptyTrack);
        }

        tracing::info!(cues = track.len(), %offset, "opened subtitle track");
        self.track = Some(track);
        self.start(offset)
    }

    /// Restart playback of the loaded track at `offset`.
    ///
    /// Any pending transition is cancelled before the new one is armed, so a
    /// timer from the previous session can never emit text afterwards.
    ///
    /// # Errors
    /// [`PlayerError::NoTrackLoaded`] before a successful [`open`](Self::open).
    pub fn seek(&mut self, offset: TimeOffset) -> Result<TextChange, PlayerError> {
        tracing::info!(%offset, "seek");
        self.start(offset)
    }

    /// Seek to a manually typed `HH:MM:SS,mmm` position.
    ///
    /// # Errors
    /// [`PlayerError::InvalidTimeString`] for malformed input, in which case
    /// the current session keeps running untouched.
    pub fn seek_str(&mut self, input: &str) -> Result<TextChange, PlayerError> {
        let offset: TimeOffset = input.parse()?;
        self.seek(offset)
    }

    /// Cancel any pending transition and go `Idle`.
    ///
    /// The caller decides what to do with the text currently on screen.
    pub fn stop(&mut self) {
        self.cancel_pending();
        self.status = PlaybackStatus::Idle;
    }

    /// Handle a delivered timer.
    ///
    /// Returns the text to display, or `None` when `handle` is not the
    /// pending transition (cancelled or from an earlier session).
    pub fn on_elapsed(&mut self, handle: TimerHandle) -> Option<TextChange> {
        if self.pending != Some(handle) {
            tracing::debug!(?handle, "ignoring stale timer");
            return None;
        }
        self.pending = None;

        let track = Rc::clone(self.track.as_ref()?);
        let index = self.current_index;
        let Some(cue) = track.get(index) else {
            self.status = PlaybackStatus::Finished;
            return None;
        };

        let change = TextChange::cue(index, cue.text.as_str());

        // Next transition waits for the duration of the cue just shown,
        // not for the next cue's start.
        let duration = cue.duration();
        if duration.is_negative() {
            tracing::warn!(
                index,
                start = %cue.start,
                end = %cue.end,
                "cue ends before it starts, using zero duration"
            );
        }

        self.current_index += 1;
        if self.current_index >= track.len() {
            tracing::debug!(index, "last cue shown");
            self.status = PlaybackStatus::Finished;
        } else {
            self.arm(duration);
        }

        Some(change)
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Index of the next cue to be shown by a timer fire.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn track(&self) -> Option<&Rc<CueTrack>> {
        self.track.as_ref()
    }

    /// Offset passed to the most recent successful open/seek.
    pub fn origin(&self) -> Option<TimeOffset> {
        self.origin
    }

    /// The pending transition's handle, if armed.
    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn start(&mut self, offset: TimeOffset) -> Result<TextChange, PlayerError> {
        let track = Rc::clone(self.track.as_ref().ok_or(PlayerError::NoTrackLoaded)?);
        let mut index = locate(&track, offset)?;

        self.stop();

        let cue = &track[index];
        let mut delay = cue.start - offset;

        let change = if delay.is_negative() {
            // Already in progress: show it now, next transition at its end
            delay = cue.end - offset;
            let change = TextChange::cue(index, cue.text.as_str());
            index += 1;
            change
        } else {
            TextChange::blank()
        };

        self.current_index = index;
        self.origin = Some(offset);

        if index >= track.len() {
            tracing::debug!(%offset, "started on the last cue, nothing left to schedule");
            self.status = PlaybackStatus::Finished;
        } else {
            self.arm(delay);
        }

        Ok(change)
    }

    /// Arm the next transition. Negative delays clamp to zero.
    fn arm(&mut self, delay: TimeOffset) {
        self.cancel_pending();
        let handle = self.timer.arm(delay.to_delay());
        tracing::debug!(
            ?handle,
            delay_ms = delay.as_millis(),
            index = self.current_index,
            "armed transition"
        );
        self.pending = Some(handle);
        self.status = PlaybackStatus::Armed;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            tracing::debug!(?handle, "cancelled transition");
            self.timer.cancel(handle);
        }
    }
}

impl PlaybackScheduler<ManualClock> {
    /// Deliver every timer due at or before `until` (virtual time), then
    /// move the clock to `until`.
    pub fn advance_to(&mut self, until: Duration) -> Vec<TimedChange> {
        let mut changes = Vec::new();
        while let Some(handle) = self.timer.pop_due(until) {
            let at = self.timer.now();
            if let Some(change) = self.on_elapsed(handle) {
                changes.push(TimedChange { at, change });
            }
        }
        self.timer.advance_to(until);
        changes
    }

    /// Deliver timers until none are pending.
    ///
    /// Terminates because every delivered transition moves one cue forward.
    pub fn run_to_end(&mut self) -> Vec<TimedChange> {
        let mut changes = Vec::new();
        while let Some(deadline) = self.timer.next_deadline() {
            changes.extend(self.advance_to(deadline));
        }
        changes
    }
}
