//! Input handling for the terminal player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use std::time::{Duration, Instant};

use crossterm::event::Event;

use crate::player::clock::Timer;
use crate::player::scheduler::PlaybackScheduler;
use crate::player::state::{InputResult, PlayerState};
use crate::subtitle::TimeOffset;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `state` - Mutable reference to player state
/// * `scheduler` - The scheduler driving the loaded track
/// * `seek_step` - Distance covered by relative seeks
/// * `now` - Wall-clock time of the event
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<T: Timer>(
    event: Event,
    state: &mut PlayerState,
    scheduler: &mut PlaybackScheduler<T>,
    seek_step: Duration,
    now: Instant,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state, scheduler, seek_step, now),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, scheduler, seek_step, now),
        Event::Resize(cols, rows) => {
            state.handle_resize(cols, rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}

/// Restart playback at `offset` and sync the display and playhead.
///
/// Seeking always resumes a paused player.
pub(crate) fn seek_to<T: Timer>(
    state: &mut PlayerState,
    scheduler: &mut PlaybackScheduler<T>,
    offset: TimeOffset,
    now: Instant,
) {
    match scheduler.seek(offset) {
        Ok(change) => {
            state.apply(change);
            state.playhead.restart(offset, now);
            state.set_message(format!("Seek {}", offset));
        }
        Err(e) => state.set_message(e.to_string()),
    }
}

/// Seek relative to the current playhead, never before zero.
pub(crate) fn seek_by<T: Timer>(
    state: &mut PlayerState,
    scheduler: &mut PlaybackScheduler<T>,
    delta_millis: i64,
    now: Instant,
) {
    let target = state.playhead.position(now).saturating_shift(delta_millis);
    seek_to(state, scheduler, target, now);
}

/// Pause or resume.
///
/// Pausing stops the scheduler but leaves the current text on screen.
/// Resuming seeks to the frozen position, which re-locates the cue.
pub(crate) fn toggle_pause<T: Timer>(
    state: &mut PlayerState,
    scheduler: &mut PlaybackScheduler<T>,
    now: Instant,
) {
    if state.playhead.is_paused() {
        let position = state.playhead.position(now);
        seek_to(state, scheduler, position, now);
        state.set_message("Resumed");
    } else {
        scheduler.stop();
        state.playhead.pause(now);
        state.set_message("Paused");
    }
}

pub(crate) fn step_millis(step: Duration) -> i64 {
    i64::try_from(step.as_millis()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::player::clock::ManualClock;
    use crate::player::scheduler::PlaybackStatus;
    use crate::subtitle::{Cue, CueTrack};

    pub(super) fn fixture(now: Instant) -> (PlayerState, PlaybackScheduler<ManualClock>) {
        let track = Rc::new(CueTrack::new(vec![
            Cue::from_millis(1_000, 2_000, "one"),
            Cue::from_millis(3_000, 4_000, "two"),
            Cue::from_millis(10_000, 12_000, "three"),
        ]));
        let mut scheduler = PlaybackScheduler::new(ManualClock::new());
        let mut state = PlayerState::new(80, 24, TimeOffset::ZERO, now);
        let change = scheduler.open(track, TimeOffset::ZERO).unwrap();
        state.apply(change);
        (state, scheduler)
    }

    #[test]
    fn seek_to_shows_cue_in_progress() {
        let now = Instant::now();
        let (mut state, mut scheduler) = fixture(now);
        seek_to(&mut state, &mut scheduler, TimeOffset::from_millis(3_500), now);
        assert_eq!(state.display_text, "two");
        assert_eq!(state.playhead.position(now), TimeOffset::from_millis(3_500));
    }

    #[test]
    fn seek_by_clamps_at_zero() {
        let now = Instant::now();
        let (mut state, mut scheduler) = fixture(now);
        seek_by(&mut state, &mut scheduler, -5_000, now);
        assert_eq!(state.playhead.position(now), TimeOffset::ZERO);
        assert_eq!(scheduler.origin(), Some(TimeOffset::ZERO));
    }

    #[test]
    fn pause_keeps_text_and_stops_scheduler() {
        let now = Instant::now();
        let (mut state, mut scheduler) = fixture(now);
        seek_to(&mut state, &mut scheduler, TimeOffset::from_millis(1_500), now);

        toggle_pause(&mut state, &mut scheduler, now + Duration::from_millis(200));
        assert!(state.playhead.is_paused());
        assert_eq!(scheduler.status(), PlaybackStatus::Idle);
        assert_eq!(state.display_text, "one");
    }

    #[test]
    fn resume_restarts_from_frozen_position() {
        let now = Instant::now();
        let (mut state, mut scheduler) = fixture(now);
        let paused_at = now + Duration::from_millis(3_200);
        toggle_pause(&mut state, &mut scheduler, paused_at);

        let later = paused_at + Duration::from_secs(60);
        toggle_pause(&mut state, &mut scheduler, later);
        assert!(!state.playhead.is_paused());
        assert_eq!(scheduler.origin(), Some(TimeOffset::from_millis(3_200)));
        assert_eq!(state.display_text, "two");
        assert_eq!(scheduler.status(), PlaybackStatus::Armed);
    }

    #[test]
    fn resize_event_updates_state() {
        let now = Instant::now();
        let (mut state, mut scheduler) = fixture(now);
        let result = handle_event(
            Event::Resize(100, 30),
            &mut state,
            &mut scheduler,
            Duration::from_secs(5),
            now,
        );
        assert_eq!(result, InputResult::Continue);
        assert_eq!((state.term_cols, state.term_rows), (100, 30));
    }

    #[test]
    fn step_millis_saturates() {
        assert_eq!(step_millis(Duration::from_secs(5)), 5_000);
        assert_eq!(step_millis(Duration::MAX), i64::MAX);
    }
}
