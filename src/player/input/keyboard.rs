//! Keyboard input handling for the terminal player.
//!
//! Handles playback shortcuts and the inline seek prompt.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{seek_by, seek_to, step_millis, toggle_pause};
use crate::player::clock::Timer;
use crate::player::scheduler::PlaybackScheduler;
use crate::player::state::{InputResult, PlayerState};
use crate::subtitle::TimeOffset;

/// Handle a keyboard event.
///
/// While the seek prompt is open every key goes to the prompt; otherwise
/// keys map to playback controls.
pub fn handle_key_event<T: Timer>(
    key: KeyEvent,
    state: &mut PlayerState,
    scheduler: &mut PlaybackScheduler<T>,
    seek_step: Duration,
    now: Instant,
) -> InputResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Quit;
    }

    if state.prompt.is_some() {
        handle_prompt_key(key, state, scheduler, now);
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if state.show_help {
        state.toggle_help();
        return InputResult::Continue;
    }

    let step = step_millis(seek_step);

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,

        // === Mode toggles ===
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }
        KeyCode::Char('g') => {
            state.open_prompt();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            toggle_pause(state, scheduler, now);
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left => {
            seek_by(state, scheduler, -step, now);
            InputResult::Continue
        }
        KeyCode::Right => {
            seek_by(state, scheduler, step, now);
            InputResult::Continue
        }
        KeyCode::Home => {
            seek_to(state, scheduler, TimeOffset::ZERO, now);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Edit or submit the seek prompt.
fn handle_prompt_key<T: Timer>(
    key: KeyEvent,
    state: &mut PlayerState,
    scheduler: &mut PlaybackScheduler<T>,
    now: Instant,
) {
    match key.code {
        KeyCode::Esc => {
            state.close_prompt();
        }
        KeyCode::Enter => {
            if let Some(prompt) = state.close_prompt() {
                submit_prompt(&prompt.input, state, scheduler, now);
            }
        }
        KeyCode::Backspace => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.backspace();
                state.needs_render = true;
            }
        }
        KeyCode::Delete => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.clear();
                state.needs_render = true;
            }
        }
        KeyCode::Char(c) => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.push(c);
                state.needs_render = true;
            }
        }
        _ => {}
    }
}

/// Seek to typed input. Bad input leaves playback running.
fn submit_prompt<T: Timer>(
    input: &str,
    state: &mut PlayerState,
    scheduler: &mut PlaybackScheduler<T>,
    now: Instant,
) {
    match scheduler.seek_str(input) {
        Ok(change) => {
            state.apply(change);
            if let Some(origin) = scheduler.origin() {
                state.playhead.restart(origin, now);
                state.set_message(format!("Seek {}", origin));
            }
        }
        Err(e) => {
            tracing::debug!(input, "rejected seek input");
            state.set_message(e.to_string());
        }
    }
}
