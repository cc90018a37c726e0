//! Mouse input handling for the terminal player.
//!
//! Right click opens the seek prompt; the wheel seeks by the configured step.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{seek_by, step_millis};
use crate::player::clock::Timer;
use crate::player::scheduler::PlaybackScheduler;
use crate::player::state::{InputResult, PlayerState};

/// Handle a mouse event.
pub fn handle_mouse_event<T: Timer>(
    mouse: MouseEvent,
    state: &mut PlayerState,
    scheduler: &mut PlaybackScheduler<T>,
    seek_step: Duration,
    now: Instant,
) -> InputResult {
    if state.prompt.is_some() {
        return InputResult::Continue;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Right) => state.open_prompt(),
        MouseEventKind::ScrollUp => seek_by(state, scheduler, -step_millis(seek_step), now),
        MouseEventKind::ScrollDown => seek_by(state, scheduler, step_millis(seek_step), now),
        _ => {}
    }

    InputResult::Continue
}
