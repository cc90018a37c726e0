//! Rendering components for the terminal player.
//!
//! This module contains the UI rendering functions for the player:
//! subtitle text, progress bar, status bar, seek prompt and help overlay.

mod help;
mod progress;
mod status;
mod subtitle;

pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_progress_bar, progress_ratio};
pub use status::{build_prompt_line, build_status_line, render_prompt, render_status_bar, StatusInfo};
pub use subtitle::{calc_center_col, calc_text_start_row, render_subtitle, wrap_text};

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    queue,
    terminal::{Clear, ClearType},
};

use crate::player::state::PlayerState;
use crate::subtitle::TimeOffset;

/// Track facts the frame needs besides player state.
#[derive(Debug, Clone, Copy)]
pub struct TrackSummary {
    pub cue_count: usize,
    pub total: TimeOffset,
}

/// Draw a full frame and flush.
pub fn render_frame<W: Write>(
    out: &mut W,
    state: &PlayerState,
    track: TrackSummary,
    now: Instant,
) -> Result<()> {
    if state.show_help {
        render_help(out, state.term_cols, state.term_rows)?;
        out.flush()?;
        return Ok(());
    }

    queue!(out, Clear(ClearType::All))?;
    render_subtitle(out, state.visible_text(), state.term_cols, state.text_rows())?;

    let status_row = state.term_rows.saturating_sub(1);
    if let Some(prompt) = &state.prompt {
        render_prompt(out, &prompt.input, state.term_cols, status_row)?;
    } else if state.show_status_bar {
        let info = StatusInfo {
            position: state.playhead.position(now),
            total: track.total,
            index: state.display_index,
            cue_count: track.cue_count,
            paused: state.playhead.is_paused(),
            message: state.message.as_deref(),
        };
        render_status_bar(out, &info, state.term_cols, status_row)?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::scheduler::TextChange;

    fn summary() -> TrackSummary {
        TrackSummary {
            cue_count: 3,
            total: TimeOffset::from_secs(30),
        }
    }

    fn frame(state: &PlayerState, now: Instant) -> String {
        let mut out = Vec::new();
        render_frame(&mut out, state, summary(), now).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn frame_contains_text_and_status() {
        let now = Instant::now();
        let mut state = PlayerState::new(100, 20, TimeOffset::ZERO, now);
        state.apply(TextChange::cue(1, "General Kenobi"));
        let out = frame(&state, now);
        assert!(out.contains("General Kenobi"));
        assert!(out.contains("cue 2/3"));
    }

    #[test]
    fn prompt_replaces_status_bar() {
        let now = Instant::now();
        let mut state = PlayerState::new(100, 20, TimeOffset::ZERO, now);
        state.open_prompt();
        let out = frame(&state, now);
        assert!(out.contains("Seek to"));
        assert!(!out.contains("cue -/3"));
    }

    #[test]
    fn status_bar_can_be_hidden() {
        let now = Instant::now();
        let mut state = PlayerState::new(100, 20, TimeOffset::ZERO, now);
        state.show_status_bar = false;
        assert!(!frame(&state, now).contains("cue"));
    }

    #[test]
    fn help_overlay_hides_subtitle() {
        let now = Instant::now();
        let mut state = PlayerState::new(100, 40, TimeOffset::ZERO, now);
        state.apply(TextChange::cue(0, "hidden line"));
        state.toggle_help();
        let out = frame(&state, now);
        assert!(out.contains("srtplay Help"));
        assert!(!out.contains("hidden line"));
    }
}
