//! Player state management
//!
//! Contains the `PlayerState` struct that holds everything the interactive
//! player needs between events (display text, playhead, prompt, UI modes),
//! as well as shared types used across player modules.

use std::time::Instant;

use crate::player::scheduler::TextChange;
use crate::subtitle::TimeOffset;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Wall-clock playback position.
///
/// The scheduler only knows about cue transitions; the playhead tracks the
/// position between them so relative seeks and the status bar have
/// something to work from.
#[derive(Debug, Clone, Copy)]
pub struct Playhead {
    /// Position at `since`
    base: TimeOffset,
    /// When `base` was set; `None` while paused
    since: Option<Instant>,
}

impl Playhead {
    pub fn new(base: TimeOffset, now: Instant) -> Self {
        Self {
            base,
            since: Some(now),
        }
    }

    /// Current position.
    pub fn position(&self, now: Instant) -> TimeOffset {
        match self.since {
            Some(since) => self.base + TimeOffset::from(now.saturating_duration_since(since)),
            None => self.base,
        }
    }

    /// Jump to `base` and keep running.
    pub fn restart(&mut self, base: TimeOffset, now: Instant) {
        self.base = base;
        self.since = Some(now);
    }

    /// Freeze at the current position.
    pub fn pause(&mut self, now: Instant) {
        self.base = self.position(now);
        self.since = None;
    }

    pub fn is_paused(&self) -> bool {
        self.since.is_none()
    }
}

/// Inline `HH:MM:SS,mmm` entry for manual seeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekPrompt {
    pub input: String,
}

impl SeekPrompt {
    /// Initial prompt contents.
    pub const DEFAULT_INPUT: &'static str = "00:00:00,000";
    /// Longest accepted input (`HHHH:MM:SS,mmm` plus slack)
    const MAX_LEN: usize = 16;

    pub fn new() -> Self {
        Self {
            input: Self::DEFAULT_INPUT.to_string(),
        }
    }

    /// Append a character if it can appear in a timestamp.
    pub fn push(&mut self, c: char) {
        let allowed = c.is_ascii_digit() || matches!(c, ':' | ',' | '.');
        if allowed && self.input.len() < Self::MAX_LEN {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }
}

impl Default for SeekPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Central state for the interactive player.
#[derive(Debug)]
pub struct PlayerState {
    // === Display ===
    /// Text currently on screen (empty for blank)
    pub display_text: String,
    /// Index of the cue on screen
    pub display_index: Option<usize>,
    /// Shown instead of an empty display
    pub placeholder: String,

    // === Timing ===
    pub playhead: Playhead,

    // === UI modes ===
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Whether the status bar is drawn
    pub show_status_bar: bool,
    /// Active seek prompt, if any
    pub prompt: Option<SeekPrompt>,
    /// One-line feedback (errors, seek confirmations)
    pub message: Option<String>,

    // === Viewport ===
    pub term_cols: u16,
    pub term_rows: u16,

    // === Rendering flags ===
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    pub fn new(term_cols: u16, term_rows: u16, start: TimeOffset, now: Instant) -> Self {
        Self {
            display_text: String::new(),
            display_index: None,
            placeholder: String::new(),
            playhead: Playhead::new(start, now),
            show_help: false,
            show_status_bar: true,
            prompt: None,
            message: None,
            term_cols,
            term_rows,
            needs_render: true,
        }
    }

    /// Show the text carried by a scheduler notification.
    pub fn apply(&mut self, change: TextChange) {
        self.display_text = change.text;
        self.display_index = change.index;
        self.needs_render = true;
    }

    /// Clear the display (after the scheduler was stopped).
    pub fn clear_display(&mut self) {
        self.display_text.clear();
        self.display_index = None;
        self.needs_render = true;
    }

    /// Text to draw: the cue text, or the placeholder when blank.
    pub fn visible_text(&self) -> &str {
        if self.display_text.is_empty() {
            &self.placeholder
        } else {
            &self.display_text
        }
    }

    /// Rows available for subtitle text.
    pub fn text_rows(&self) -> u16 {
        if self.show_status_bar {
            self.term_rows.saturating_sub(1)
        } else {
            self.term_rows
        }
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.term_cols = cols;
        self.term_rows = rows;
        self.needs_render = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    pub fn open_prompt(&mut self) {
        self.prompt = Some(SeekPrompt::new());
        self.needs_render = true;
    }

    pub fn close_prompt(&mut self) -> Option<SeekPrompt> {
        self.needs_render = true;
        self.prompt.take()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.needs_render = true;
    }
}
