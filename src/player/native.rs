//! Interactive terminal player.
//!
//! Owns the terminal for the duration of playback and runs the event loop:
//! deliver due scheduler timers, redraw, then wait for input until the next
//! deadline.

use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::PlayerConfig;
use crate::player::clock::DeadlineTimer;
use crate::player::input::handle_event;
use crate::player::render::{render_frame, TrackSummary};
use crate::player::scheduler::{PlaybackScheduler, PlaybackStatus};
use crate::player::state::{InputResult, PlayerState};
use crate::subtitle::{srt, CueTrack, TimeOffset};

/// Upper bound on how long the loop sleeps, so the status bar clock moves.
const STATUS_REFRESH: Duration = Duration::from_millis(250);
/// How long a status message stays up.
const MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);

/// Result of a playback session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Every cue was shown before the user quit
    Success(String),
    /// User quit before the last cue
    Interrupted,
}

/// Options for a playback session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub start: TimeOffset,
    pub seek_step: Duration,
    pub show_status_bar: bool,
    pub placeholder: String,
}

impl PlayOptions {
    pub fn from_config(config: &PlayerConfig, start: TimeOffset) -> Self {
        Self {
            start,
            seek_step: Duration::from_secs(u64::from(config.seek_step_secs)),
            show_status_bar: config.show_status_bar,
            placeholder: config.placeholder.clone(),
        }
    }
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default(), TimeOffset::ZERO)
    }
}

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)
            .context("Failed to set up terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Parse an SRT file and play it in the terminal.
///
/// # Arguments
/// * `path` - Path to the `.srt` file
/// * `options` - Start offset and player settings
///
/// # Returns
/// `PlaybackResult` describing how the session ended
#[cfg(not(tarpaulin_include))]
pub fn play_file(path: &Path, options: &PlayOptions) -> Result<PlaybackResult> {
    let track = srt::parse_file(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    play_track(Rc::new(track), &name, options)
}

/// Play an already parsed track in the terminal.
pub fn play_track(track: Rc<CueTrack>, name: &str, options: &PlayOptions) -> Result<PlaybackResult> {
    let summary = TrackSummary {
        cue_count: track.len(),
        total: track.total_duration(),
    };

    let mut scheduler = PlaybackScheduler::new(DeadlineTimer::new());
    // Fails before the terminal is touched
    let initial = scheduler
        .open(track, options.start)
        .with_context(|| format!("Cannot play {}", name))?;

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut state = PlayerState::new(cols, rows, options.start, Instant::now());
    state.placeholder = options.placeholder.clone();
    state.show_status_bar = options.show_status_bar;
    state.apply(initial);

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    let mut last_render: Option<Instant> = None;
    let mut message_until: Option<Instant> = None;

    loop {
        let now = Instant::now();

        while let Some(handle) = scheduler.timer_mut().pop_due(now) {
            if let Some(change) = scheduler.on_elapsed(handle) {
                tracing::debug!(index = ?change.index, "display changed");
                state.apply(change);
            }
        }

        match (state.message.is_some(), message_until) {
            (true, None) => message_until = Some(now + MESSAGE_TIMEOUT),
            (true, Some(until)) if now >= until => {
                state.message = None;
                message_until = None;
                state.needs_render = true;
            }
            (false, Some(_)) => message_until = None,
            _ => {}
        }

        let clock_moved = state.show_status_bar
            && !state.playhead.is_paused()
            && last_render.map_or(true, |at| now.duration_since(at) >= STATUS_REFRESH);
        if state.needs_render || clock_moved {
            render_frame(&mut stdout, &state, summary, now)?;
            state.needs_render = false;
            last_render = Some(now);
        }

        let wait = scheduler
            .timer()
            .time_until_next(Instant::now())
            .map_or(STATUS_REFRESH, |d| d.min(STATUS_REFRESH));

        if event::poll(wait)? {
            let event = event::read()?;
            let before = state.message.clone();
            let result = handle_event(
                event,
                &mut state,
                &mut scheduler,
                options.seek_step,
                Instant::now(),
            );
            if result == InputResult::Quit {
                break;
            }
            if state.message.is_some() && state.message != before {
                message_until = None;
            }
        }
    }

    stdout.flush()?;

    let result = if scheduler.status() == PlaybackStatus::Finished {
        PlaybackResult::Success(name.to_string())
    } else {
        PlaybackResult::Interrupted
    };
    tracing::info!(?result, "playback ended");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let config = PlayerConfig {
            seek_step_secs: 10,
            show_status_bar: false,
            placeholder: "~".to_string(),
        };
        let options = PlayOptions::from_config(&config, TimeOffset::from_secs(3));
        assert_eq!(options.seek_step, Duration::from_secs(10));
        assert!(!options.show_status_bar);
        assert_eq!(options.placeholder, "~");
        assert_eq!(options.start, TimeOffset::from_secs(3));
    }

    #[test]
    fn default_options() {
        let options = PlayOptions::default();
        assert_eq!(options.seek_step, Duration::from_secs(5));
        assert_eq!(options.start, TimeOffset::ZERO);
    }

    #[test]
    fn empty_track_fails_before_terminal_setup() {
        let result = play_track(Rc::new(CueTrack::default()), "empty.srt", &PlayOptions::default());
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("no cues"));
    }
}
