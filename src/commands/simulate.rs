//! Simulate subcommand handler
//!
//! Runs the scheduler against a virtual clock and prints each display
//! change with the elapsed time at which it would happen.

use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};

use srtplay::player::{ManualClock, PlaybackScheduler, TextChange};
use srtplay::subtitle::srt;
use srtplay::{CueTrack, TimeOffset};

pub fn handle(file: &Path, start: TimeOffset) -> Result<()> {
    let track = srt::parse_file(file)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_simulation(&mut out, Rc::new(track), start)
        .with_context(|| format!("Cannot simulate {}", file.display()))
}

/// Write the transition log for playing `track` from `start`.
pub fn write_simulation<W: Write>(out: &mut W, track: Rc<CueTrack>, start: TimeOffset) -> Result<()> {
    let cue_count = track.len();
    let mut scheduler = PlaybackScheduler::new(ManualClock::new());

    let initial = scheduler.open(track, start)?;
    writeln!(out, "start {}", start)?;
    writeln!(out, "{}", format_change(TimeOffset::ZERO, &initial))?;

    let changes = scheduler.run_to_end();
    for timed in &changes {
        writeln!(out, "{}", format_change(TimeOffset::from(timed.at), &timed.change))?;
    }

    let shown = changes.len() + usize::from(!initial.is_blank());
    writeln!(out, "finished: {} of {} cues shown", shown, cue_count)?;
    Ok(())
}

/// One log line: `+elapsed [index] text`, with line breaks shown as ` | `.
fn format_change(elapsed: TimeOffset, change: &TextChange) -> String {
    match change.index {
        Some(index) => format!(
            "+{} [{}] {}",
            elapsed,
            index,
            change.text.lines().collect::<Vec<_>>().join(" | ")
        ),
        None => format!("+{} (blank)", elapsed),
    }
}
