//! Locate and info subcommand handlers

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use srtplay::player::playback::locate;
use srtplay::subtitle::srt;
use srtplay::{CueTrack, TimeOffset};

pub fn handle_locate(file: &Path, time: TimeOffset) -> Result<()> {
    let track = srt::parse_file(file)?;
    write_locate(&mut io::stdout().lock(), &track, time)
}

pub fn handle_info(file: &Path) -> Result<()> {
    let track = srt::parse_file(file)?;
    write_info(&mut io::stdout().lock(), file, &track)
}

/// Print the cue playback would resume from at `time`.
pub fn write_locate<W: Write>(out: &mut W, track: &CueTrack, time: TimeOffset) -> Result<()> {
    let index = locate(track, time)?;
    let cue = &track[index];

    let relation = if cue.contains(time) {
        "active"
    } else if time < cue.start {
        "upcoming"
    } else {
        "already ended"
    };

    writeln!(out, "[{}] {} --> {} ({})", index, cue.start, cue.end, relation)?;
    for line in cue.text.lines() {
        writeln!(out, "    {}", line)?;
    }
    Ok(())
}

/// Print a summary of the track.
pub fn write_info<W: Write>(out: &mut W, file: &Path, track: &CueTrack) -> Result<()> {
    writeln!(out, "File:  {}", file.display())?;
    writeln!(out, "Cues:  {}", track.len())?;
    if let (Some(first), Some(last)) = (track.cues().first(), track.cues().last()) {
        writeln!(out, "First: {}", first.start)?;
        writeln!(out, "Last:  {}", last.end)?;
    }
    writeln!(out, "Total: {}", track.total_duration())?;
    Ok(())
}
