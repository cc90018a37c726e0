//! SubRip (`.srt`) parser
//!
//! Reference: https://en.wikipedia.org/wiki/SubRip#Format
//!
//! A file is a sequence of blocks separated by blank lines:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:02,500
//! First line
//! Second line
//! ```
//!
//! The counter line is optional. Anything after the end time on the timing
//! line (legacy position hints such as `X1:100`) is ignored. Parsed cues are
//! sorted by start time, which is the ordering `CueTrack` relies on.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::subtitle::{Cue, CueTrack, TimeOffset};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse an SRT file from a path.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<CueTrack> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    parse_bytes(&bytes).with_context(|| format!("Failed to parse subtitles in {:?}", path))
}

/// Parse raw SRT bytes.
///
/// Input that is not valid UTF-8 is decoded lossily; unknown bytes become
/// U+FFFD instead of failing the whole file.
pub fn parse_bytes(bytes: &[u8]) -> Result<CueTrack> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let content = String::from_utf8_lossy(bytes);
    if matches!(content, Cow::Owned(_)) {
        tracing::warn!("subtitle file is not valid UTF-8, undecodable bytes were replaced");
    }
    parse_str(&content)
}

/// Parse SRT content from a string.
pub fn parse_str(content: &str) -> Result<CueTrack> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut cues = Vec::new();
    let mut lines = content.lines().enumerate().peekable();

    while let Some((idx, line)) = lines.next() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_num = idx + 1;

        let (timing_line_num, timing) = if line.contains("-->") {
            (line_num, line)
        } else {
            if !line.bytes().all(|b| b.is_ascii_digit()) {
                bail!(
                    "Expected cue number or timing on line {}, found {:?}",
                    line_num,
                    line
                );
            }
            match lines.next() {
                Some((next_idx, next)) => (next_idx + 1, next.trim()),
                None => bail!("Cue {} on line {} has no timing line", line, line_num),
            }
        };

        let (start, end) = parse_timing(timing)
            .with_context(|| format!("Invalid cue timing on line {}", timing_line_num))?;

        let mut text_lines = Vec::new();
        while let Some(&(_, next)) = lines.peek() {
            if next.trim().is_empty() {
                break;
            }
            text_lines.push(next.trim_end());
            lines.next();
        }

        cues.push(Cue::new(start, end, text_lines.join("\n")));
    }

    // Stable: cues sharing a start time keep their file order
    cues.sort_by_key(|cue| cue.start);
    tracing::debug!(cues = cues.len(), "parsed subtitle track");

    Ok(CueTrack::new(cues))
}

/// Parse `start --> end [ignored settings]`.
fn parse_timing(line: &str) -> Result<(TimeOffset, TimeOffset)> {
    let (start, rest) = line
        .split_once("-->")
        .context("Timing line must contain '-->'")?;
    let end = rest
        .split_whitespace()
        .next()
        .context("Timing line is missing the end time")?;

    let start: TimeOffset = start.trim().parse()?;
    let end: TimeOffset = end.parse()?;
    Ok((start, end))
}
