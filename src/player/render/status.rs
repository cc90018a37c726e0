//! Status bar rendering for the terminal player.
//!
//! Displays the playhead, cue counter, the latest message and key hints.
//! When the seek prompt is open the bar becomes the prompt.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use unicode_width::UnicodeWidthStr;

use super::progress::build_progress_bar;
use crate::subtitle::TimeOffset;

/// Everything the status bar shows.
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo<'a> {
    pub position: TimeOffset,
    pub total: TimeOffset,
    /// Cue on screen, if any
    pub index: Option<usize>,
    pub cue_count: usize,
    pub paused: bool,
    pub message: Option<&'a str>,
}

const HINTS: &str = "space:pause g:seek ?:help q:quit";
/// Narrowest progress bar worth drawing
const MIN_BAR_WIDTH: usize = 8;

/// Build the plain-text status line, padded or cut to `width` columns.
pub fn build_status_line(info: &StatusInfo<'_>, width: usize) -> String {
    let icon = if info.paused { "⏸" } else { "▶" };
    let cue = match info.index {
        Some(i) => format!("{}/{}", i + 1, info.cue_count),
        None => format!("-/{}", info.cue_count),
    };
    let left = format!(" {} {} / {}  cue {} ", icon, info.position, info.total, cue);
    let right = format!(" {} ", info.message.unwrap_or(HINTS));

    let used = left.width() + right.width();
    let mut line = left;
    if width >= used + MIN_BAR_WIDTH {
        line.push_str(&build_progress_bar(width - used, info.position, info.total));
    }
    line.push_str(&right);
    fit_to_width(&line, width)
}

/// Build the prompt line shown instead of the status bar.
pub fn build_prompt_line(input: &str, width: usize) -> String {
    fit_to_width(&format!(" Seek to (HH:MM:SS,mmm): {}_", input), width)
}

/// Truncate or pad `line` to exactly `width` columns.
fn fit_to_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0usize;
    for c in line.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Render the status bar on `row`.
pub fn render_status_bar<W: Write>(
    out: &mut W,
    info: &StatusInfo<'_>,
    width: u16,
    row: u16,
) -> Result<()> {
    let color = if info.message.is_some() {
        Color::Yellow
    } else {
        Color::DarkGrey
    };
    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(color),
        Print(build_status_line(info, width as usize)),
        ResetColor,
    )?;
    Ok(())
}

/// Render the seek prompt on `row`.
pub fn render_prompt<W: Write>(out: &mut W, input: &str, width: u16, row: u16) -> Result<()> {
    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(Color::Cyan),
        Print(build_prompt_line(input, width as usize)),
        ResetColor,
    )?;
    Ok(())
}
