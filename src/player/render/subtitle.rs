//! Subtitle text layout.
//!
//! Cue text is wrapped to the terminal width by display width (so CJK and
//! other wide characters take two columns) and centered in the text area.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `width` columns.
///
/// Existing line breaks are kept. Words wider than `width` are split
/// between characters. Leading and trailing whitespace on each line is
/// dropped.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for source_line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in source_line.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Hard-split an overlong word
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if current_width + w > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Column at which a line of `line_width` starts when centered.
pub fn calc_center_col(term_width: u16, line_width: usize) -> u16 {
    ((term_width as usize).saturating_sub(line_width) / 2) as u16
}

/// Row at which a block of `line_count` lines starts when centered in
/// `rows` rows.
pub fn calc_text_start_row(rows: u16, line_count: usize) -> u16 {
    ((rows as usize).saturating_sub(line_count) / 2) as u16
}

/// Draw `text` centered within the top `rows` rows.
///
/// Lines that do not fit vertically are dropped from the end.
pub fn render_subtitle<W: Write>(out: &mut W, text: &str, width: u16, rows: u16) -> Result<()> {
    if text.is_empty() || rows == 0 {
        return Ok(());
    }

    let mut lines = wrap_text(text, width as usize);
    lines.truncate(rows as usize);
    let start_row = calc_text_start_row(rows, lines.len());

    queue!(out, SetAttribute(Attribute::Bold))?;
    for (i, line) in lines.iter().enumerate() {
        let col = calc_center_col(width, line.width());
        queue!(out, MoveTo(col, start_row + i as u16), Print(line))?;
    }
    queue!(out, SetAttribute(Attribute::Reset))?;

    Ok(())
}
