//! Help overlay rendering for the terminal player.
//!
//! Displays a centered help overlay with all available shortcuts.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║              srtplay Help                 ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Playback                                 ║",
    "  ║    Space      Pause / Resume              ║",
    "  ║    <-/->      Seek back / forward         ║",
    "  ║    Wheel      Seek back / forward         ║",
    "  ║    Home       Go to start                 ║",
    "  ║                                           ║",
    "  ║  Seek prompt                              ║",
    "  ║    g          Open prompt                 ║",
    "  ║    Right click  Open prompt               ║",
    "  ║    Enter      Seek to typed time          ║",
    "  ║    Esc        Cancel                      ║",
    "  ║                                           ║",
    "  ║  General                                  ║",
    "  ║    ?          Show this help              ║",
    "  ║    q/Esc      Quit player                 ║",
    "  ║                                           ║",
    "  ║         Press any key to close            ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: usize = 47;

/// Calculate the starting row for centering the help box.
pub fn calc_help_start_row(term_height: u16) -> u16 {
    let box_height = HELP_LINES.len() as u16;
    (term_height.saturating_sub(box_height)) / 2
}

/// Calculate the starting column for centering the help box.
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Render the help overlay.
///
/// Clears the screen and draws a centered help box with all shortcuts.
///
/// # Arguments
/// * `out` - Where to write
/// * `width` - Terminal width
/// * `height` - Terminal height
pub fn render_help<W: Write>(out: &mut W, width: u16, height: u16) -> Result<()> {
    let start_row = calc_help_start_row(height);
    let col = calc_help_start_col(width);

    queue!(out, Clear(ClearType::All))?;

    for (i, line) in HELP_LINES.iter().enumerate() {
        let row = start_row + i as u16;
        if row >= height {
            break;
        }
        queue!(
            out,
            MoveTo(col, row),
            SetForegroundColor(Color::Green),
            Print(line),
            ResetColor,
        )?;
    }

    Ok(())
}
