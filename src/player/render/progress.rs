//! Progress bar for the status line.

use crate::subtitle::TimeOffset;

/// Fraction of the track played, clamped to `0.0..=1.0`.
///
/// An empty track (zero total) counts as fully played.
pub fn progress_ratio(position: TimeOffset, total: TimeOffset) -> f64 {
    if total.as_millis() <= 0 {
        return 1.0;
    }
    (position.as_millis() as f64 / total.as_millis() as f64).clamp(0.0, 1.0)
}

/// Build a bar of `width` cells with the playhead marked.
///
/// # Returns
/// The bar as a string of exactly `width` characters.
pub fn build_progress_bar(width: usize, position: TimeOffset, total: TimeOffset) -> String {
    if width == 0 {
        return String::new();
    }

    let filled = (width as f64 * progress_ratio(position, total)) as usize;
    let playhead = filled.min(width - 1);

    (0..width)
        .map(|i| match i.cmp(&playhead) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}
