//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Render a guessed word as colored letter tiles
#[must_use]
pub fn colored_tiles(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase()).black().bold();
    match mark {
        Mark::Correct => text.on_green(),
        Mark::Present => text.on_yellow(),
        Mark::Absent => text.on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Histogram bar; any non-zero count gets at least one cell
#[must_use]
pub fn histogram_bar(count: usize, max_count: usize, width: usize) -> String {
    let filled = if max_count == 0 {
        0
    } else {
        (count * width / max_count).max(usize::from(count > 0))
    };

    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width.saturating_sub(filled)).bright_black()
    )
}

/// Progress bar for batch runs, drawn on stderr
///
/// # Panics
/// Never in practice: the template is a fixed string.
#[must_use]
pub fn batch_progress(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );
    bar
}
