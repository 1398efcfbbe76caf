//! Word list loading
//!
//! Lists are one word per line; blank and invalid lines are skipped.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file, skipping invalid lines
///
/// Duplicates are dropped, keeping the first occurrence, so pool order
/// follows the file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;
    let mut words = Vec::new();

    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match Word::new(line) {
            Ok(word) if seen.insert(word.text().to_owned()) => words.push(word),
            Ok(_) => {}
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped invalid words");
    }
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

/// Convert an embedded string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::words_from_slice;
/// use wordle_advisor::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
