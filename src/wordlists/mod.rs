//! Reference word list
//!
//! The answer list is compiled into the binary; custom lists load from disk.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::error::{Error, Result};
use crate::solver::Recommendation;

/// Best first guess for the embedded answer list
///
/// Leaves 60.88 words on average (140636 over 2310 other answers). A fresh
/// search over all 2311 answers reaches the same word; `stats` recomputes it.
pub const ANSWERS_OPENING: &str = "raise";
pub const ANSWERS_OPENING_PASS_COUNT: u64 = 140_636;

/// The precomputed opening as a recommendation
///
/// # Panics
/// Never: `ANSWERS_OPENING` is a valid five-letter word.
#[must_use]
pub fn answers_opening() -> Recommendation {
    let word = Word::new(ANSWERS_OPENING).expect("opening is a valid word");
    Recommendation::from_pass_count(word, ANSWERS_OPENING_PASS_COUNT, ANSWERS_COUNT)
}

/// Name that selects the embedded answer list
pub const EMBEDDED_LIST: &str = "answers";

/// Resolve a word list by name: [`EMBEDDED_LIST`] or a file path
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or
/// [`Error::EmptyWordList`] if it holds no valid word.
pub fn select_wordlist(source: &str) -> Result<Vec<Word>> {
    let words = if source == EMBEDDED_LIST {
        loader::words_from_slice(ANSWERS)
    } else {
        loader::load_from_file(source)?
    };

    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_are_unique() {
        let unique: HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn opening_is_an_answer() {
        assert!(ANSWERS.contains(&ANSWERS_OPENING));
        let opening = answers_opening();
        assert_eq!(opening.word.text(), "raise");
        assert!((opening.score - 140_636.0 / 2310.0).abs() < 1e-9);
    }

    #[test]
    #[ignore = "exhaustive search over the full list; run with --ignored"]
    fn opening_matches_fresh_search() {
        use crate::solver::{BranchAndBoundRecommender, Recommender, SearchConfig, SearchMode};
        use loader::words_from_slice;

        let words = words_from_slice(ANSWERS);
        let config = SearchConfig::default().with_mode(SearchMode::Parallel);
        let mut recommender = BranchAndBoundRecommender::with_config(&words, config);

        assert_eq!(recommender.recommend(), vec![answers_opening()]);
    }

    #[test]
    fn embedded_list_by_name() {
        let words = select_wordlist(EMBEDDED_LIST).unwrap();
        assert_eq!(words.len(), ANSWERS_COUNT);
    }

    #[test]
    fn file_without_valid_words_is_empty_list() {
        let path = std::env::temp_dir().join("wordle_advisor_empty_list.txt");
        std::fs::write(&path, "no\n12345\n").unwrap();

        let result = select_wordlist(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(Error::EmptyWordList)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = select_wordlist("/nonexistent/wordle_advisor/list.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn answers_include_common_openers() {
        for opener in ["raise", "crane", "slate"] {
            assert!(ANSWERS.contains(&opener), "missing {opener}");
        }
    }
}
