//! Candidate pool with in-place elimination
//!
//! Eliminated words keep their slot so original indices stay stable for
//! tie-breaking and the pool never reallocates.

use crate::core::Word;
use crate::knowledge::Knowledge;

/// Working copy of a word list, filtered by liveness flags
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    words: &'a [Word],
    live: Vec<bool>,
    live_count: usize,
}

impl<'a> CandidatePool<'a> {
    /// Create a pool with every word live
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            live: vec![true; words.len()],
            live_count: words.len(),
        }
    }

    /// Bring every word back
    pub fn reset(&mut self) {
        self.live.fill(true);
        self.live_count = self.words.len();
    }

    #[must_use]
    pub const fn live_count(&self) -> usize {
        self.live_count
    }

    /// Check if nothing has been eliminated
    #[must_use]
    pub const fn is_untouched(&self) -> bool {
        self.live_count == self.words.len()
    }

    /// Underlying word list, eliminated words included
    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Eliminate every live word that fails `knowledge`
    ///
    /// Returns the number of survivors.
    pub fn retain_consistent(&mut self, knowledge: &Knowledge) -> usize {
        for (flag, word) in self.live.iter_mut().zip(self.words) {
            if *flag && !knowledge.check(word) {
                *flag = false;
                self.live_count -= 1;
            }
        }
        self.live_count
    }

    /// Live words in pool order, with their original index
    pub fn survivors(&self) -> impl Iterator<Item = (usize, &'a Word)> + '_ {
        let words = self.words;
        self.live
            .iter()
            .enumerate()
            .filter(|&(_, &live)| live)
            .map(move |(index, _)| (index, &words[index]))
    }
}
