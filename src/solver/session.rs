//! Pool and knowledge owned together by a recommender

use super::pool::CandidatePool;
use crate::core::{Feedback, Word};
use crate::knowledge::{ConflictError, Knowledge};
use tracing::{debug, warn};

/// Per-puzzle state: the filtered pool and the authoritative knowledge
#[derive(Debug, Clone)]
pub struct Session<'a> {
    pool: CandidatePool<'a>,
    knowledge: Knowledge,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            pool: CandidatePool::new(words),
            knowledge: Knowledge::new(),
        }
    }

    /// Merge feedback into the knowledge; the pool is filtered lazily
    ///
    /// # Errors
    /// Returns the conflict if the feedback contradicts what is known.
    pub fn add_knowledge(&mut self, word: &Word, feedback: &Feedback) -> Result<(), ConflictError> {
        self.knowledge.add(word, feedback).inspect_err(|error| {
            warn!(word = %word, feedback = %feedback, %error, "feedback rejected");
        })?;
        debug!(word = %word, feedback = %feedback, knowledge = %self.knowledge, "feedback accepted");
        Ok(())
    }

    /// Eliminate words failing the current knowledge, returning the survivor count
    pub fn filter(&mut self) -> usize {
        let before = self.pool.live_count();
        let after = self.pool.retain_consistent(&self.knowledge);
        debug!(before, after, "filtered candidate pool");
        after
    }

    pub fn reset(&mut self) {
        self.pool.reset();
        self.knowledge = Knowledge::new();
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool<'a> {
        &self.pool
    }

    /// Filter, then list the survivors in pool order
    pub fn survivors(&mut self) -> Vec<&'a Word> {
        self.filter();
        self.pool.survivors().map(|(_, word)| word).collect()
    }
}
