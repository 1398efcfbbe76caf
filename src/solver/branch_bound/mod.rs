//! Branch-and-bound recommender
//!
//! Picks the survivor that minimizes the mean number of words left after it
//! is guessed, averaged over every other survivor as the hidden answer.

mod evaluate;
mod search;

pub use evaluate::GuessScore;

use super::config::{SearchConfig, SearchMode};
use super::session::Session;
use super::strategy::{Recommendation, Recommender};
use crate::core::{Feedback, Word};
use crate::knowledge::{ConflictError, Knowledge};
use rayon::prelude::*;
use tracing::debug;

/// Exhaustive recommender with early termination
#[derive(Debug, Clone)]
pub struct BranchAndBoundRecommender<'a> {
    session: Session<'a>,
    config: SearchConfig,
}

impl<'a> BranchAndBoundRecommender<'a> {
    /// Create a sequential recommender over `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::solver::{BranchAndBoundRecommender, Recommender};
    /// use wordle_advisor::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["abbey", "trust", "exalt"]);
    /// let mut recommender = BranchAndBoundRecommender::new(&words);
    ///
    /// let best = &recommender.recommend()[0];
    /// assert!(words.contains(&best.word));
    /// ```
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self::with_config(words, SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(words: &'a [Word], config: SearchConfig) -> Self {
        Self {
            session: Session::new(words),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Install or clear the opening returned for an untouched pool
    pub fn set_opening(&mut self, opening: Option<Recommendation>) {
        self.config.opening = opening;
    }

    fn indexed_survivors(&mut self) -> Vec<(usize, &'a Word)> {
        self.session.filter();
        self.session.pool().survivors().collect()
    }

    /// Unpruned mean score for every survivor, best first
    ///
    /// Ties keep pool order. Slower than [`recommend`](Recommender::recommend)
    /// but reports every candidate. Honors the configured [`SearchMode`].
    pub fn rank_all(&mut self) -> Vec<Recommendation> {
        let survivors = self.indexed_survivors();
        let knowledge = self.session.knowledge();

        let score_one = |&(_, guess): &(usize, &'a Word)| {
            let score = evaluate::full_evaluation(knowledge, guess, &survivors);
            Recommendation::from_pass_count(guess.clone(), score.pass_count, survivors.len())
        };

        let mut ranked: Vec<Recommendation> = match self.config.mode {
            SearchMode::Sequential => survivors.iter().map(score_one).collect(),
            SearchMode::Parallel => survivors.par_iter().map(score_one).collect(),
        };

        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
        ranked
    }

    /// Evaluate any word as a guess against the current survivors
    pub fn score_guess(&mut self, guess: &Word) -> GuessScore {
        let survivors = self.indexed_survivors();
        evaluate::full_evaluation(self.session.knowledge(), guess, &survivors)
    }
}

impl<'a> Recommender<'a> for BranchAndBoundRecommender<'a> {
    fn add_knowledge(&mut self, word: &Word, feedback: &Feedback) -> Result<(), ConflictError> {
        self.session.add_knowledge(word, feedback)
    }

    fn recommend(&mut self) -> Vec<Recommendation> {
        let survivors = self.indexed_survivors();

        if let Some(opening) = &self.config.opening
            && self.session.pool().is_untouched()
        {
            debug!(word = %opening.word, "using installed opening");
            return vec![opening.clone()];
        }

        let knowledge = self.session.knowledge();
        let ranked = match self.config.mode {
            SearchMode::Sequential => search::search_sequential(knowledge, &survivors),
            SearchMode::Parallel => search::search_parallel(knowledge, &survivors),
        };

        debug!(
            survivors = survivors.len(),
            completed = ranked.len(),
            mode = ?self.config.mode,
            "search finished"
        );

        ranked
            .first()
            .map(|best| {
                let word = &self.session.pool().words()[best.index];
                Recommendation::from_pass_count(word.clone(), best.pass_count, survivors.len())
            })
            .into_iter()
            .collect()
    }

    fn reset(&mut self) {
        self.session.reset();
    }

    fn knowledge(&self) -> &Knowledge {
        self.session.knowledge()
    }

    fn survivors(&mut self) -> Vec<&'a Word> {
        self.session.survivors()
    }
}
