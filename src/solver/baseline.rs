//! Baseline strategy: the first few survivors in pool order

use super::session::Session;
use super::strategy::{Recommendation, Recommender};
use crate::core::{Feedback, Word};
use crate::knowledge::{ConflictError, Knowledge};

/// Maximum number of recommendations returned
pub const BASELINE_LIMIT: usize = 5;

/// Score given to every baseline recommendation
pub const BASELINE_SCORE: f64 = 1.0;

/// Reference strategy with no search at all
#[derive(Debug, Clone)]
pub struct BaselineRecommender<'a> {
    session: Session<'a>,
}

impl<'a> BaselineRecommender<'a> {
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            session: Session::new(words),
        }
    }
}

impl<'a> Recommender<'a> for BaselineRecommender<'a> {
    fn add_knowledge(&mut self, word: &Word, feedback: &Feedback) -> Result<(), ConflictError> {
        self.session.add_knowledge(word, feedback)
    }

    fn recommend(&mut self) -> Vec<Recommendation> {
        self.session.filter();
        self.session
            .pool()
            .survivors()
            .take(BASELINE_LIMIT)
            .map(|(_, word)| Recommendation::new(word.clone(), BASELINE_SCORE))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn texts(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations.iter().map(|r| r.word.text()).collect()
    }

    #[test]
    fn returns_first_five_in_pool_order() {
        let words = words_from_slice(&["abbey", "abate", "abyss", "algae", "babes", "kebab", "orbit"]);
        let mut recommender = BaselineRecommender::new(&words);

        let recommendations = recommender.recommend();
        assert_eq!(
            texts(&recommendations),
            vec!["abbey", "abate", "abyss", "algae", "babes"]
        );
        assert!(recommendations.iter().all(|r| (r.score - BASELINE_SCORE).abs() < f64::EPSILON));
    }

    #[test]
    fn filters_before_recommending() {
        let words = words_from_slice(&["abbey", "trust", "exalt", "pleat"]);
        let mut recommender = BaselineRecommender::new(&words);
        let trust = Word::new("trust").unwrap();
        recommender
            .add_knowledge(&trust, &"BBBBG".parse().unwrap())
            .unwrap();

        assert_eq!(texts(&recommender.recommend()), vec!["exalt", "pleat"]);
    }

    #[test]
    fn empty_pool_gives_no_recommendations() {
        let words: Vec<Word> = Vec::new();
        let mut recommender = BaselineRecommender::new(&words);
        assert!(recommender.recommend().is_empty());
    }
}
