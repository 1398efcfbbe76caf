//! Word solving command
//!
//! Plays a recommender against a known answer and records every step.

use crate::core::{Feedback, Word};
use crate::error::{Error, Result};
use crate::solver::Recommender;
use tracing::debug;

/// Default guess limit for a single game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Configuration for solving a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    /// Played as the first guess instead of asking the recommender
    pub first_word: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
            first_word: None,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub fn with_first_word(mut self, first_word: Option<String>) -> Self {
        self.first_word = first_word;
        self
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

impl SolveResult {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Recommender score; absent for a forced first word
    pub score: Option<f64>,
}

/// Solve a specific word with the given recommender
///
/// The recommender is reset first. The game stops when the answer is found,
/// the recommender runs out of candidates, or `max_guesses` is reached.
///
/// # Errors
///
/// Returns an error if:
/// - The target or first word is not a valid word
/// - The target is not in the recommender's word list
/// - The recommender rejects oracle feedback
pub fn solve_word<'a, R: Recommender<'a>>(
    config: &SolveConfig,
    recommender: &mut R,
) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())?;
    let first_word = config.first_word.as_deref().map(Word::new).transpose()?;

    recommender.reset();
    if !recommender.survivors().contains(&&target) {
        return Err(Error::NotInWordList(target.text().to_owned()));
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 0..config.max_guesses {
        let candidates_before = recommender.survivors().len();

        let (guess, score) = match (turn, &first_word) {
            (0, Some(forced)) => (forced.clone(), None),
            _ => match recommender.recommend().into_iter().next() {
                Some(best) => (best.word, Some(best.score)),
                None => break,
            },
        };

        let feedback = Feedback::simulate(&guess, &target);
        let solved = feedback.is_solved();

        let candidates_after = if solved {
            1
        } else {
            recommender.add_knowledge(&guess, &feedback)?;
            recommender.survivors().len()
        };

        debug!(
            turn = turn + 1,
            guess = %guess,
            feedback = %feedback,
            candidates_before,
            candidates_after,
            "played guess"
        );

        guesses.push(GuessStep {
            word: guess.text().to_owned(),
            feedback,
            candidates_before,
            candidates_after,
            score,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target.clone(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{BaselineRecommender, BranchAndBoundRecommender};
    use crate::wordlists::ANSWERS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_succeeds() {
        let words = words_from_slice(&ANSWERS[..50]);
        let mut recommender = BranchAndBoundRecommender::new(&words);

        let result = solve_word(&SolveConfig::new("aback".to_string()), &mut recommender).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word, "aback");
        assert!(result.guesses.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let words = words_from_slice(&ANSWERS[..50]);
        let mut recommender = BranchAndBoundRecommender::new(&words);

        let result = solve_word(&SolveConfig::new("abbey".to_string()), &mut recommender).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn target_outside_word_list_is_rejected() {
        let words = words_from_slice(&ANSWERS[..50]);
        let mut recommender = BaselineRecommender::new(&words);

        let result = solve_word(&SolveConfig::new("zzzzz".to_string()), &mut recommender);
        assert!(matches!(result, Err(Error::NotInWordList(_))));

        let result = solve_word(&SolveConfig::new("zz".to_string()), &mut recommender);
        assert!(matches!(result, Err(Error::Word(_))));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let words = words_from_slice(&ANSWERS[..50]);
        let mut recommender = BaselineRecommender::new(&words);
        let target = ANSWERS[49].to_string();

        let config = SolveConfig::new(target).with_max_guesses(1);
        let result = solve_word(&config, &mut recommender).unwrap();

        assert_eq!(result.guess_count(), 1);
        assert!(!result.success);
    }

    #[test]
    fn forced_first_word_is_played() {
        let words = words_from_slice(&["abbey", "trust", "exalt", "pleat"]);
        let mut recommender = BaselineRecommender::new(&words);

        let config =
            SolveConfig::new("pleat".to_string()).with_first_word(Some("trust".to_string()));
        let result = solve_word(&config, &mut recommender).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses[0].word, "trust");
        assert_eq!(result.guesses[0].feedback.to_string(), "BBBBG");
        assert!(result.guesses[0].score.is_none());
        // exalt comes before pleat in pool order
        let played: Vec<_> = result.guesses.iter().map(|g| g.word.as_str()).collect();
        assert_eq!(played, vec!["trust", "exalt", "pleat"]);
    }

    #[test]
    fn solving_resets_previous_game() {
        let words = words_from_slice(&["abbey", "trust", "exalt", "pleat"]);
        let mut recommender = BaselineRecommender::new(&words);

        solve_word(&SolveConfig::new("pleat".to_string()), &mut recommender).unwrap();
        let result = solve_word(&SolveConfig::new("abbey".to_string()), &mut recommender).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses[0].candidates_before, 4);
    }
}
