//! Hypothetical filtering and unpruned evaluation of a guess
//!
//! The full evaluation groups answers by the feedback they would produce, so
//! each distinct feedback is applied and counted only once.

use crate::core::{Feedback, Word};
use crate::knowledge::{ConflictError, Knowledge};
use rustc_hash::FxHashMap;

/// Survivors still consistent after learning `guess` scored against `answer`
///
/// Works on a clone; the authoritative knowledge is never touched.
///
/// # Errors
/// Returns the conflict if the feedback cannot be merged. This cannot happen
/// when `guess` and `answer` both satisfy `knowledge`.
pub fn remaining_after(
    knowledge: &Knowledge,
    guess: &Word,
    answer: &Word,
    survivors: &[(usize, &Word)],
) -> Result<usize, ConflictError> {
    remaining_for(knowledge, guess, &Feedback::simulate(guess, answer), survivors)
}

fn remaining_for(
    knowledge: &Knowledge,
    guess: &Word,
    feedback: &Feedback,
    survivors: &[(usize, &Word)],
) -> Result<usize, ConflictError> {
    let mut hypothetical = knowledge.clone();
    hypothetical.add(guess, feedback)?;
    Ok(hypothetical.count_passing(survivors.iter().map(|&(_, word)| word)))
}

/// Unpruned result for one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    /// Total remaining words summed over every possible answer
    pub pass_count: u64,
    /// Number of possible answers the total is taken over
    pub answers: usize,
    /// Mean remaining words
    pub mean: f64,
    /// Largest number of words left by any single answer
    pub worst_case: usize,
}

/// Evaluate `guess` against every survivor except itself
///
/// Feedback the engine cannot merge teaches nothing, so every survivor
/// counts as remaining for it. That only arises for guesses outside the
/// survivors.
#[must_use]
pub fn full_evaluation(
    knowledge: &Knowledge,
    guess: &Word,
    survivors: &[(usize, &Word)],
) -> GuessScore {
    let mut by_feedback: FxHashMap<Feedback, usize> = FxHashMap::default();
    let mut pass_count = 0u64;
    let mut answers = 0usize;
    let mut worst_case = 0usize;

    for &(_, answer) in survivors {
        if answer == guess {
            continue;
        }
        let feedback = Feedback::simulate(guess, answer);
        let remaining = *by_feedback.entry(feedback).or_insert_with(|| {
            remaining_for(knowledge, guess, &feedback, survivors).unwrap_or(survivors.len())
        });

        pass_count += remaining as u64;
        answers += 1;
        worst_case = worst_case.max(remaining);
    }

    let mean = if answers == 0 {
        0.0
    } else {
        pass_count as f64 / answers as f64
    };

    GuessScore {
        pass_count,
        answers,
        mean,
        worst_case,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn indexed(words: &[Word]) -> Vec<(usize, &Word)> {
        words.iter().enumerate().collect()
    }

    #[test]
    fn remaining_after_counts_consistent_survivors() {
        let words = words_from_slice(&["abbey", "trust", "exalt", "pleat"]);
        let survivors = indexed(&words);
        let knowledge = Knowledge::new();

        // trust vs pleat is BBBBG: exalt and pleat remain
        let remaining = remaining_after(&knowledge, &words[1], &words[3], &survivors).unwrap();
        assert_eq!(remaining, 2);

        // Guessing the answer leaves only the answer
        let remaining = remaining_after(&knowledge, &words[3], &words[3], &survivors).unwrap();
        assert_eq!(remaining, 1);
    }

    #[test]
    fn remaining_after_leaves_knowledge_untouched() {
        let words = words_from_slice(&["abbey", "trust"]);
        let survivors = indexed(&words);
        let knowledge = Knowledge::new();

        remaining_after(&knowledge, &words[0], &words[1], &survivors).unwrap();
        assert!(knowledge.is_empty());
    }

    #[test]
    fn full_evaluation_perfect_split() {
        let words = words_from_slice(&["crane", "slate", "zzzzz"]);
        let survivors = indexed(&words);

        // Every other answer gives distinct feedback and is pinned down
        let score = full_evaluation(&Knowledge::new(), &words[0], &survivors);
        assert_eq!(score.answers, 2);
        assert_eq!(score.pass_count, 2);
        assert_eq!(score.worst_case, 1);
        assert!((score.mean - 1.0).abs() < 1e-9);
    }

    #[test]
    fn full_evaluation_all_same_feedback() {
        let words = words_from_slice(&["aaaaa", "bbbbb", "ccccc", "zzzzz"]);
        let survivors = indexed(&words);

        // zzzzz leaves the three others indistinguishable
        let score = full_evaluation(&Knowledge::new(), &words[3], &survivors);
        assert_eq!(score.answers, 3);
        assert_eq!(score.worst_case, 3);
        assert_eq!(score.pass_count, 9);
    }

    #[test]
    fn full_evaluation_of_outside_guess_uses_every_answer() {
        let words = words_from_slice(&["irate", "crate", "grate"]);
        let survivors = indexed(&words);
        let guess = Word::new("crane").unwrap();

        let score = full_evaluation(&Knowledge::new(), &guess, &survivors);
        assert_eq!(score.answers, 3);
        // crate is identified; irate and grate share BGGBG
        assert_eq!(score.pass_count, 1 + 2 + 2);
        assert_eq!(score.worst_case, 2);
    }

    #[test]
    fn lone_survivor_scores_zero() {
        let words = words_from_slice(&["crane"]);
        let survivors = indexed(&words);

        let score = full_evaluation(&Knowledge::new(), &words[0], &survivors);
        assert_eq!(score.answers, 0);
        assert_eq!(score.pass_count, 0);
        assert!(score.mean.abs() < f64::EPSILON);
    }
}
