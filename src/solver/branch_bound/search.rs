//! Bounded search over candidate guesses
//!
//! For every survivor taken as a guess, sum the words left over each other
//! survivor taken as the answer. A guess is abandoned as soon as its partial
//! sum exceeds the best completed total, since it can no longer win.

use super::evaluate::remaining_after;
use crate::core::Word;
use crate::knowledge::Knowledge;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// A guess that completed evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Index of the guess in the candidate pool
    pub index: usize,
    pub pass_count: u64,
}

/// Total remaining words for `guess`, or `None` once the total exceeds `bound()`
///
/// `bound` is re-read after every answer so a parallel search sees other
/// workers' progress.
fn pass_count_within(
    knowledge: &Knowledge,
    index: usize,
    guess: &Word,
    survivors: &[(usize, &Word)],
    bound: impl Fn() -> u64,
) -> Option<u64> {
    let mut total = 0u64;

    for &(answer_index, answer) in survivors {
        if answer_index == index {
            continue;
        }
        let remaining = remaining_after(knowledge, guess, answer, survivors)
            .expect("oracle feedback between two survivors is always consistent");
        total += remaining as u64;

        if total > bound() {
            trace!(guess = %guess, partial = total, "pruned");
            return None;
        }
    }

    trace!(guess = %guess, pass_count = total, "completed");
    Some(total)
}

/// Order completed guesses best first, ties by pool order
fn rank(mut scored: Vec<Scored>) -> Vec<Scored> {
    scored.sort_unstable_by_key(|s| (s.pass_count, s.index));
    scored
}

/// Evaluate the survivors one after another
pub fn search_sequential(knowledge: &Knowledge, survivors: &[(usize, &Word)]) -> Vec<Scored> {
    let mut best = u64::MAX;
    let mut completed = Vec::new();

    for &(index, guess) in survivors {
        if let Some(pass_count) = pass_count_within(knowledge, index, guess, survivors, || best) {
            best = pass_count;
            completed.push(Scored { index, pass_count });
        }
    }

    rank(completed)
}

/// Evaluate the survivors on the rayon pool, sharing one bound
///
/// Ranks exactly as [`search_sequential`]: the best total can never be
/// pruned, whatever order the workers finish in.
pub fn search_parallel(knowledge: &Knowledge, survivors: &[(usize, &Word)]) -> Vec<Scored> {
    let best = AtomicU64::new(u64::MAX);

    let completed = survivors
        .par_iter()
        .filter_map(|&(index, guess)| {
            let pass_count = pass_count_within(knowledge, index, guess, survivors, || {
                best.load(Ordering::Relaxed)
            })?;
            best.fetch_min(pass_count, Ordering::Relaxed);
            Some(Scored { index, pass_count })
        })
        .collect();

    rank(completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::branch_bound::evaluate::full_evaluation;
    use crate::wordlists::loader::words_from_slice;

    fn indexed(words: &[Word]) -> Vec<(usize, &Word)> {
        words.iter().enumerate().collect()
    }

    fn sample() -> Vec<Word> {
        words_from_slice(&[
            "abbey", "abate", "abyss", "algae", "babes", "kebab", "keeps", "opens", "orbit",
            "crane", "slate", "irate", "crate", "grate",
        ])
    }

    #[test]
    fn best_matches_full_evaluation() {
        let words = sample();
        let survivors = indexed(&words);
        let knowledge = Knowledge::new();

        let ranked = search_sequential(&knowledge, &survivors);
        let best = ranked[0];

        let full: Vec<u64> = survivors
            .iter()
            .map(|&(_, guess)| full_evaluation(&knowledge, guess, &survivors).pass_count)
            .collect();
        let minimum = *full.iter().min().unwrap();
        let first_minimum = full.iter().position(|&p| p == minimum).unwrap();

        assert_eq!(best.pass_count, minimum);
        assert_eq!(best.index, first_minimum);
    }

    #[test]
    fn completed_totals_are_exact() {
        let words = sample();
        let survivors = indexed(&words);
        let knowledge = Knowledge::new();

        for scored in search_sequential(&knowledge, &survivors) {
            let guess = &words[scored.index];
            let full = full_evaluation(&knowledge, guess, &survivors);
            assert_eq!(scored.pass_count, full.pass_count, "{guess}");
        }
    }

    #[test]
    fn parallel_matches_sequential_best() {
        let words = sample();
        let survivors = indexed(&words);
        let mut knowledge = Knowledge::new();
        knowledge.submit("trust", "BBBBB").unwrap();
        let survivors: Vec<_> = survivors
            .into_iter()
            .filter(|(_, word)| knowledge.check(word))
            .collect();

        let sequential = search_sequential(&knowledge, &survivors);
        let parallel = search_parallel(&knowledge, &survivors);
        assert_eq!(sequential[0], parallel[0]);
    }

    #[test]
    fn ties_resolve_to_pool_order() {
        // Disjoint words: every guess is all grey and separates nothing
        let words = words_from_slice(&["abcde", "fghij", "klmno"]);
        let survivors = indexed(&words);

        let ranked = search_sequential(&Knowledge::new(), &survivors);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|s| s.pass_count == 4));
        assert_eq!(ranked[0].index, 0);
    }

    #[test]
    fn single_survivor_scores_zero() {
        let words = words_from_slice(&["crane"]);
        let survivors = indexed(&words);

        let ranked = search_parallel(&Knowledge::new(), &survivors);
        assert_eq!(ranked, vec![Scored { index: 0, pass_count: 0 }]);
    }

    #[test]
    fn empty_pool_has_no_results() {
        assert!(search_sequential(&Knowledge::new(), &[]).is_empty());
        assert!(search_parallel(&Knowledge::new(), &[]).is_empty());
    }
}
