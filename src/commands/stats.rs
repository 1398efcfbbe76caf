//! Batch simulation over the answer list
//!
//! Plays the recommender against every answer (or a limited or random subset)
//! and aggregates how many guesses each game took.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::error::Result;
use crate::output::formatters::{batch_progress, histogram_bar};
use crate::solver::{Recommendation, Recommender, RecommenderKind};
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Which answers to simulate and how to open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsConfig {
    /// Only the first `limit` answers, in list order
    pub limit: Option<usize>,
    /// A random sample of this many answers; applied after `limit`
    pub sample: Option<usize>,
    /// Forced first guess for every game
    pub first_word: Option<String>,
}

/// Aggregate results of a batch run
#[derive(Debug, Clone)]
pub struct SimulationStatistics {
    pub total_words: usize,
    pub solved: usize,
    /// Answers the recommender could not reach
    pub failures: Vec<String>,
    /// Guess count -> number of solved games
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub opening: Option<String>,
}

/// Pick the answers to simulate
#[must_use]
pub fn select_answers<'w>(
    answers: &'w [Word],
    config: &StatsConfig,
    rng: &mut impl Rng,
) -> Vec<&'w Word> {
    let limited = &answers[..config.limit.unwrap_or(answers.len()).min(answers.len())];

    match config.sample {
        Some(size) => limited.choose_multiple(rng, size).collect(),
        None => limited.iter().collect(),
    }
}

/// Compute the opening once and install it as the fast path
///
/// Only the branch-and-bound strategy has an opening to install. Returns the
/// opening recommendation, if any.
pub fn install_opening(recommender: &mut RecommenderKind<'_>) -> Option<Recommendation> {
    let RecommenderKind::BranchAndBound(inner) = recommender else {
        return None;
    };

    inner.reset();
    inner.set_opening(None);
    let opening = inner.recommend().into_iter().next()?;
    info!(word = %opening.word, score = opening.score, "computed opening guess");
    inner.set_opening(Some(opening.clone()));
    Some(opening)
}

/// Play every selected answer to completion
///
/// A game ends when it is solved or the recommender has nothing left to
/// suggest. Every unsolved guess eliminates itself, so no game can take more
/// guesses than there are words.
///
/// # Errors
///
/// Returns an error if the forced first word is invalid, an answer is missing
/// from the recommender's word list, or oracle feedback is rejected.
pub fn run_stats<'a, R: Recommender<'a>>(
    recommender: &mut R,
    answers: &[&Word],
    first_word: Option<&str>,
) -> Result<SimulationStatistics> {
    recommender.reset();
    let max_guesses = recommender.survivors().len() + 1;

    let progress = batch_progress(answers.len());
    let total_start = Instant::now();

    let mut guess_counts: Vec<usize> = Vec::with_capacity(answers.len());
    let mut failures = Vec::new();
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut opening = None;

    for (idx, answer) in answers.iter().enumerate() {
        let config = SolveConfig::new(answer.text().to_owned())
            .with_max_guesses(max_guesses)
            .with_first_word(first_word.map(str::to_owned));
        let result = solve_word(&config, recommender)?;

        if opening.is_none() {
            opening = result.guesses.first().map(|step| step.word.clone());
        }

        if result.success {
            let count = result.guess_count();
            guess_counts.push(count);
            *guess_distribution.entry(count).or_insert(0) += 1;
        } else {
            debug!(answer = %answer, "failed to solve");
            progress.println(format!("Failed to guess the word {answer}."));
            failures.push(answer.text().to_owned());
        }

        if idx % 10 == 0 && !guess_counts.is_empty() {
            let avg = guess_counts.iter().sum::<usize>() as f64 / guess_counts.len() as f64;
            progress.set_message(format!("Avg: {avg:.2}"));
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete!");

    let solved = guess_counts.len();
    let average_guesses = if solved > 0 {
        guess_counts.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    Ok(SimulationStatistics {
        total_words: answers.len(),
        solved,
        failures,
        guess_distribution,
        total_time: total_start.elapsed(),
        average_guesses,
        max_guesses: guess_counts.iter().copied().max().unwrap_or(0),
        min_guesses: guess_counts.iter().copied().min().unwrap_or(0),
        opening,
    })
}

/// Print batch statistics with a guess histogram
pub fn print_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if let Some(opening) = &stats.opening {
        println!("  Opening guess:       {}", opening.to_uppercase());
    }
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", percentage(stats.solved, stats.total_words)).green()
    );
    let failed = stats.failures.len();
    println!(
        "  Failures:            {}",
        if failed == 0 {
            "0".green()
        } else {
            failed.to_string().red()
        }
    );

    if stats.solved > 0 {
        println!("  Max guesses:         {}", stats.max_guesses);
        println!(
            "  Average guesses:     {}",
            format!("{:.3}", stats.average_guesses)
                .bright_yellow()
                .bold()
        );
        println!("  Min guesses:         {}", stats.min_guesses);
    }
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let bar = histogram_bar(count, max_count, 40);
        println!(
            "  {guesses:2} guesses: {bar} {count:4} ({:5.1}%)",
            percentage(count, stats.solved)
        );
    }
    println!("  {:>11} {}", "Total:", stats.solved);

    if !stats.failures.is_empty() {
        println!("\n😰 {}", "Unsolved".yellow().bold());
        for word in stats.failures.iter().take(10) {
            println!("  {}", word.to_uppercase().yellow());
        }
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{BaselineRecommender, SearchConfig};
    use crate::wordlists::ANSWERS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn select_respects_limit_and_sample() {
        let words = words_from_slice(&ANSWERS[..20]);
        let mut rng = StdRng::seed_from_u64(7);

        let all = select_answers(&words, &StatsConfig::default(), &mut rng);
        assert_eq!(all.len(), 20);

        let config = StatsConfig {
            limit: Some(5),
            ..StatsConfig::default()
        };
        let limited = select_answers(&words, &config, &mut rng);
        assert_eq!(limited, words[..5].iter().collect::<Vec<_>>());

        let config = StatsConfig {
            limit: Some(10),
            sample: Some(3),
            ..StatsConfig::default()
        };
        let sampled = select_answers(&words, &config, &mut rng);
        assert_eq!(sampled.len(), 3);
        assert!(sampled.iter().all(|w| words[..10].contains(w)));
    }

    #[test]
    fn limit_beyond_list_is_clamped() {
        let words = words_from_slice(&ANSWERS[..3]);
        let config = StatsConfig {
            limit: Some(100),
            ..StatsConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_answers(&words, &config, &mut rng).len(), 3);
    }

    #[test]
    fn baseline_solves_every_answer() {
        let words = words_from_slice(&ANSWERS[..30]);
        let answers: Vec<&Word> = words.iter().collect();
        let mut recommender = BaselineRecommender::new(&words);

        let stats = run_stats(&mut recommender, &answers, None).unwrap();

        assert_eq!(stats.total_words, 30);
        assert_eq!(stats.solved, 30);
        assert!(stats.failures.is_empty());
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 30);
        assert_eq!(stats.opening.as_deref(), Some("aback"));
    }

    #[test]
    fn forced_first_word_opens_every_game() {
        let words = words_from_slice(&ANSWERS[..10]);
        let answers: Vec<&Word> = words.iter().collect();
        let mut recommender = BaselineRecommender::new(&words);

        let stats = run_stats(&mut recommender, &answers, Some("raise")).unwrap();

        assert_eq!(stats.solved, 10);
        assert_eq!(stats.opening.as_deref(), Some("raise"));
        // raise is not among the first ten answers
        assert!(stats.min_guesses >= 2);
    }

    #[test]
    fn opening_is_installed_for_branch_and_bound() {
        let words = words_from_slice(&ANSWERS[..20]);
        let mut kind = RecommenderKind::from_name("exhaustive", &words, SearchConfig::default());

        let opening = install_opening(&mut kind).unwrap();
        let RecommenderKind::BranchAndBound(inner) = &kind else {
            panic!("expected branch-and-bound");
        };
        assert_eq!(inner.config().opening.as_ref(), Some(&opening));
        assert_eq!(kind.recommend(), vec![opening]);
    }

    #[test]
    fn baseline_has_no_opening() {
        let words = words_from_slice(&ANSWERS[..5]);
        let mut kind = RecommenderKind::from_name("baseline", &words, SearchConfig::default());
        assert!(install_opening(&mut kind).is_none());
    }
}
