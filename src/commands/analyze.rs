//! Word analysis command
//!
//! Scores one guess against the whole candidate pool without pruning.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{BranchAndBoundRecommender, Recommendation, SearchConfig};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    /// Mean words left after the guess, over every possible answer
    pub mean_remaining: f64,
    /// Most words left by any single answer
    pub worst_case: usize,
    pub total_candidates: usize,
    /// 1-based position among all candidates; `None` if the word is not one
    pub rank: Option<usize>,
    pub best: Option<Recommendation>,
}

/// Analyze a word as an opening guess against `words`
///
/// Any valid word can be analyzed; only words in the list get a rank.
///
/// # Errors
///
/// Returns an error if the word is not 5 letters a-z.
pub fn analyze_word(word: &str, words: &[Word], config: SearchConfig) -> Result<AnalysisResult> {
    let guess = Word::new(word)?;
    let mut recommender = BranchAndBoundRecommender::with_config(words, config);

    let score = recommender.score_guess(&guess);
    let ranked = recommender.rank_all();
    let rank = ranked
        .iter()
        .position(|r| r.word == guess)
        .map(|index| index + 1);

    Ok(AnalysisResult {
        word: guess.text().to_owned(),
        mean_remaining: score.mean,
        worst_case: score.worst_case,
        total_candidates: words.len(),
        rank,
        best: ranked.into_iter().next(),
    })
}
