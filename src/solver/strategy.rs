//! Recommendation strategies
//!
//! Defines the Recommender trait and the closed set of strategies behind it.

use super::baseline::BaselineRecommender;
use super::branch_bound::BranchAndBoundRecommender;
use super::config::SearchConfig;
use crate::core::{Feedback, Word};
use crate::knowledge::{ConflictError, Knowledge};
use std::fmt;

/// A suggested guess with its figure of merit
///
/// Lower is better for branch-and-bound scores (mean words left after the
/// guess); the baseline uses a constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub word: Word,
    pub score: f64,
}

impl Recommendation {
    #[must_use]
    pub const fn new(word: Word, score: f64) -> Self {
        Self { word, score }
    }

    /// Mean remaining words from a pass count over `survivors` candidates
    ///
    /// The guess itself is not counted as a possible answer, so the divisor
    /// is `survivors - 1`; a lone survivor keeps the raw count.
    #[must_use]
    pub fn from_pass_count(word: Word, pass_count: u64, survivors: usize) -> Self {
        let score = if survivors > 1 {
            pass_count as f64 / (survivors - 1) as f64
        } else {
            pass_count as f64
        };
        Self::new(word, score)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.word, self.score)
    }
}

/// Capability shared by every recommendation strategy
pub trait Recommender<'a> {
    /// Merge feedback for a guessed word into the knowledge
    ///
    /// # Errors
    /// Returns `ConflictError` if the feedback contradicts what is known;
    /// nothing is changed in that case.
    fn add_knowledge(&mut self, word: &Word, feedback: &Feedback) -> Result<(), ConflictError>;

    /// Best guesses first; empty once no candidate remains
    fn recommend(&mut self) -> Vec<Recommendation>;

    /// Start a new puzzle
    fn reset(&mut self);

    fn knowledge(&self) -> &Knowledge;

    /// Words still consistent with the knowledge, in pool order
    fn survivors(&mut self) -> Vec<&'a Word>;
}

/// Enum wrapper for all strategies
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum RecommenderKind<'a> {
    /// First few survivors, constant score
    Baseline(BaselineRecommender<'a>),
    /// Minimizes mean remaining words with a pruned exhaustive search
    BranchAndBound(BranchAndBoundRecommender<'a>),
}

impl<'a> RecommenderKind<'a> {
    /// Create a strategy from its name
    ///
    /// Supported names: "baseline", "first5", "exhaustive", "branch-and-bound".
    /// Defaults to branch-and-bound if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, words: &'a [Word], config: SearchConfig) -> Self {
        match name {
            "baseline" | "first5" => Self::Baseline(BaselineRecommender::new(words)),
            _ => Self::BranchAndBound(BranchAndBoundRecommender::with_config(words, config)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Baseline(_) => "baseline",
            Self::BranchAndBound(_) => "branch-and-bound",
        }
    }
}

impl<'a> Recommender<'a> for RecommenderKind<'a> {
    fn add_knowledge(&mut self, word: &Word, feedback: &Feedback) -> Result<(), ConflictError> {
        match self {
            Self::Baseline(r) => r.add_knowledge(word, feedback),
            Self::BranchAndBound(r) => r.add_knowledge(word, feedback),
        }
    }

    fn recommend(&mut self) -> Vec<Recommendation> {
        match self {
            Self::Baseline(r) => r.recommend(),
            Self::BranchAndBound(r) => r.recommend(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Baseline(r) => r.reset(),
            Self::BranchAndBound(r) => r.reset(),
        }
    }

    fn knowledge(&self) -> &Knowledge {
        match self {
            Self::Baseline(r) => r.knowledge(),
            Self::BranchAndBound(r) => r.knowledge(),
        }
    }

    fn survivors(&mut self) -> Vec<&'a Word> {
        match self {
            Self::Baseline(r) => r.survivors(),
            Self::BranchAndBound(r) => r.survivors(),
        }
    }
}
