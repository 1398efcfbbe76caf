//! Search configuration

use super::strategy::Recommendation;

/// How the branch-and-bound search walks the candidate guesses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// One guess after another on the calling thread
    #[default]
    Sequential,
    /// Guesses spread across the rayon pool with a shared bound
    Parallel,
}

impl SearchMode {
    #[must_use]
    pub const fn from_flag(parallel: bool) -> Self {
        if parallel { Self::Parallel } else { Self::Sequential }
    }
}

/// Settings for a [`BranchAndBoundRecommender`](super::BranchAndBoundRecommender)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchConfig {
    pub mode: SearchMode,
    /// Returned as-is while nothing has been eliminated from the pool
    pub opening: Option<Recommendation>,
}

impl SearchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Recommendation) -> Self {
        self.opening = Some(opening);
        self
    }
}
