//! Guess recommendation
//!
//! Recommenders own a candidate pool and the knowledge gathered so far, and
//! turn them into ranked guesses.

pub mod baseline;
pub mod branch_bound;
pub mod config;
pub mod pool;
mod session;
pub mod strategy;

pub use baseline::BaselineRecommender;
pub use branch_bound::{BranchAndBoundRecommender, GuessScore};
pub use config::{SearchConfig, SearchMode};
pub use pool::CandidatePool;
pub use strategy::{Recommendation, Recommender, RecommenderKind};
