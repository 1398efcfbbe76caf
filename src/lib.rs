//! Wordle Advisor
//!
//! Recommends Wordle guesses. Feedback from each round is merged into a
//! constraint model of the hidden word, and a branch-and-bound search picks
//! the candidate that leaves the fewest words on average.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Feedback, Word};
//! use wordle_advisor::solver::{BranchAndBoundRecommender, Recommender};
//! use wordle_advisor::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["abbey", "trust", "exalt"]);
//! let mut recommender = BranchAndBoundRecommender::new(&words);
//!
//! // trust played against the hidden word abbey: every letter is grey
//! let feedback = Feedback::simulate(&words[1], &words[0]);
//! assert_eq!(feedback.to_string(), "BBBBB");
//! recommender.add_knowledge(&words[1], &feedback).unwrap();
//!
//! // exalt contains the grey t, so only abbey is left
//! let survivors: Vec<&str> = recommender.survivors().into_iter().map(Word::text).collect();
//! assert_eq!(survivors, ["abbey"]);
//! ```

// Core domain types
pub mod core;

// Constraint engine
pub mod knowledge;

// Recommendation strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod error;
pub mod logging;

pub use error::{Error, Result};
