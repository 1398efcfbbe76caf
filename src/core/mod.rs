//! Core domain types for Wordle
//!
//! Words and feedback, including the feedback oracle. Everything here is pure.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LEN: usize = 5;
