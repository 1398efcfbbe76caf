//! Constraint engine
//!
//! Accumulates feedback rules, rejects contradictory submissions as a whole,
//! and tests words against everything learned so far.

mod error;
mod letters;
mod state;
mod validate;

pub use error::{ConflictError, ConflictReason};
pub use letters::LetterSet;
pub use state::Knowledge;
