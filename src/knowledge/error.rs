//! Conflicts between a submitted rule set and accumulated knowledge

use crate::core::Mark;
use thiserror::Error;

/// Why a single position's rule contradicts what is already known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConflictReason {
    #[error("that position is already known to be {0:?}")]
    FixedToOther(char),
    #[error("the letter is already known to be impossible there")]
    ExcludedHere,
    #[error("that position is already known to be this letter")]
    AlreadyFixedHere,
    #[error("the letter is impossible in every remaining unknown position")]
    NoRoomLeft,
    #[error("the letter is already known to be at index {0}")]
    FixedElsewhere(usize),
}

/// A submitted feedback rule contradicts accumulated knowledge
///
/// Carries the offending position, letter and mark so front-ends can explain
/// the rejection. The whole submission is rejected when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot add {letter:?} as {mark} at index {position}: {reason}")]
pub struct ConflictError {
    pub position: usize,
    pub letter: char,
    pub mark: Mark,
    pub reason: ConflictReason,
}

impl ConflictError {
    #[must_use]
    pub const fn new(position: usize, letter: u8, mark: Mark, reason: ConflictReason) -> Self {
        Self {
            position,
            letter: letter as char,
            mark,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_position_letter_and_rule() {
        let error = ConflictError::new(2, b'e', Mark::Correct, ConflictReason::FixedToOther('a'));
        assert_eq!(
            error.to_string(),
            "cannot add 'e' as correct at index 2: that position is already known to be 'a'"
        );
    }
}
