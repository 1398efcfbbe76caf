//! Validation of a submitted rule set against existing knowledge
//!
//! Runs before any mutation so a submission is accepted or rejected as a whole.
//! Each position is checked against the knowledge as it stood before the
//! submission; the first failing position is reported.

use super::Knowledge;
use super::error::{ConflictError, ConflictReason};
use crate::core::{Feedback, Mark, WORD_LEN, Word};

/// Check every position of the submission
pub(super) fn validate(
    knowledge: &Knowledge,
    word: &Word,
    feedback: &Feedback,
) -> Result<(), ConflictError> {
    (0..WORD_LEN).try_for_each(|position| check_rule(knowledge, word, feedback, position))
}

fn check_rule(
    knowledge: &Knowledge,
    word: &Word,
    feedback: &Feedback,
    position: usize,
) -> Result<(), ConflictError> {
    let letter = word.char_at(position);
    let mark = feedback.mark(position);
    let conflict = |reason| Err(ConflictError::new(position, letter, mark, reason));

    match mark {
        Mark::Correct => {
            if let Some(known) = knowledge.fixed_letter(position)
                && known != letter
            {
                return conflict(ConflictReason::FixedToOther(known as char));
            }
            if knowledge.excluded_at(position).contains(letter) {
                return conflict(ConflictReason::ExcludedHere);
            }
        }
        Mark::Present => {
            if knowledge.fixed_letter(position) == Some(letter) {
                return conflict(ConflictReason::AlreadyFixedHere);
            }
            let has_room = (0..WORD_LEN).any(|i| {
                knowledge.fixed_letter(i).is_none() && !knowledge.excluded_at(i).contains(letter)
            });
            if !has_room {
                return conflict(ConflictReason::NoRoomLeft);
            }
        }
        Mark::Absent => {
            // A repeated letter is only checked at its own index; the other
            // repeated-letter contradictions are not detected.
            let fixed_at = if word.count_of(letter) <= 1 {
                (0..WORD_LEN).find(|&i| knowledge.fixed_letter(i) == Some(letter))
            } else {
                (knowledge.fixed_letter(position) == Some(letter)).then_some(position)
            };
            if let Some(index) = fixed_at {
                return conflict(ConflictReason::FixedElsewhere(index));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knowledge_after(rules: &[(&str, &str)]) -> Knowledge {
        let mut knowledge = Knowledge::new();
        for (word, feedback) in rules {
            knowledge.submit(word, feedback).unwrap();
        }
        knowledge
    }

    fn validate_str(knowledge: &Knowledge, word: &str, feedback: &str) -> Result<(), ConflictError> {
        let word = Word::new(word).unwrap();
        let feedback = Feedback::parse(feedback).unwrap();
        validate(knowledge, &word, &feedback)
    }

    #[test]
    fn empty_knowledge_accepts_anything() {
        let knowledge = Knowledge::new();
        assert!(validate_str(&knowledge, "crane", "GYBBY").is_ok());
        assert!(validate_str(&knowledge, "aaaaa", "BBBBB").is_ok());
    }

    #[test]
    fn correct_rejects_other_fixed_letter() {
        let knowledge = knowledge_after(&[("trust", "BBBBG")]);
        let err = validate_str(&knowledge, "pleas", "BBBBG").unwrap_err();
        assert_eq!(err.position, 4);
        assert_eq!(err.letter, 's');
        assert_eq!(err.mark, Mark::Correct);
        assert_eq!(err.reason, ConflictReason::FixedToOther('t'));
    }

    #[test]
    fn correct_rejects_excluded_letter() {
        let knowledge = knowledge_after(&[("exalt", "YBYYG")]);
        // 'e' was yellow at index 0, so it cannot be green there
        let err = validate_str(&knowledge, "eject", "GBBBG").unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.reason, ConflictReason::ExcludedHere);
    }

    #[test]
    fn correct_repeated_is_accepted() {
        let knowledge = knowledge_after(&[("trust", "BBBBG")]);
        assert!(validate_str(&knowledge, "pleat", "GGGGG").is_ok());
    }

    #[test]
    fn present_rejects_letter_fixed_here() {
        let knowledge = knowledge_after(&[("pleat", "BBBBG")]);
        let err = validate_str(&knowledge, "trust", "BBBBY").unwrap_err();
        assert_eq!(err.position, 4);
        assert_eq!(err.reason, ConflictReason::AlreadyFixedHere);
    }

    #[test]
    fn present_rejects_when_no_room_left() {
        // 'z' is excluded everywhere after a grey first occurrence
        let knowledge = knowledge_after(&[("zesty", "BBBBB")]);
        let err = validate_str(&knowledge, "fuzzy", "BBYBB").unwrap_err();
        assert_eq!(err.position, 2);
        assert_eq!(err.reason, ConflictReason::NoRoomLeft);
    }

    #[test]
    fn absent_single_letter_rejects_fixed_anywhere() {
        let knowledge = knowledge_after(&[("trust", "BBBBG")]);
        let err = validate_str(&knowledge, "tangy", "BBBBB").unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.reason, ConflictReason::FixedElsewhere(4));
    }

    #[test]
    fn absent_repeated_letter_only_checks_own_index() {
        let knowledge = knowledge_after(&[("trust", "BBBBG")]);
        // Second 't' is grey at index 4 where 't' is fixed: rejected
        let err = validate_str(&knowledge, "tacit", "BBBBB").unwrap_err();
        assert_eq!(err.reason, ConflictReason::FixedElsewhere(4));
        // Grey repeated 't' away from the fixed index is not detected
        assert!(validate_str(&knowledge, "totem", "BBBBB").is_ok());
    }
}
