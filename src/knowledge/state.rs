//! Accumulated knowledge from feedback history

use super::error::ConflictError;
use super::letters::LetterSet;
use super::validate::validate;
use crate::core::{Feedback, Mark, WORD_LEN, Word};
use crate::error::Result;
use std::fmt;

/// Constraints accumulated from every accepted feedback submission
///
/// Three rule kinds are tracked:
/// - fixed letters (greens): `fixed[3] == Some(b'a')` means the 4th letter is 'a'
/// - excluded letters (yellows and greys): `excluded[3]` holds letters impossible at index 3
/// - required letters (yellows): letters that must appear in some unfixed position
///
/// A letter fixed at an index never appears in that index's excluded set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    fixed: [Option<u8>; WORD_LEN],
    excluded: [LetterSet; WORD_LEN],
    required: LetterSet,
}

impl Knowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter known to be at `position`, if any
    #[inline]
    #[must_use]
    pub const fn fixed_letter(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// Letters known to be impossible at `position`
    #[inline]
    #[must_use]
    pub const fn excluded_at(&self, position: usize) -> LetterSet {
        self.excluded[position]
    }

    /// Letters that must occur somewhere among the unfixed positions
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Check if nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validate and merge a feedback submission
    ///
    /// Either every rule of the submission is applied or none is.
    ///
    /// # Errors
    /// Returns `ConflictError` describing the first position whose rule
    /// contradicts existing knowledge; `self` is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Word};
    /// use wordle_advisor::knowledge::Knowledge;
    ///
    /// let mut knowledge = Knowledge::new();
    /// let guess = Word::new("trust").unwrap();
    /// knowledge.add(&guess, &Feedback::parse("BBBBG").unwrap()).unwrap();
    ///
    /// assert!(knowledge.check(&Word::new("pleat").unwrap()));
    /// assert!(!knowledge.check(&Word::new("trust").unwrap()));
    ///
    /// // 's' cannot be green where 't' is already known
    /// let clash = Word::new("pleas").unwrap();
    /// assert!(knowledge.add(&clash, &Feedback::parse("BBBBG").unwrap()).is_err());
    /// ```
    pub fn add(&mut self, word: &Word, feedback: &Feedback) -> Result<(), ConflictError> {
        validate(self, word, feedback)?;
        self.apply(word, feedback);
        Ok(())
    }

    /// Parse a guess and its `G`/`Y`/`B` feedback, then [`add`](Self::add) them
    ///
    /// # Errors
    /// Returns a length or symbol error if either string is malformed, checked
    /// before any validation, or the conflict reported by `add`.
    pub fn submit(&mut self, word: &str, feedback: &str) -> Result<()> {
        let word = Word::new(word)?;
        let feedback = Feedback::parse(feedback)?;
        self.add(&word, &feedback)?;
        Ok(())
    }

    fn apply(&mut self, word: &Word, feedback: &Feedback) {
        let positions = || word.chars().iter().copied().zip(feedback.marks()).enumerate();

        // Greens first: a fixed letter no longer needs to be found elsewhere
        for (i, (letter, &mark)) in positions() {
            if mark == Mark::Correct {
                self.fixed[i] = Some(letter);
                self.required.remove(letter);
            }
        }

        for (i, (letter, &mark)) in positions() {
            if mark == Mark::Present {
                self.excluded[i].insert(letter);
                self.required.insert(letter);
            }
        }

        for (i, (letter, &mark)) in positions() {
            if mark != Mark::Absent {
                continue;
            }

            if word.first_position(letter) == Some(i) {
                // First sighting: the letter is absent wherever it is not fixed
                for j in 0..WORD_LEN {
                    if self.fixed[j] != Some(letter) {
                        self.excluded[j].insert(letter);
                    }
                }
                self.required.remove(letter);
            } else {
                // Repeat: an earlier occurrence already carries the global signal
                self.excluded[i].insert(letter);
            }
        }
    }

    /// Check if `word` satisfies every accumulated rule
    #[must_use]
    pub fn check(&self, word: &Word) -> bool {
        let mut open = LetterSet::EMPTY;

        for (i, &letter) in word.chars().iter().enumerate() {
            match self.fixed[i] {
                Some(known) if known != letter => return false,
                Some(_) => {}
                None => open.insert(letter),
            }
            if self.excluded[i].contains(letter) {
                return false;
            }
        }

        self.required.is_subset(open)
    }

    /// [`check`](Self::check) for raw text; anything that is not a valid word fails
    #[must_use]
    pub fn check_text(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.check(&word))
    }

    /// Number of `words` that satisfy every accumulated rule
    #[must_use]
    pub fn count_passing<'w>(&self, words: impl IntoIterator<Item = &'w Word>) -> usize {
        words.into_iter().filter(|word| self.check(word)).count()
    }
}

impl fmt::Display for Knowledge {
    /// Compact summary, e.g. `a___e +s -lnrt`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for known in &self.fixed {
            write!(f, "{}", known.map_or('_', char::from))?;
        }

        if !self.required.is_empty() {
            write!(f, " +{}", self.required)?;
        }

        let everywhere = self
            .excluded
            .iter()
            .copied()
            .enumerate()
            .filter(|&(i, _)| self.fixed[i].is_none())
            .map(|(_, set)| set)
            .reduce(LetterSet::intersection);

        if let Some(absent) = everywhere
            && !absent.is_empty()
        {
            write!(f, " -{absent}")?;
        }

        Ok(())
    }
}
