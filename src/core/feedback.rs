//! Wordle feedback: the oracle and the interchange encoding
//!
//! Feedback is one mark per position:
//! - Correct (green): right letter, right position
//! - Present (yellow): letter is in the answer somewhere else
//! - Absent (grey): no unmatched occurrence of the letter remains in the answer
//!
//! The interchange encoding is a 5-character string over `G`, `Y`, `B`.

use super::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Interchange symbol: `G`, `Y` or `B`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Tile emoji used for display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single symbol, case-insensitive
    ///
    /// Accepts `G`/`Y`/`B`, `-` and `_` as grey, and the tile emoji.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        })
    }
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must be exactly 5 symbols, got {found}")]
    LengthMismatch { found: usize },
    #[error("invalid feedback symbol {symbol:?} at index {position}; use G, Y or B")]
    InvalidSymbol { position: usize, symbol: char },
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0 == [Mark::Correct; WORD_LEN]
    }

    /// Compute the feedback Wordle gives when `guess` is played against `answer`
    ///
    /// Repeated letters earn only as many Correct/Present marks as the answer
    /// holds; Correct matches are claimed first, then Present marks go to the
    /// leftmost guess positions.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Word};
    ///
    /// let guess = Word::new("abyss").unwrap();
    /// let answer = Word::new("abbey").unwrap();
    /// assert_eq!(Feedback::simulate(&guess, &answer).to_string(), "GGYBB");
    /// ```
    // Index needed to compare guess[i] with answer[i] and set marks[i]
    #[allow(clippy::needless_range_loop)]
    #[must_use]
    pub fn simulate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut marks = [Mark::Present; WORD_LEN];

        for i in 0..WORD_LEN {
            if guess[i] == answer[i] {
                marks[i] = Mark::Correct;
            } else if !answer.contains(&guess[i]) {
                marks[i] = Mark::Absent;
            }
        }

        let mut consumed = marks.map(|mark| mark == Mark::Correct);

        for i in 0..WORD_LEN {
            if marks[i] != Mark::Present {
                continue;
            }

            let letter = guess[i];
            match (0..WORD_LEN).find(|&j| !consumed[j] && answer[j] == letter) {
                Some(j) => consumed[j] = true,
                None => marks[i] = Mark::Absent,
            }
        }

        Self(marks)
    }

    /// Parse the `G`/`Y`/`B` interchange encoding
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the string is not 5 symbols long,
    /// or `FeedbackError::InvalidSymbol` for the first unrecognised symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("gybbB").unwrap();
    /// assert_eq!(feedback.mark(0), Mark::Correct);
    /// assert_eq!(feedback.mark(1), Mark::Present);
    /// assert!(Feedback::parse("GYX").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = s.trim().chars().collect();

        if symbols.len() != WORD_LEN {
            return Err(FeedbackError::LengthMismatch {
                found: symbols.len(),
            });
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (position, (&symbol, mark)) in symbols.iter().zip(marks.iter_mut()).enumerate() {
            *mark = Mark::from_symbol(symbol)
                .ok_or(FeedbackError::InvalidSymbol { position, symbol })?;
        }

        Ok(Self(marks))
    }

    /// Render as tile emoji, e.g. "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}
