//! Compact set of lowercase letters

use std::fmt;

/// A set of the letters `a`-`z`, stored as a 26-bit mask
///
/// Copying a `LetterSet` is a plain integer copy, which keeps `Knowledge`
/// clones cheap inside the search loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "letters must be a-z");
        1 << (letter - b'a')
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'a');
        set.insert(b'z');
        set.insert(b'a');
        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert!(!set.contains(b'm'));
        assert_eq!(set.to_string(), "az");

        set.remove(b'a');
        set.remove(b'q');
        assert!(!set.contains(b'a'));
        assert_eq!(set.to_string(), "z");
    }

    #[test]
    fn subset_relation() {
        let small: LetterSet = b"ab".iter().copied().collect();
        let large: LetterSet = b"abc".iter().copied().collect();

        assert!(small.is_subset(large));
        assert!(!large.is_subset(small));
        assert!(LetterSet::EMPTY.is_subset(small));
        assert_eq!(small.intersection(large), small);
    }

    #[test]
    fn display_is_alphabetical() {
        let set: LetterSet = b"zeta".iter().copied().collect();
        assert_eq!(set.to_string(), "aetz");
        assert_eq!(set.iter().collect::<Vec<_>>(), b"aetz".to_vec());
    }
}
