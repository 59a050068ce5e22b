//! Lowercase letter sets
//!
//! A `LetterSet` packs membership of the 26 ASCII letters into one `u32`.

use std::fmt;

/// The lowercase alphabet in order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Map a character to its alphabet index (0 for 'a'), ignoring case
///
/// Returns `None` for anything that is not an ASCII letter.
#[inline]
#[must_use]
pub const fn letter_index(ch: char) -> Option<u8> {
    if ch.is_ascii_alphabetic() {
        Some(ch.to_ascii_lowercase() as u8 - b'a')
    } else {
        None
    }
}

/// A set of lowercase letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALL: Self = Self((1 << 26) - 1);

    /// Collect every letter that appears in `text`, ignoring case and non-letters
    ///
    /// # Examples
    /// ```
    /// use color_tiles::core::LetterSet;
    ///
    /// let set = LetterSet::from_text("Dust II");
    /// assert_eq!(set.to_string(), "distu");
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.chars().filter_map(letter_index).fold(Self::EMPTY, |set, index| {
            Self(set.0 | (1 << index))
        })
    }

    /// Add a letter, returning `true` if it was not already present
    ///
    /// Non-letters are ignored and return `false`.
    pub fn insert(&mut self, letter: char) -> bool {
        match letter_index(letter) {
            Some(index) => {
                let bit = 1 << index;
                let added = self.0 & bit == 0;
                self.0 |= bit;
                added
            }
            None => false,
        }
    }

    /// Check membership, ignoring case
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match letter_index(letter) {
            Some(index) => self.0 & (1 << index) != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ALPHABET
            .iter()
            .enumerate()
            .filter(move |&(i, _)| self.0 & (1 << i) != 0)
            .map(|(_, &letter)| char::from(letter))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_index_ignores_case() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('1'), None);
        assert_eq!(letter_index(' '), None);
        assert_eq!(letter_index('é'), None);
    }

    #[test]
    fn all_contains_alphabet() {
        assert_eq!(LetterSet::ALL.len(), 26);
        assert_eq!(LetterSet::ALL.to_string(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn from_text_skips_non_letters() {
        let set = LetterSet::from_text("Nuke-42 !");
        assert_eq!(set.to_string(), "eknu");
        assert!(set.contains('N'));
        assert!(!set.contains('4'));
    }

    #[test]
    fn insert_reports_new_letters() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert('q'));
        assert!(!set.insert('Q'));
        assert!(!set.insert('?'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn set_operations() {
        let a = LetterSet::from_text("abc");
        let b = LetterSet::from_text("bcd");
        assert_eq!(a.union(b).to_string(), "abcd");
        assert_eq!(a.intersection(b).to_string(), "bc");
        assert_eq!(a.difference(b).to_string(), "a");
        assert!(LetterSet::from_text("cb").is_subset(a));
        assert!(!b.is_subset(a));
        assert!(LetterSet::EMPTY.is_subset(a));
    }

    #[test]
    fn collect_from_chars() {
        let set: LetterSet = "Mirage".chars().collect();
        assert_eq!(set.to_string(), "aegimr");
    }
}
