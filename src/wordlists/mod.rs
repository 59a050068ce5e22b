//! Word supply for helper tiles
//!
//! Provides the embedded helper word list, file loading and the `WordSource`
//! capability games draw their filler words from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{HELPER_WORDS, HELPER_WORDS_COUNT};
pub use source::{RandomLetters, RandomWords, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_count_matches_const() {
        assert_eq!(HELPER_WORDS.len(), HELPER_WORDS_COUNT);
    }

    #[test]
    fn helper_words_are_lowercase_letters() {
        for &word in HELPER_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn helper_words_fill_a_board() {
        // A 6x5 grid with no maps still needs 30 distinct-enough words
        assert!(HELPER_WORDS_COUNT >= 30);
    }
}
