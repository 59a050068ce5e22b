//! Word sources
//!
//! Games never reach for a global word list; they are handed a `WordSource`.

use crate::core::{ALPHABET, BoardError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::ops::RangeInclusive;

/// Something that can hand out filler words for helper tiles
pub trait WordSource {
    /// Produce the next word
    fn get_word(&mut self) -> String;
}

/// Uniform random choice from a fixed, non-empty word list
#[derive(Debug, Clone)]
pub struct RandomWords<R> {
    words: Vec<String>,
    rng: R,
}

impl<R: Rng> RandomWords<R> {
    /// Build a source over `words`
    ///
    /// # Errors
    /// Returns `BoardError::EmptyWordSource` if `words` is empty.
    pub fn new(words: Vec<String>, rng: R) -> Result<Self, BoardError> {
        if words.is_empty() {
            return Err(BoardError::EmptyWordSource);
        }
        Ok(Self { words, rng })
    }
}

impl<R: Rng> WordSource for RandomWords<R> {
    fn get_word(&mut self) -> String {
        // Non-empty by construction
        self.words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }
}

/// Random lowercase letter strings, used as helper tiles in the map grid
#[derive(Debug, Clone)]
pub struct RandomLetters<R> {
    length: RangeInclusive<usize>,
    rng: R,
}

impl<R: Rng> RandomLetters<R> {
    /// Strings of 4 to 7 letters
    pub const fn new(rng: R) -> Self {
        Self::with_length(4..=7, rng)
    }

    pub const fn with_length(length: RangeInclusive<usize>, rng: R) -> Self {
        Self { length, rng }
    }
}

impl<R: Rng> WordSource for RandomLetters<R> {
    fn get_word(&mut self) -> String {
        let length = if self.length.is_empty() {
            0
        } else {
            self.rng.random_range(self.length.clone())
        };
        (0..length)
            .map(|_| char::from(ALPHABET[self.rng.random_range(0..ALPHABET.len())]))
            .collect()
    }
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn get_word(&mut self) -> String {
        (**self).get_word()
    }
}
