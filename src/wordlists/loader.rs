//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Normalise one line of a word list, dropping blank lines
fn clean_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use color_tiles::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split text into cleaned words, one per line
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content.lines().filter_map(clean_line).collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use color_tiles::wordlists::loader::words_from_slice;
/// use color_tiles::wordlists::HELPER_WORDS;
///
/// let words = words_from_slice(HELPER_WORDS);
/// assert_eq!(words.len(), HELPER_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| clean_line(s)).collect()
}
