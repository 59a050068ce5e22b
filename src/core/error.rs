//! Error type for board construction and word supply

use std::fmt;

/// Error type for invalid board configurations and failed generation
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// A color count of zero was requested
    InvalidColorCount(usize),
    /// A hue, saturation or value range is empty, inverted or not finite
    InvalidRange(&'static str),
    /// Letters were to be assigned but there are no colors to receive them
    NoColors,
    /// Rejection sampling ran out of attempts before placing every color
    HueSpaceExhausted {
        placed: usize,
        requested: usize,
        attempts: usize,
    },
    /// A word source was built from an empty corpus
    EmptyWordSource,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorCount(count) => {
                write!(f, "Color count must be at least 1, got {count}")
            }
            Self::InvalidRange(which) => write!(f, "Invalid {which} range"),
            Self::NoColors => write!(f, "Cannot assign letters without any colors"),
            Self::HueSpaceExhausted {
                placed,
                requested,
                attempts,
            } => write!(
                f,
                "Placed only {placed} of {requested} colors after {attempts} attempts; \
                 lower the color count or raise the hue ceiling"
            ),
            Self::EmptyWordSource => write!(f, "Word source contains no words"),
        }
    }
}

impl std::error::Error for BoardError {}
