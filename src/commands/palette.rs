//! Board generation command
//!
//! Builds one board and reports its colors with every letter they own.

use crate::core::{BoardConfig, BoardError, ColorLetterBoard};
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of generating a single board
pub struct PaletteResult {
    pub board: ColorLetterBoard,
    pub duration: Duration,
}

/// Generate a board for `config`
///
/// # Errors
///
/// Returns `BoardError` if the settings are invalid or the hue space is
/// exhausted before every color is placed.
pub fn generate_palette<R: Rng + ?Sized>(
    config: &BoardConfig,
    rng: &mut R,
) -> Result<PaletteResult, BoardError> {
    let start = Instant::now();
    let board = ColorLetterBoard::new(config, rng)?;
    Ok(PaletteResult {
        board,
        duration: start.elapsed(),
    })
}
