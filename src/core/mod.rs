//! Core puzzle model
//!
//! The hue separation bound, letter sets, colors and the color/letter board.
//! Nothing here draws or reads input; randomness always comes in as an explicit `Rng`.

mod board;
mod color;
mod error;
pub mod hue;
mod letters;

pub use board::{BoardConfig, ColorLetterBoard, assign_letters, generate_colors, owner_of};
pub use color::{Color, Hsv, Rgb};
pub use error::BoardError;
pub use hue::{circular_distance, max_separation};
pub use letters::{ALPHABET, LetterSet, letter_index};
