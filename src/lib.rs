//! Color Tiles
//!
//! Party games for picking competitive maps: a color tile deduction game where
//! every letter of the alphabet belongs to one of a few well separated colors,
//! a map grid with shared-letter hints, and a weighted map draft.
//!
//! # Quick Start
//!
//! ```rust
//! use color_tiles::core::{BoardConfig, ColorLetterBoard};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut board = ColorLetterBoard::new(&BoardConfig::new(5), &mut rng).unwrap();
//!
//! // Flipping a tile reveals its letters on whichever colors own them
//! board.reveal_letters("Nuke");
//! let owner = board.owner_of('n').unwrap();
//! assert!(owner.revealed().contains('n'));
//! ```

// Core puzzle model
pub mod core;

// Map pool and draft
pub mod maps;

// Game rules
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
