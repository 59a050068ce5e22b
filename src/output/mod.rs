//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_draft, print_grid, print_palette, print_shared_matrix, print_survey};
