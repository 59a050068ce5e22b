//! Command implementations

pub mod draft;
pub mod grid;
pub mod palette;
pub mod survey;

pub use draft::{DraftConfig, DraftResult, run_draft};
pub use grid::{GridCommand, parse_command, run_grid};
pub use palette::{PaletteResult, generate_palette};
pub use survey::{SurveyConfig, SurveyStatistics, run_survey};
