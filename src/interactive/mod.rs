//! Interactive TUI for the color tile game

pub mod app;
pub mod rendering;

pub use app::{App, PlaySettings, run_tui};
