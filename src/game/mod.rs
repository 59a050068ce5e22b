//! Game rules
//!
//! In-memory state machines for the two grid games. Rendering and input live
//! in `interactive` and `commands`.

pub mod color_game;
pub mod map_grid;

pub use color_game::{ColorGame, GameConfig, RevealOutcome, Tile, TileKind};
pub use map_grid::{GridTile, MapGrid, shared_letters};
