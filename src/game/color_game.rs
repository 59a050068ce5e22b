//! The color tile game
//!
//! A grid of hidden tiles, most of them helper words and some of them map
//! names. Every hidden tile shows which colors its letters belong to. Flipping
//! a tile reveals its word and, on each color, the letters of that word the
//! color owns. The player is told which map to FIND next; any other map they
//! flip is eliminated.

use crate::core::{BoardConfig, BoardError, ColorLetterBoard, LetterSet};
use crate::wordlists::WordSource;
use log::{debug, info};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Settings for one color tile game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board: BoardConfig,
    /// Grid size as (columns, rows)
    pub grid: (usize, usize),
    /// A helper tile starts flipped with probability 1 in `helper_reveal_odds`
    pub helper_reveal_odds: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(board: BoardConfig) -> Self {
        Self {
            board,
            grid: (6, 5),
            helper_reveal_odds: 5,
        }
    }

    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.grid.0 * self.grid.1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// One of the maps being chosen between
    Map,
    /// A filler word that only gives away letters
    Helper,
}

/// One tile of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub word: String,
    pub kind: TileKind,
    pub revealed: bool,
    /// Set when a map other than the current target is flipped
    pub eliminated: bool,
    /// Indices of the colors owning this word's letters, first occurrence first
    pub colors: Vec<usize>,
}

impl Tile {
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self.kind, TileKind::Map)
    }

    /// Flipped map that survived elimination
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.is_map() && self.revealed && !self.eliminated
    }
}

/// What happened when a tile was flipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOutcome {
    pub index: usize,
    pub kind: TileKind,
    pub eliminated: bool,
    /// Letters that became visible because of this flip
    pub newly_revealed: LetterSet,
}

/// State of one color tile game
#[derive(Debug, Clone)]
pub struct ColorGame<R> {
    board: ColorLetterBoard,
    tiles: Vec<Tile>,
    grid: (usize, usize),
    target: Option<String>,
    next_target: Option<String>,
    rng: R,
}

impl<R: Rng> ColorGame<R> {
    /// Build a game over `maps`, filling the rest of the grid from `words`
    ///
    /// Maps beyond the grid size are dropped. Tile order is shuffled and some
    /// helper tiles start flipped.
    ///
    /// # Errors
    /// Returns `BoardError` if the board cannot be generated.
    pub fn new<S: AsRef<str>>(
        config: &GameConfig,
        maps: &[S],
        words: &mut dyn WordSource,
        mut rng: R,
    ) -> Result<Self, BoardError> {
        let total = config.tile_count();
        let maps: Vec<String> = maps
            .iter()
            .take(total)
            .map(|m| m.as_ref().to_string())
            .collect();

        let mut entries: Vec<(String, TileKind)> = maps
            .iter()
            .map(|m| (m.clone(), TileKind::Map))
            .collect();
        while entries.len() < total {
            entries.push((words.get_word(), TileKind::Helper));
        }
        entries.shuffle(&mut rng);

        let mut board = ColorLetterBoard::new(&config.board, &mut rng)?;

        let mut tiles: Vec<Tile> = entries
            .into_iter()
            .map(|(word, kind)| Tile {
                colors: board.colors_in(&word),
                word,
                kind,
                revealed: false,
                eliminated: false,
            })
            .collect();

        if config.helper_reveal_odds > 0 {
            for tile in tiles
                .iter_mut()
                .filter(|t| matches!(t.kind, TileKind::Helper))
            {
                if rng.random_range(1..=config.helper_reveal_odds) == config.helper_reveal_odds {
                    tile.revealed = true;
                    board.reveal_letters(&tile.word);
                }
            }
        }

        let mut game = Self {
            board,
            tiles,
            grid: config.grid,
            target: None,
            next_target: None,
            rng,
        };
        game.target = game.pick_hidden_map(None);
        let first = game.target.clone();
        game.next_target = game.pick_hidden_map(first.as_deref());

        info!(
            "color game: {} tiles, {} maps, {} colors, {:.1}% tiles show every color",
            game.tiles.len(),
            maps.len(),
            game.board.colors().len(),
            game.all_colors_share() * 100.0
        );

        Ok(game)
    }

    fn is_hidden_map(&self, name: &str) -> bool {
        self.tiles
            .iter()
            .any(|t| t.is_map() && !t.revealed && t.word == name)
    }

    /// Random hidden map other than `except`
    fn pick_hidden_map(&mut self, except: Option<&str>) -> Option<String> {
        let hidden: Vec<&Tile> = self
            .tiles
            .iter()
            .filter(|t| t.is_map() && !t.revealed && Some(t.word.as_str()) != except)
            .collect();
        hidden.choose(&mut self.rng).map(|t| t.word.clone())
    }

    fn advance_prompt(&mut self) {
        let queued = self
            .next_target
            .take()
            .filter(|name| self.is_hidden_map(name));
        self.target = match queued {
            Some(name) => Some(name),
            None => self.pick_hidden_map(None),
        };
        let current = self.target.clone();
        self.next_target = self.pick_hidden_map(current.as_deref());
    }

    /// Flip the tile at `index`
    ///
    /// Returns `None` if the index is outside the grid or the tile is already
    /// flipped. A flipped map that is not the current target is eliminated.
    /// The FIND prompt then moves on to the queued map, or to a fresh hidden map
    /// if the queued one was the tile just flipped.
    pub fn reveal(&mut self, index: usize) -> Option<RevealOutcome> {
        let tile = self.tiles.get(index).filter(|t| !t.revealed)?;
        let word = tile.word.clone();
        let kind = tile.kind;

        let before = self.revealed_letters();
        self.board.reveal_letters(&word);
        let newly_revealed = self.revealed_letters().difference(before);

        let eliminated =
            matches!(kind, TileKind::Map) && self.target.as_deref() != Some(word.as_str());

        let tile = &mut self.tiles[index];
        tile.revealed = true;
        tile.eliminated = eliminated;

        self.advance_prompt();

        debug!(
            "revealed '{word}' ({kind:?}), eliminated: {eliminated}, new letters: {newly_revealed}"
        );

        Some(RevealOutcome {
            index,
            kind,
            eliminated,
            newly_revealed,
        })
    }

    /// Every letter revealed on any color so far
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        self.board
            .colors()
            .iter()
            .fold(LetterSet::EMPTY, |acc, c| acc.union(c.revealed()))
    }

    #[must_use]
    pub const fn board(&self) -> &ColorLetterBoard {
        &self.board
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Grid size as (columns, rows)
    #[must_use]
    pub const fn grid(&self) -> (usize, usize) {
        self.grid
    }

    /// Map the player should FIND now
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Map queued after the current target
    #[must_use]
    pub fn next_target(&self) -> Option<&str> {
        self.next_target.as_deref()
    }

    /// Fraction of tiles whose word contains a letter of every color
    #[must_use]
    pub fn all_colors_share(&self) -> f64 {
        if self.tiles.is_empty() {
            return 0.0;
        }
        let color_count = self.board.colors().len();
        let full = self
            .tiles
            .iter()
            .filter(|t| t.colors.len() == color_count)
            .count();
        full as f64 / self.tiles.len() as f64
    }

    /// No map tile is left hidden
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.tiles.iter().any(|t| t.is_map() && !t.revealed)
    }
}
