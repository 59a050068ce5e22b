//! The map grid game
//!
//! Map names are mixed with random helper strings in a grid. Helper tiles
//! start face up. Each tile carries two hints: how many letters it shares with
//! the other tiles in its row, and in its column. A rotating set of hidden
//! maps is marked ELIMINATING; flipping one of those cancels it.

use crate::wordlists::WordSource;
use log::debug;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;

/// Count the distinct letters of `a` that also occur in `b`, ignoring case and spaces
///
/// # Examples
/// ```
/// use color_tiles::game::shared_letters;
///
/// assert_eq!(shared_letters("Dust II", "Inferno"), 1);
/// assert_eq!(shared_letters("Mirage", "Nuke"), 1);
/// ```
#[must_use]
pub fn shared_letters(a: &str, b: &str) -> usize {
    let b_letters: FxHashSet<char> = b.chars().map(|c| c.to_ascii_lowercase()).collect();
    a.chars()
        .filter(|c| *c != ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect::<FxHashSet<char>>()
        .into_iter()
        .filter(|c| b_letters.contains(c))
        .count()
}

/// One tile of the map grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTile {
    pub name: String,
    pub is_map: bool,
    pub revealed: bool,
    /// An ELIMINATING map that was flipped
    pub cancelled: bool,
    /// Letters shared with the other tiles in the same row
    pub row_shared: usize,
    /// Letters shared with the other tiles in the same column
    pub col_shared: usize,
}

/// State of one map grid game
#[derive(Debug, Clone)]
pub struct MapGrid<R> {
    tiles: Vec<GridTile>,
    width: usize,
    height: usize,
    pick_count: usize,
    eliminating: Vec<usize>,
    rng: R,
}

impl<R: Rng> MapGrid<R> {
    /// Build a grid of `maps` plus `helper_count` helper strings, `width` tiles wide
    ///
    /// `pick_count` maps are marked ELIMINATING at a time. A `width` of zero is
    /// treated as one.
    pub fn new<S: AsRef<str>>(
        maps: &[S],
        helper_count: usize,
        width: usize,
        pick_count: usize,
        helpers: &mut dyn WordSource,
        mut rng: R,
    ) -> Self {
        let width = width.max(1);

        let mut tiles: Vec<GridTile> = maps
            .iter()
            .map(|m| (m.as_ref().to_string(), true))
            .chain((0..helper_count).map(|_| (helpers.get_word(), false)))
            .map(|(name, is_map)| GridTile {
                name,
                is_map,
                revealed: !is_map,
                cancelled: false,
                row_shared: 0,
                col_shared: 0,
            })
            .collect();
        tiles.shuffle(&mut rng);

        let height = tiles.len().div_ceil(width);

        let mut grid = Self {
            tiles,
            width,
            height,
            pick_count,
            eliminating: Vec::new(),
            rng,
        };
        grid.compute_hints();
        grid.pick_eliminating();
        grid
    }

    fn compute_hints(&mut self) {
        let len = self.tiles.len();
        for index in 0..len {
            let row = index / self.width;
            let col = index % self.width;

            let row_tiles = (row * self.width..((row + 1) * self.width).min(len))
                .filter(|&other| other != index);
            let col_tiles = (0..self.height)
                .map(|r| col + r * self.width)
                .filter(|&other| other < len && other != index);

            let name = &self.tiles[index].name;
            let row_shared: usize = row_tiles
                .map(|other| shared_letters(name, &self.tiles[other].name))
                .sum();
            let col_shared: usize = col_tiles
                .map(|other| shared_letters(name, &self.tiles[other].name))
                .sum();

            let tile = &mut self.tiles[index];
            tile.row_shared = row_shared;
            tile.col_shared = col_shared;
        }
    }

    /// Choose a fresh set of distinct hidden maps to mark ELIMINATING
    fn pick_eliminating(&mut self) {
        let hidden: Vec<usize> = self
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_map && !t.revealed)
            .map(|(i, _)| i)
            .collect();

        self.eliminating = hidden
            .choose_multiple(&mut self.rng, self.pick_count)
            .copied()
            .collect();
        debug!("eliminating: {:?}", self.eliminating_names());
    }

    /// Flip the tile at `index`
    ///
    /// Returns `false` if there is no such tile or it is already face up. A
    /// flipped tile that was marked ELIMINATING is cancelled. A new ELIMINATING
    /// set is picked after every flip.
    pub fn reveal(&mut self, index: usize) -> bool {
        let Some(tile) = self.tiles.get_mut(index).filter(|t| !t.revealed) else {
            return false;
        };
        tile.revealed = true;
        if self.eliminating.contains(&index) {
            tile.cancelled = true;
        }
        self.pick_eliminating();
        true
    }

    #[must_use]
    pub fn tiles(&self) -> &[GridTile] {
        &self.tiles
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Indices of the tiles currently marked ELIMINATING
    #[must_use]
    pub fn eliminating(&self) -> &[usize] {
        &self.eliminating
    }

    #[must_use]
    pub fn eliminating_names(&self) -> Vec<&str> {
        self.eliminating
            .iter()
            .map(|&i| self.tiles[i].name.as_str())
            .collect()
    }

    /// Pairwise shared-letter counts in tile order, `None` on the diagonal
    #[must_use]
    pub fn shared_matrix(&self) -> Vec<Vec<Option<usize>>> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, a)| {
                self.tiles
                    .iter()
                    .enumerate()
                    .map(|(j, b)| (i != j).then(|| shared_letters(&a.name, &b.name)))
                    .collect()
            })
            .collect()
    }

    /// No map tile is left face down
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.tiles.iter().any(|t| t.is_map && !t.revealed)
    }
}
