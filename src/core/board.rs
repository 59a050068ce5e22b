//! Color generation, letter allocation and reveal tracking
//!
//! A board is built in two phases: `generate_colors` rejection-samples hues
//! that keep the worst-case separation from each other, then `assign_letters`
//! deals the alphabet round-robin over those colors. After that the only
//! mutation is revealing letters.

use super::hue::{circular_distance, max_separation};
use super::letters::ALPHABET;
use super::{BoardError, Color, Hsv};
use log::{debug, warn};
use rand::Rng;
use std::ops::RangeInclusive;

/// Settings fixed once at game start
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Number of colors to generate
    pub color_count: usize,
    /// Length of the hue segment used by the separation bound
    pub hue_range_length: f64,
    pub saturation: RangeInclusive<f64>,
    pub value: RangeInclusive<f64>,
    /// Hues above this are rejected
    pub hue_ceiling: f64,
    /// Hues are drawn as `k / hue_steps` for integer `k` in `0..=hue_steps`
    pub hue_steps: u32,
    /// Total draws allowed across the whole generation
    pub max_attempts: usize,
}

impl BoardConfig {
    /// Smallest color count picked by `random_color_count`
    pub const MIN_COLORS: usize = 4;
    /// Largest color count picked by `random_color_count`
    pub const MAX_COLORS: usize = 8;

    /// Default settings for `color_count` colors
    #[must_use]
    pub const fn new(color_count: usize) -> Self {
        Self {
            color_count,
            hue_range_length: 0.95,
            saturation: 0.90..=1.00,
            value: 0.50..=0.90,
            hue_ceiling: 0.9,
            hue_steps: 1000,
            max_attempts: 100_000,
        }
    }

    /// Default settings with a color count drawn from `MIN_COLORS..=MAX_COLORS`
    pub fn with_random_color_count<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random_range(Self::MIN_COLORS..=Self::MAX_COLORS))
    }

    #[must_use]
    pub const fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Check the settings before any sampling happens
    ///
    /// # Errors
    /// Returns `BoardError` for a zero color count or an empty, inverted or
    /// non-finite range.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.color_count == 0 {
            return Err(BoardError::InvalidColorCount(self.color_count));
        }
        if !self.hue_range_length.is_finite() || self.hue_range_length <= 0.0 {
            return Err(BoardError::InvalidRange("hue"));
        }
        if !self.hue_ceiling.is_finite() || self.hue_ceiling <= 0.0 || self.hue_steps == 0 {
            return Err(BoardError::InvalidRange("hue ceiling"));
        }
        if !is_unit_range(&self.saturation) {
            return Err(BoardError::InvalidRange("saturation"));
        }
        if !is_unit_range(&self.value) {
            return Err(BoardError::InvalidRange("value"));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

fn is_unit_range(range: &RangeInclusive<f64>) -> bool {
    let (start, end) = (*range.start(), *range.end());
    start.is_finite() && end.is_finite() && 0.0 <= start && start <= end && end <= 1.0
}

/// Colors from one generation run plus the number of draws it took
#[derive(Debug, Clone)]
struct Generation {
    colors: Vec<Color>,
    separation: f64,
    attempts: usize,
}

fn sample_colors<R: Rng + ?Sized>(
    config: &BoardConfig,
    rng: &mut R,
) -> Result<Generation, BoardError> {
    config.validate()?;
    let separation = max_separation(config.hue_range_length, config.color_count)?;
    let steps = f64::from(config.hue_steps);

    let mut colors: Vec<Color> = Vec::with_capacity(config.color_count);
    let mut attempts = 0usize;

    while colors.len() < config.color_count {
        if attempts >= config.max_attempts {
            warn!(
                "hue space exhausted: {} of {} colors after {attempts} draws",
                colors.len(),
                config.color_count
            );
            return Err(BoardError::HueSpaceExhausted {
                placed: colors.len(),
                requested: config.color_count,
                attempts,
            });
        }
        attempts += 1;

        let hue = f64::from(rng.random_range(0..=config.hue_steps)) / steps;
        if hue > config.hue_ceiling {
            continue;
        }
        if colors
            .iter()
            .any(|c| circular_distance(hue, c.hue()) < separation)
        {
            continue;
        }

        let saturation = rng.random_range(config.saturation.clone());
        let value = rng.random_range(config.value.clone());
        colors.push(Color::new(Hsv::new(hue, saturation, value)));
    }

    debug!(
        "generated {} colors with separation {separation:.5} in {attempts} draws",
        colors.len()
    );

    Ok(Generation {
        colors,
        separation,
        attempts,
    })
}

/// Rejection-sample `config.color_count` well-separated colors
///
/// Every accepted hue is at most `config.hue_ceiling` and at least
/// `max_separation(config.hue_range_length, config.color_count)` away from every
/// other accepted hue on the hue circle. Colors come back in generation order
/// with no letters.
///
/// # Errors
/// Returns `BoardError::HueSpaceExhausted` when `config.max_attempts` draws are
/// used up, or a validation error for a bad config.
pub fn generate_colors<R: Rng + ?Sized>(
    config: &BoardConfig,
    rng: &mut R,
) -> Result<Vec<Color>, BoardError> {
    sample_colors(config, rng).map(|generation| generation.colors)
}

/// Deal all 26 letters over `colors`
///
/// Colors are visited in order, round and round; each visit moves one random
/// letter from the unassigned pool to that color. Any letters held from a
/// previous allocation are dropped first. With more than 26 colors the later
/// colors get none.
///
/// # Errors
/// Returns `BoardError::NoColors` for an empty slice.
pub fn assign_letters<R: Rng + ?Sized>(colors: &mut [Color], rng: &mut R) -> Result<(), BoardError> {
    if colors.is_empty() {
        return Err(BoardError::NoColors);
    }

    for color in colors.iter_mut() {
        color.clear_letters();
    }

    let mut pool: Vec<char> = ALPHABET.iter().copied().map(char::from).collect();
    while !pool.is_empty() {
        for color in colors.iter_mut() {
            if pool.is_empty() {
                break;
            }
            let letter = pool.remove(rng.random_range(0..pool.len()));
            color.assign_letter(letter);
        }
    }

    Ok(())
}

/// Find the color owning `letter`, ignoring case
///
/// Returns `None` for spaces, digits, punctuation and unassigned letters.
#[must_use]
pub fn owner_of(letter: char, colors: &[Color]) -> Option<&Color> {
    colors.iter().find(|color| color.owns(letter))
}

/// The colors of one game and their letters
#[derive(Debug, Clone)]
pub struct ColorLetterBoard {
    colors: Vec<Color>,
    separation: f64,
    attempts: usize,
}

impl ColorLetterBoard {
    /// Generate colors, then assign the alphabet to them
    ///
    /// # Errors
    /// Propagates `generate_colors` and `assign_letters` errors.
    ///
    /// # Examples
    /// ```
    /// use color_tiles::core::{BoardConfig, ColorLetterBoard};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let board = ColorLetterBoard::new(&BoardConfig::new(5), &mut rng).unwrap();
    ///
    /// assert_eq!(board.colors().len(), 5);
    /// assert!(board.owner_of('q').is_some());
    /// assert!(board.owner_of('?').is_none());
    /// ```
    pub fn new<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Result<Self, BoardError> {
        let Generation {
            mut colors,
            separation,
            attempts,
        } = sample_colors(config, rng)?;
        assign_letters(&mut colors, rng)?;

        Ok(Self {
            colors,
            separation,
            attempts,
        })
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Minimum circular hue distance the colors were generated with
    #[inline]
    #[must_use]
    pub const fn separation(&self) -> f64 {
        self.separation
    }

    /// Draws the rejection sampler needed
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Reveal the letters of a flipped tile on every color
    pub fn reveal_letters(&mut self, text: &str) {
        for color in &mut self.colors {
            color.reveal_letters(text);
        }
    }

    #[must_use]
    pub fn owner_of(&self, letter: char) -> Option<&Color> {
        owner_of(letter, &self.colors)
    }

    /// Index of the color owning `letter`
    #[must_use]
    pub fn owner_index(&self, letter: char) -> Option<usize> {
        self.colors.iter().position(|color| color.owns(letter))
    }

    /// Owners of the letters of `word`, in order of first appearance
    #[must_use]
    pub fn colors_in(&self, word: &str) -> Vec<usize> {
        let mut owners = Vec::new();
        for index in word.chars().filter_map(|ch| self.owner_index(ch)) {
            if !owners.contains(&index) {
                owners.push(index);
            }
        }
        owners
    }

    /// Letters across all colors still hidden from the player
    #[must_use]
    pub fn hidden_letters(&self) -> usize {
        self.colors.iter().map(Color::hidden_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn plain_colors(count: usize) -> Vec<Color> {
        (0..count)
            .map(|i| Color::new(Hsv::new(i as f64 / 40.0, 0.95, 0.7)))
            .collect()
    }

    fn assert_partition(colors: &[Color]) {
        let mut union = LetterSet::EMPTY;
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert!(a.assigned().intersection(b.assigned()).is_empty());
            }
            union = union.union(a.assigned());
        }
        assert_eq!(union, LetterSet::ALL);
        let total: usize = colors.iter().map(|c| c.assigned().len()).sum();
        assert_eq!(total, 26);
    }

    #[test]
    fn generation_respects_separation_and_ceiling() {
        for count in 1..=26 {
            let mut rng = StdRng::seed_from_u64(count as u64);
            let config = BoardConfig::new(count);
            let colors = generate_colors(&config, &mut rng).unwrap();
            let separation = max_separation(config.hue_range_length, count).unwrap();

            assert_eq!(colors.len(), count);
            for (i, a) in colors.iter().enumerate() {
                assert!(a.hue() <= config.hue_ceiling);
                let hsv = a.hsv();
                assert!(config.saturation.contains(&hsv.saturation));
                assert!(config.value.contains(&hsv.value));
                for b in &colors[i + 1..] {
                    assert!(
                        circular_distance(a.hue(), b.hue()) >= separation,
                        "count {count}: {} vs {}",
                        a.hue(),
                        b.hue()
                    );
                }
            }
        }
    }

    #[test]
    fn generated_colors_start_without_letters() {
        let mut rng = StdRng::seed_from_u64(3);
        let colors = generate_colors(&BoardConfig::new(4), &mut rng).unwrap();
        assert!(colors.iter().all(|c| c.assigned().is_empty()));
    }

    #[test]
    fn generation_is_reproducible_from_seed() {
        let config = BoardConfig::new(6);
        let a = generate_colors(&config, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = generate_colors(&config, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn exhausted_attempts_surface_as_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = BoardConfig::new(8).max_attempts(3);
        let result = generate_colors(&config, &mut rng);
        assert!(matches!(
            result,
            Err(BoardError::HueSpaceExhausted {
                requested: 8,
                attempts: 3,
                ..
            })
        ));
    }

    #[test]
    fn low_ceiling_cannot_fit_colors() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut config = BoardConfig::new(4).max_attempts(5_000);
        // Only hues 0.000..=0.010 survive the ceiling, far closer than the bound allows
        config.hue_ceiling = 0.01;
        let result = generate_colors(&config, &mut rng);
        assert!(matches!(
            result,
            Err(BoardError::HueSpaceExhausted { placed: 1, .. })
        ));
    }

    #[test]
    fn invalid_configs_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_colors(&BoardConfig::new(0), &mut rng),
            Err(BoardError::InvalidColorCount(0))
        );

        let mut config = BoardConfig::new(4);
        config.saturation = 0.9..=0.5;
        assert_eq!(
            generate_colors(&config, &mut rng),
            Err(BoardError::InvalidRange("saturation"))
        );

        let mut config = BoardConfig::new(4);
        config.value = 0.5..=1.5;
        assert_eq!(config.validate(), Err(BoardError::InvalidRange("value")));
    }

    #[test]
    fn letters_partition_alphabet_for_any_count() {
        for count in 1..=30 {
            let mut rng = StdRng::seed_from_u64(100 + count as u64);
            let mut colors = plain_colors(count);
            assign_letters(&mut colors, &mut rng).unwrap();
            assert_partition(&colors);
        }
    }

    #[test]
    fn one_color_takes_everything() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut colors = plain_colors(1);
        assign_letters(&mut colors, &mut rng).unwrap();
        assert_eq!(colors[0].assigned(), LetterSet::ALL);
    }

    #[test]
    fn surplus_colors_stay_empty() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut colors = plain_colors(30);
        assign_letters(&mut colors, &mut rng).unwrap();
        assert!(colors[..26].iter().all(|c| c.assigned().len() == 1));
        assert!(colors[26..].iter().all(|c| c.assigned().is_empty()));
    }

    #[test]
    fn five_colors_get_five_or_six_letters() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut colors = plain_colors(5);
        assign_letters(&mut colors, &mut rng).unwrap();

        let sizes: Vec<usize> = colors.iter().map(|c| c.assigned().len()).collect();
        assert!(sizes.iter().all(|&n| n == 5 || n == 6));
        assert_eq!(sizes.iter().filter(|&&n| n == 6).count(), 1);
    }

    #[test]
    fn reassigning_keeps_partition() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut colors = plain_colors(4);
        assign_letters(&mut colors, &mut rng).unwrap();
        assign_letters(&mut colors, &mut rng).unwrap();
        assert_partition(&colors);
    }

    #[test]
    fn no_colors_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut colors: Vec<Color> = Vec::new();
        assert_eq!(
            assign_letters(&mut colors, &mut rng),
            Err(BoardError::NoColors)
        );
    }

    #[test]
    fn owner_lookup_is_unique_and_case_insensitive() {
        let mut rng = StdRng::seed_from_u64(12);
        let board = ColorLetterBoard::new(&BoardConfig::new(6), &mut rng).unwrap();

        for ch in 'a'..='z' {
            let owners = board.colors().iter().filter(|c| c.owns(ch)).count();
            assert_eq!(owners, 1, "letter {ch}");
            assert_eq!(board.owner_index(ch), board.owner_index(ch.to_ascii_uppercase()));
        }
        for ch in [' ', '1', '-', '!'] {
            assert!(board.owner_of(ch).is_none());
        }
    }

    #[test]
    fn owner_of_unassigned_letter_is_none() {
        let colors = plain_colors(3);
        assert!(owner_of('a', &colors).is_none());
    }

    #[test]
    fn board_reveal_touches_only_owners() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut board = ColorLetterBoard::new(&BoardConfig::new(5), &mut rng).unwrap();
        board.reveal_letters("Overpass");

        let revealed = board
            .colors()
            .iter()
            .fold(LetterSet::EMPTY, |acc, c| acc.union(c.revealed()));
        assert_eq!(revealed, LetterSet::from_text("overpass"));
        assert_eq!(board.hidden_letters(), 26 - revealed.len());
        for color in board.colors() {
            assert!(color.revealed().is_subset(color.assigned()));
        }
    }

    #[test]
    fn colors_in_deduplicates_in_order() {
        let mut rng = StdRng::seed_from_u64(14);
        let board = ColorLetterBoard::new(&BoardConfig::new(4), &mut rng).unwrap();

        let owners = board.colors_in("Dust II");
        let mut expected = Vec::new();
        for ch in "dustii".chars() {
            let owner = board.owner_index(ch).unwrap();
            if !expected.contains(&owner) {
                expected.push(owner);
            }
        }
        assert_eq!(owners, expected);
        assert!(board.colors_in("123 ?").is_empty());
    }

    #[test]
    fn end_to_end_five_colors() {
        let mut rng = StdRng::seed_from_u64(2024);
        let board = ColorLetterBoard::new(&BoardConfig::new(5), &mut rng).unwrap();

        assert!((board.separation() - 0.059_375).abs() < 1e-12);
        assert!(board.attempts() >= 5);
        assert_partition(board.colors());
        for (i, a) in board.colors().iter().enumerate() {
            assert!((5..=6).contains(&a.assigned().len()));
            for b in &board.colors()[i + 1..] {
                assert!(circular_distance(a.hue(), b.hue()) >= board.separation());
            }
        }
    }
}
