//! Board survey - generate many seeded games and collect statistics
//!
//! Every game owns its own RNG seeded from `base_seed + index`, so games run
//! in parallel without sharing state and a survey is reproducible.

use crate::core::{BoardConfig, BoardError};
use crate::game::{ColorGame, GameConfig};
use crate::maps::DEFAULT_MAPS;
use crate::wordlists::RandomWords;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Settings for a survey run
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub games: usize,
    /// Fixed color count, or `None` to draw one per game
    pub color_count: Option<usize>,
    pub max_attempts: usize,
    pub base_seed: u64,
}

impl SurveyConfig {
    #[must_use]
    pub const fn new(games: usize, base_seed: u64) -> Self {
        Self {
            games,
            color_count: None,
            max_attempts: BoardConfig::new(1).max_attempts,
            base_seed,
        }
    }
}

/// Outcome of one surveyed game
#[derive(Debug, Clone)]
struct GameSample {
    color_count: usize,
    attempts: usize,
    separation: f64,
    all_colors_share: f64,
}

/// Statistics over every surveyed game
#[derive(Debug)]
pub struct SurveyStatistics {
    pub games: usize,
    pub failures: usize,
    pub mean_attempts: f64,
    pub max_attempts: usize,
    /// Mean fraction of tiles that show every color
    pub mean_all_colors_share: f64,
    /// Games per color count
    pub color_counts: FxHashMap<usize, usize>,
    /// Separation bound per color count
    pub separations: FxHashMap<usize, f64>,
    pub total_time: Duration,
}

fn sample_game(
    config: &SurveyConfig,
    index: usize,
    words: &[String],
) -> Result<GameSample, BoardError> {
    let seed = config.base_seed.wrapping_add(index as u64);
    let mut rng = StdRng::seed_from_u64(seed);

    let board = config
        .color_count
        .map_or_else(
            || BoardConfig::with_random_color_count(&mut rng),
            BoardConfig::new,
        )
        .max_attempts(config.max_attempts);
    let color_count = board.color_count;

    let mut source = RandomWords::new(words.to_vec(), StdRng::seed_from_u64(!seed))?;
    let game = ColorGame::new(&GameConfig::new(board), DEFAULT_MAPS, &mut source, rng)?;

    Ok(GameSample {
        color_count,
        attempts: game.board().attempts(),
        separation: game.board().separation(),
        all_colors_share: game.all_colors_share(),
    })
}

/// Generate `config.games` games in parallel, filling helpers from `words`
#[must_use]
pub fn run_survey(config: &SurveyConfig, words: &[String]) -> SurveyStatistics {
    info!("surveying {} games from seed {}", config.games, config.base_seed);

    let pb = ProgressBar::new(config.games as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let results: Vec<Result<GameSample, BoardError>> = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let result = sample_game(config, index, words);
            if let Err(err) = &result {
                debug!("game {index} failed: {err}");
            }
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    let samples: Vec<&GameSample> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    let failures = results.len() - samples.len();

    let mut color_counts: FxHashMap<usize, usize> = FxHashMap::default();
    let mut separations: FxHashMap<usize, f64> = FxHashMap::default();
    for sample in &samples {
        *color_counts.entry(sample.color_count).or_insert(0) += 1;
        separations.insert(sample.color_count, sample.separation);
    }

    let mean = |f: fn(&GameSample) -> f64| {
        if samples.is_empty() {
            0.0
        } else {
            samples.iter().map(|s| f(s)).sum::<f64>() / samples.len() as f64
        }
    };

    SurveyStatistics {
        games: results.len(),
        failures,
        mean_attempts: mean(|s| s.attempts as f64),
        max_attempts: samples.iter().map(|s| s.attempts).max().unwrap_or(0),
        mean_all_colors_share: mean(|s| s.all_colors_share),
        color_counts,
        separations,
        total_time: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{HELPER_WORDS, loader::words_from_slice};

    #[test]
    fn survey_counts_every_game() {
        let words = words_from_slice(HELPER_WORDS);
        let stats = run_survey(&SurveyConfig::new(12, 40), &words);
        assert_eq!(stats.games, 12);
        assert_eq!(stats.failures, 0);
        assert_eq!(stats.color_counts.values().sum::<usize>(), 12);
        assert!(
            stats
                .color_counts
                .keys()
                .all(|c| (BoardConfig::MIN_COLORS..=BoardConfig::MAX_COLORS).contains(c))
        );
        assert!(stats.mean_attempts >= 4.0);
        assert!((0.0..=1.0).contains(&stats.mean_all_colors_share));
    }

    #[test]
    fn survey_is_reproducible() {
        let words = words_from_slice(HELPER_WORDS);
        let mut config = SurveyConfig::new(6, 7);
        config.color_count = Some(5);
        let a = run_survey(&config, &words);
        let b = run_survey(&config, &words);
        assert!((a.mean_attempts - b.mean_attempts).abs() < f64::EPSILON);
        assert!((a.mean_all_colors_share - b.mean_all_colors_share).abs() < f64::EPSILON);
        assert!((a.separations[&5] - 0.059_375).abs() < 1e-12);
    }

    #[test]
    fn failed_games_are_counted() {
        let words = words_from_slice(HELPER_WORDS);
        let mut config = SurveyConfig::new(3, 1);
        config.max_attempts = 0;
        let stats = run_survey(&config, &words);
        assert_eq!(stats.failures, 3);
        assert_eq!(stats.max_attempts, 0);
        assert!(stats.color_counts.is_empty());
    }

    #[test]
    fn empty_word_list_fails_every_game() {
        let stats = run_survey(&SurveyConfig::new(2, 3), &[]);
        assert_eq!(stats.failures, 2);
    }
}
