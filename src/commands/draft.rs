//! Weighted map draft command

use crate::maps::{MapPool, UnknownMap};
use rand::Rng;

/// Weight adjustments and draw size for a draft
#[derive(Debug, Clone, Default)]
pub struct DraftConfig {
    pub count: usize,
    pub halve: Vec<String>,
    pub double: Vec<String>,
    pub remove: Vec<String>,
}

impl DraftConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            halve: Vec::new(),
            double: Vec::new(),
            remove: Vec::new(),
        }
    }
}

/// Result of a draft
pub struct DraftResult {
    /// Maps in the order they were drawn
    pub picks: Vec<String>,
    /// Final weights used for the draw, scaled to integers
    pub weights: Vec<(String, u64)>,
}

/// Apply the adjustments in `config` to `pool` and draw
///
/// Removals are applied first, then halvings, then doublings. A name may be
/// listed more than once to apply its adjustment repeatedly.
///
/// # Errors
///
/// Returns `UnknownMap` for the first adjustment naming a map not in the pool.
pub fn run_draft<R: Rng + ?Sized>(
    mut pool: MapPool,
    config: &DraftConfig,
    rng: &mut R,
) -> Result<DraftResult, UnknownMap> {
    for name in &config.remove {
        pool.remove(name)?;
    }
    for name in &config.halve {
        pool.halve(name)?;
    }
    for name in &config.double {
        pool.double(name)?;
    }

    let weights = pool
        .names()
        .into_iter()
        .map(String::from)
        .zip(pool.integer_weights())
        .collect();
    let picks = pool
        .draft(config.count, rng)
        .into_iter()
        .map(String::from)
        .collect();

    Ok(DraftResult { picks, weights })
}
