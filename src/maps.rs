//! Competitive map pool and weighted draft
//!
//! Every map starts with the same weight. Weights can be halved or doubled
//! (repeatedly) to bias the draw, or a map can be removed outright. Drawing
//! scales the weights to integers and picks with replacement.

use rand::Rng;
use std::fmt;

/// The default competitive map pool
pub const DEFAULT_MAPS: &[&str] = &[
    "Mirage", "Inferno", "Overpass", "Train", "Cache", "Dust II", "Agency", "Office", "Anubis",
    "Nuke", "Vertigo",
];

/// Weight each map starts with
pub const BASE_WEIGHT: f64 = 10.0;

/// Error for weight adjustments naming a map that is not in the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMap(pub String);

impl fmt::Display for UnknownMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No map named '{}' in the pool", self.0)
    }
}

impl std::error::Error for UnknownMap {}

#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    pub name: String,
    pub weight: f64,
}

/// A weighted set of maps
#[derive(Debug, Clone, PartialEq)]
pub struct MapPool {
    entries: Vec<MapEntry>,
}

impl MapPool {
    /// Pool over `names`, each with `BASE_WEIGHT`
    #[must_use]
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            entries: names
                .iter()
                .map(|name| MapEntry {
                    name: name.as_ref().to_string(),
                    weight: BASE_WEIGHT,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut MapEntry, UnknownMap> {
        self.entries
            .iter_mut()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownMap(name.to_string()))
    }

    /// Halve the weight of `name`
    ///
    /// # Errors
    /// Returns `UnknownMap` if no map matches (case-insensitive).
    pub fn halve(&mut self, name: &str) -> Result<(), UnknownMap> {
        self.entry_mut(name)?.weight /= 2.0;
        Ok(())
    }

    /// Double the weight of `name`
    ///
    /// # Errors
    /// Returns `UnknownMap` if no map matches (case-insensitive).
    pub fn double(&mut self, name: &str) -> Result<(), UnknownMap> {
        self.entry_mut(name)?.weight *= 2.0;
        Ok(())
    }

    /// Drop `name` from the pool
    ///
    /// # Errors
    /// Returns `UnknownMap` if no map matches (case-insensitive).
    pub fn remove(&mut self, name: &str) -> Result<(), UnknownMap> {
        let index = self
            .entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownMap(name.to_string()))?;
        self.entries.remove(index);
        Ok(())
    }

    /// Weights scaled by powers of ten until every one is a whole number
    ///
    /// Halving a weight of 10 once gives 5, twice gives 2.5, so the pool is
    /// scaled by 10 until no fractional part is left.
    #[must_use]
    pub fn integer_weights(&self) -> Vec<u64> {
        let mut weights: Vec<f64> = self.entries.iter().map(|e| e.weight).collect();
        // Bounded: a weight halved k times needs at most k scalings
        for _ in 0..64 {
            if weights.iter().all(|w| w.fract() == 0.0) {
                break;
            }
            for weight in &mut weights {
                *weight *= 10.0;
            }
        }
        weights.iter().map(|w| w.round() as u64).collect()
    }

    /// Draw one map, weighted, with replacement
    ///
    /// Returns `None` when the pool is empty or every weight is zero.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let weights = self.integer_weights();
        let total: u64 = weights.iter().sum();
        if total == 0 {
            return None;
        }

        let roll = rng.random_range(1..=total);
        let mut cumulative = 0;
        for (entry, weight) in self.entries.iter().zip(weights) {
            if cumulative < roll && roll <= cumulative + weight {
                return Some(entry.name.as_str());
            }
            cumulative += weight;
        }
        None
    }

    /// Draw `count` maps independently
    pub fn draft<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&str> {
        (0..count).filter_map(|_| self.draw(rng)).collect()
    }
}

impl Default for MapPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAPS)
    }
}

/// English ordinal for a 1-based position
#[must_use]
pub fn ordinal(position: usize) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{position}{suffix}")
}
