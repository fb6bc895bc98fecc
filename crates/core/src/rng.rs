//! Seedable randomness seam threaded through synthesis and decoration.
//! This module exists so every stochastic call site takes an explicit source,
//! keeping floor furnishing reproducible from a single seed.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};

/// The two draw shapes the furnishing passes need. `&mut dyn RandomSource`
/// is passed down instead of a concrete RNG so tests can substitute scripted
/// draws for the probability-threshold branches.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer draw in `[min, max]`, inclusive on both ends.
    fn between(&mut self, min: i32, max: i32) -> i32;
}

pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for ChaChaSource {
    fn unit(&mut self) -> f64 {
        // Top 53 bits, the full mantissa width of an f64 in [0, 1).
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    fn between(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        (i64::from(min) + (self.rng.next_u64() % span) as i64) as i32
    }
}

/// Fisher-Yates over the whole slice.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for high in (1..items.len()).rev() {
        let low = rng.between(0, high as i32) as usize;
        items.swap(high, low);
    }
}

/// Removes and returns a uniformly chosen element, shifting the rest down.
pub fn remove_random<T>(rng: &mut dyn RandomSource, items: &mut Vec<T>) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.between(0, items.len() as i32 - 1) as usize;
    Some(items.remove(index))
}

#[cfg(test)]
pub(crate) struct ScriptedSource {
    units: std::collections::VecDeque<f64>,
    betweens: std::collections::VecDeque<i32>,
    fallback: ChaChaSource,
}

#[cfg(test)]
impl ScriptedSource {
    /// Queued values are replayed in order; draws past the end of a queue
    /// fall back to a fixed-seed ChaCha stream.
    pub(crate) fn new(units: &[f64], betweens: &[i32]) -> Self {
        Self {
            units: units.iter().copied().collect(),
            betweens: betweens.iter().copied().collect(),
            fallback: ChaChaSource::seeded(0),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or_else(|| self.fallback.unit())
    }

    fn between(&mut self, min: i32, max: i32) -> i32 {
        match self.betweens.pop_front() {
            Some(value) => value.clamp(min, max),
            None => self.fallback.between(min, max),
        }
    }
}
