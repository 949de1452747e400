//! Random sources for dice rolling
//!
//! Every roll in the crate draws from a [`RandomSource`] handed in by the
//! caller. Production code uses [`ThreadRandom`], replays use
//! [`SeededRandom`], and tests script exact draws with [`ScriptedRandom`].
//!
//! A source is a plain `&mut` value: two callers must never share one, or the
//! draw order (and therefore every result) stops being reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest value a source may yield (the interval is half-open).
pub const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

/// A generator of uniform values in `[0, 1)`
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Thread-local system generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible generator for replaying a round from a seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    inner: StdRng,
}

impl SeededRandom {
    /// Create a generator from a seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this generator started from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// Replays a fixed list of draws.
///
/// Draws are returned in order and the list starts over once exhausted, so a
/// single value acts as a constant source. An empty script always yields
/// `0.0`. Values outside `[0, 1)` are clamped.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a source replaying `draws`
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws
            .into()
            .into_iter()
            .map(|d| if d.is_nan() { 0.0 } else { d.clamp(0.0, MAX_UNIT) })
            .collect();
        Self { draws, cursor: 0 }
    }

    /// A source that always yields `value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
