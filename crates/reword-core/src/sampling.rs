//! Random draws and weighted choice.
//!
//! Substitution never touches a global RNG: it pulls uniform draws from a
//! [`RandomSource`], so a seeded or scripted source makes output reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::lexical::SynonymEntry;

/// A stream of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// The next draw.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// [`RandomSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an RNG.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, OS-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Values are clamped into `[0, 1)`. An empty list always draws `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedDraws {
    values: Vec<f64>,
    next: usize,
}

impl FixedDraws {
    /// Create a source from draws in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for FixedDraws {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next = self.next.wrapping_add(1);
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Cumulative-probability choice.
///
/// Walks `entries` summing probabilities and returns the first entry whose
/// running total exceeds `draw`. Returns `None` when no total does, which
/// happens for empty lists and when rounding leaves the sum short of `draw`.
pub fn sample_weighted(entries: &[SynonymEntry], draw: f64) -> Option<&SynonymEntry> {
    let mut cumulative = 0.0;
    entries.iter().find(|entry| {
        cumulative += entry.probability;
        cumulative > draw
    })
}

/// Uniform choice by scaling `draw` over the slice.
pub fn choose_uniform<T>(items: &[T], draw: f64) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let index = (draw.clamp(0.0, 1.0) * items.len() as f64) as usize;
    items.get(index.min(items.len() - 1))
}
