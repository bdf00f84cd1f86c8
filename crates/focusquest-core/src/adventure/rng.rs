//! Random source seam for the event generator.
//!
//! Every draw the generator makes goes through [`RandomSource::uniform`], so a
//! test can replace the PCG stream with a scripted sequence and land on exact
//! category boundaries.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn uniform(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    ///
    /// The draw is clamped to `len - 1`, so an out-of-range `uniform` still
    /// yields a valid index.
    fn index(&mut self, len: usize) -> usize {
        let last = len.saturating_sub(1);
        let high = u32::try_from(last).unwrap_or(u32::MAX);
        (self.uniform(0, high) as usize).min(last)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        (**self).uniform(low, high)
    }
}

/// PCG-backed source. Seeded runs replay identically.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Mcg128Xsl64,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed list of draws.
///
/// Each value is clamped into the requested range. Once the script runs out
/// every draw returns the low end of its range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Append more draws to the end of the script.
    pub fn extend(&mut self, values: impl IntoIterator<Item = u32>) {
        self.values.extend(values);
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        match self.values.pop_front() {
            Some(v) => v.clamp(low, high.max(low)),
            None => low,
        }
    }
}
