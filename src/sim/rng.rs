//! Injectable randomness
//!
//! The simulation never reaches for a global generator. Every random choice
//! goes through a `RandomSource` handed to `tick`, so tests can script it.

use rand::Rng;
use rand::rngs::StdRng;
use rand_pcg::Pcg32;

/// Source of uniform choices
pub trait RandomSource {
    /// Uniform index in `0..n`. Callers guarantee `n > 0`.
    fn below(&mut self, n: usize) -> usize;
}

impl RandomSource for Pcg32 {
    fn below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

impl RandomSource for StdRng {
    fn below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Replays a fixed sequence of choices, wrapping each into range
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always picks the first option
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, n: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v % n
    }
}
