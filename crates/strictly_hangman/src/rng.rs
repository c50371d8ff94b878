//! Seedable random number generation for word and hint draws.
//!
//! Same seed, same sequence: a seeded game is fully reproducible, which is
//! what the CLI `--seed` flag and the tests rely on.

use crate::source::HintPicker;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::instrument;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Creates an RNG with the given seed.
    #[must_use]
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Returns the seed this RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Chooses a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

impl HintPicker for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_index(len)
    }
}
