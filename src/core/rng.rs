//! Deterministic random number generation for game setup and cube choices.
//!
//! The engine never reaches for an ambient random source. Every game owns a
//! `GameRng` derived from a seed, split into named context streams so that
//! the deck shuffle and cube choices do not perturb each other:
//!
//! ```
//! use merchants::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut shuffle = rng.for_context("shuffle");
//! let mut cubes = rng.for_context("cubes");
//!
//! // Same seed and context, same sequence.
//! let mut again = GameRng::new(42).for_context("shuffle");
//! assert_eq!(shuffle.gen_range_usize(0..100), again.gen_range_usize(0..100));
//! let _ = cubes.gen_range_usize(0..6);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded ChaCha8 RNG with independent context streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform Fisher-Yates permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
