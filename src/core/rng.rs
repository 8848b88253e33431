//! Random number generation for deck sampling and shuffles.
//!
//! ## Key Features
//!
//! - **Entropy-seeded by default**: every round deals a different deck
//! - **Seedable**: same seed produces identical decks, for tests
//! - **Sampling without replacement**: index-pool based, no rejection loops
//!
//! ## Usage
//!
//! ```
//! use memodex::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Draw 3 distinct indices out of 0..10
//! let picks = rng.sample_indices(10, 3);
//! assert_eq!(picks.len(), 3);
//!
//! // Same seed, same draws
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng2.sample_indices(10, 3), picks);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used for entity sampling and deck shuffles.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Production callers use [`GameRng::from_entropy`]; tests pin
/// a seed with [`GameRng::new`] to make deck layouts reproducible.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (Fisher–Yates via `rand`).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Draw `count` distinct indices from `0..population` uniformly at
    /// random, without replacement.
    ///
    /// Maintains a shrinking index pool and `swap_remove`s each pick, so
    /// the cost is O(population + count) even when `count` approaches
    /// `population` (a rejection loop would degrade there).
    ///
    /// Returns fewer than `count` indices only if `count > population`;
    /// callers validate bounds before drawing.
    #[must_use]
    pub fn sample_indices(&mut self, population: usize, count: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..population).collect();
        let take = count.min(population);
        let mut chosen = Vec::with_capacity(take);

        for _ in 0..take {
            let at = self.inner.gen_range(0..pool.len());
            chosen.push(pool.swap_remove(at));
        }

        chosen
    }
}
