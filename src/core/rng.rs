//! Deterministic random number generation.
//!
//! Every source of randomness in a game (the deal and each player's strategy)
//! is a `GameRng` derived from a single seed, so a seed fully determines a
//! game between two strategies.
//!
//! ```
//! use cheat_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Independent, reproducible streams for different purposes
//! let mut deal = rng.for_context("deal");
//! let mut deal_again = GameRng::new(42).for_context("deal");
//! assert_eq!(deal.gen_range_usize(0..100), deal_again.gen_range_usize(0..100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment used to spread derived seeds.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed of the `index`-th child of `seed`.
    ///
    /// Batch game `i` is seeded with `derive_seed(batch_seed, i)`, so no RNG
    /// is shared between threads.
    #[must_use]
    pub const fn derive_seed(seed: u64, index: u64) -> u64 {
        seed.wrapping_add(index.wrapping_add(1).wrapping_mul(SEED_STRIDE))
    }

    /// Split off the next child stream. The n-th fork is seeded with
    /// `derive_seed(seed, n)`.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let child = Self::new(Self::derive_seed(self.seed, self.forks));
        self.forks += 1;
        child
    }

    /// Stream named by `context`, independent of how much this RNG has
    /// been used. Stable across platforms and compiler versions.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let hash = context
            .bytes()
            .fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        Self::new(self.seed ^ hash)
    }

    /// Uniform draw from `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability.
    ///
    /// # Panics
    ///
    /// Panics if `probability` is outside `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniform pick from `slice`, `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
