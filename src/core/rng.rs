//! Injected random source for shuffles and tie-breaks.
//!
//! The game never touches ambient global randomness. Everything random goes
//! through a [`RandomSource`] handed to the game at construction:
//!
//! - the per-player deal shuffle
//! - the uniform pick among legal cards
//!
//! [`GameRng`] is the production source. Tests swap in stubs (for example an
//! identity shuffle that always picks the first legal card).
//!
//! ```
//! use blitz_sim::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! assert_eq!(rng.pick(10), again.pick(10));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Randomness the simulation depends on.
pub trait RandomSource {
    /// Uniformly permute `items` in place. Every permutation must be equally
    /// likely (a Fisher-Yates shuffle, not a naive swap loop).
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Seedable RNG backed by ChaCha8.
///
/// Remembers its seed so an entropy-seeded run can still be reported and
/// replayed.
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

    /// Create an RNG from a fresh OS-provided seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

impl RandomSource for GameRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        // SliceRandom::shuffle is a Fisher-Yates shuffle.
        items.shuffle(&mut self.inner);
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range_usize(0..len)
    }
}
