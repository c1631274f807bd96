//! Deterministic random number generation for maze generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical maze
//! - **Forkable**: Each generation attempt draws from its own branch, so a
//!   rejected candidate never shifts the sequence of the next one
//!
//! ## Usage
//!
//! ```
//! use treasure_maze::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for one generation attempt
//! let mut attempt = rng.fork();
//!
//! // Each fork is seeded differently from its parent
//! assert_ne!(rng.seed(), attempt.seed());
//! let _ = attempt.gen_index(10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::direction::Direction;

/// Seedable RNG threaded explicitly through the generator.
///
/// Uses ChaCha8 so the sequence is stable across platforms and releases.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Uniformly random direction.
    pub fn gen_direction(&mut self) -> Direction {
        Direction::ALL[self.gen_index(Direction::ALL.len())]
    }

    /// The four directions in a shuffled order.
    pub fn shuffled_directions(&mut self) -> [Direction; 4] {
        let mut dirs = Direction::ALL;
        self.shuffle(&mut dirs);
        dirs
    }

    /// Shuffle a slice in place.
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
