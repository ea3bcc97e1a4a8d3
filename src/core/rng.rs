//! Seeded randomness for move draws.
//!
//! Every random choice in a game goes through `GameRng`, so a seed fixes
//! the computer's play for a whole session. `fork` hands a second bot its
//! own stream derived from the same seed.
//!
//! ```
//! use rpsls::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut bot_rng = rng.fork();
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(rng.gen_below(25), again.gen_below(25));
//! assert!(bot_rng.gen_below(5) < 5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio step between successive fork seeds.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed.
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

    /// Seed from the thread RNG, for unseeded play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this stream started from. Logged so a session can be replayed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream. The n-th fork of a given seed is
    /// always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn gen_below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be positive");
        self.inner.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng, n: usize) -> Vec<u32> {
        (0..n).map(|_| rng.gen_below(1000)).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        assert_eq!(draws(&mut GameRng::new(42), 100), draws(&mut GameRng::new(42), 100));
        assert_ne!(draws(&mut GameRng::new(1), 10), draws(&mut GameRng::new(2), 10));
    }

    #[test]
    fn test_gen_below_stays_in_range() {
        let mut rng = GameRng::new(7);
        assert!((0..1000).all(|_| rng.gen_below(25) < 25));
        assert!((0..10).all(|_| rng.gen_below(1) == 0));
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn test_gen_below_zero_bound() {
        GameRng::new(0).gen_below(0);
    }

    #[test]
    fn test_forks() {
        let mut rng = GameRng::new(42);
        let mut first = rng.fork();
        let second = rng.fork();
        assert_ne!(first.seed(), second.seed());
        assert_ne!(draws(&mut rng, 10), draws(&mut first, 10));

        let mut again = GameRng::new(42);
        assert_eq!(again.fork().seed(), first.seed());
    }
}
