//! Randomness Source
//!
//! Each interceptor owns its own random stream. Nothing here touches a
//! process-wide generator, so two interceptors never influence each other's
//! decisions, and an interceptor built with a seed replays the same sequence
//! of draws for the same sequence of calls.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the draws an interceptor makes.
pub trait RandomSource: Send {
    /// Uniform value in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` is always non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// ChaCha8-backed random stream.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Deterministic stream for the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Stream seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded when `seed` is present, entropy otherwise. A signed seed is
    /// used bit for bit, so `-1` and `u64::MAX` give the same stream.
    pub fn from_optional_seed(seed: Option<i64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed as u64),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
