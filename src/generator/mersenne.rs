//! Mersenne Twister generator
//!
//! Delegates to a reference MT19937 implementation (`rand_mt`). Included as
//! the comparison baseline: the other algorithms in the bank are implemented
//! from scratch, while this one reproduces the generator most numerical
//! environments ship by default.

use super::Generator;
use rand::Rng;
use rand_mt::Mt;

/// MT19937-backed generator
pub struct MersenneTwister {
    rng: Mt,
}

impl MersenneTwister {
    /// Create a generator seeded from the low 32 bits of `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt::new(seed as u32),
        }
    }
}

impl Generator for MersenneTwister {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }
}
