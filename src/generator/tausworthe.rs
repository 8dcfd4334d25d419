//! Tausworthe/LFSR generator
//!
//! A 32-bit linear feedback shift register with tap position 3. Each output
//! word is assembled bit-by-bit, LSB first: the register's low bit becomes
//! the next output bit, then the feedback bit (bit 0 XOR bit 3) is shifted in
//! at the top. Thirty-two register steps produce one word.
//!
//! The word is normalized by 2^32 - 1, so the all-ones register maps to
//! exactly 1.0; callers taking logarithms clamp for that case. An all-zero
//! register never advances, so a zero seed is replaced internally.

use super::Generator;

/// Register width in bits
const REGISTER_BITS: u32 = 32;

/// Feedback tap position
const TAP: u32 = 3;

/// Substitute register value for the degenerate all-zero seed
pub const SEED_FALLBACK: u32 = 0x9E37_79B9;

/// 32-bit Tausworthe/LFSR generator
pub struct Tausworthe {
    register: u32,
}

impl Tausworthe {
    /// Create a generator from the low 32 bits of `seed`
    pub fn new(seed: u64) -> Self {
        let register = seed as u32;
        Self {
            register: if register == 0 { SEED_FALLBACK } else { register },
        }
    }
}

impl Generator for Tausworthe {
    fn next_f64(&mut self) -> f64 {
        let mut word: u32 = 0;
        for j in 0..REGISTER_BITS {
            let bit = self.register & 1;
            word |= bit << j;
            let feedback = (self.register ^ (self.register >> TAP)) & 1;
            self.register = (self.register >> 1) | (feedback << (REGISTER_BITS - 1));
        }
        word as f64 / u32::MAX as f64
    }
}
