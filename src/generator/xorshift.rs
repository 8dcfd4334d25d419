//! XorShift generator
//!
//! Classic 32-bit xorshift with the 13/17/5 shift triple (Marsaglia 2003).
//! Extremely cheap: three shifts and three xors per deviate.
//!
//! # Characteristics
//!
//! - Period 2^32 - 1 over nonzero states
//! - Zero is a fixed point of the recurrence, so a zero seed is replaced by
//!   a fixed default before the first step
//! - Output normalized by 2^32, so 1.0 is never produced
//!
//! # Example
//!
//! ```
//! use randlab::generator::{Generator, xorshift::XorShift32};
//!
//! let mut gen = XorShift32::new(123456789);
//! let v = gen.next_f64();
//! assert!(v >= 0.0 && v < 1.0);
//! ```

use super::{Generator, TWO_POW_32};

/// Substitute state for the degenerate all-zero seed
pub const SEED_FALLBACK: u32 = 0x9E37_79B9;

/// 32-bit xorshift generator
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator from the low 32 bits of `seed`
    ///
    /// A zero seed (after truncation) is replaced by [`SEED_FALLBACK`].
    pub fn new(seed: u64) -> Self {
        let state = seed as u32;
        Self {
            state: if state == 0 { SEED_FALLBACK } else { state },
        }
    }
}

impl Generator for XorShift32 {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state as f64 / TWO_POW_32
    }
}
