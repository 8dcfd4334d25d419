//! Middle-square generators
//!
//! Two variants of von Neumann's 1949 method:
//!
//! - **MiddleSquare**: square the decimal state, take the centered digits.
//!   Historically interesting but statistically weak; it collapses into
//!   short cycles (including the all-zero fixed point) for many seeds.
//!   The all-zero collapse is broken by restoring the original seed.
//! - **MiddleSquareWeyl**: Widynski's variant that adds a Weyl sequence
//!   (`w += increment mod 2^32`) into the state before squaring, defeating
//!   the short-cycle failure mode.
//!
//! # State width
//!
//! The plain middle-square works on decimal digit strings. The state is
//! capped at 16 digits (seeds are reduced modulo 10^16 first) so the square
//! always fits in a u128; seeds with an odd digit count are left-shifted by
//! one decimal digit, as in the classic formulation.

use super::{Generator, TWO_POW_32};

/// Default seed substituted for the degenerate zero seed
pub const DEFAULT_SEED: u64 = 675_248;

/// Default Weyl increment
pub const DEFAULT_INCREMENT: u64 = 123_456_789;

/// Maximum number of decimal digits kept in the middle-square state
const MAX_DIGITS: u32 = 16;

fn decimal_digits(mut value: u128) -> u32 {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// Von Neumann middle-square generator over decimal digits
pub struct MiddleSquare {
    state: u128,
    seed: u128,
    /// 10^(digits/2), the divisor selecting the centered digits
    half_pow: u128,
    /// 10^digits, the modulus and normalization divisor
    full_pow: u128,
}

impl MiddleSquare {
    /// Create a generator from `seed`
    ///
    /// Zero seeds are replaced by [`DEFAULT_SEED`]; seeds wider than 16
    /// decimal digits are reduced modulo 10^16. An odd digit count is made
    /// even by appending a trailing zero digit.
    pub fn new(seed: u64) -> Self {
        let mut state = (seed as u128) % 10u128.pow(MAX_DIGITS);
        if state == 0 {
            state = DEFAULT_SEED as u128;
        }
        let mut digits = decimal_digits(state);
        if digits % 2 != 0 {
            state *= 10;
            digits += 1;
        }
        Self {
            state,
            seed: state,
            half_pow: 10u128.pow(digits / 2),
            full_pow: 10u128.pow(digits),
        }
    }
}

impl Generator for MiddleSquare {
    fn next_f64(&mut self) -> f64 {
        let squared = self.state * self.state;
        self.state = (squared / self.half_pow) % self.full_pow;
        let value = self.state as f64 / self.full_pow as f64;
        if self.state == 0 {
            // All-zero cycle: restore the original seed
            self.state = self.seed;
        }
        value
    }
}

/// Middle-square generator stabilized by a Weyl sequence
pub struct MiddleSquareWeyl {
    state: u32,
    weyl: u32,
    increment: u32,
}

impl MiddleSquareWeyl {
    /// Create a generator from `seed` and a Weyl `increment`
    ///
    /// A zero increment would degenerate into the plain middle-square, so it
    /// is replaced by [`DEFAULT_INCREMENT`].
    pub fn new(seed: u64, increment: u64) -> Self {
        let mut increment = increment as u32;
        if increment == 0 {
            increment = DEFAULT_INCREMENT as u32;
        }
        Self {
            state: seed as u32,
            weyl: increment,
            increment,
        }
    }
}

impl Generator for MiddleSquareWeyl {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        self.weyl = self.weyl.wrapping_add(self.increment);
        self.state = self.state.wrapping_add(self.weyl);
        let squared = (self.state as u64 * self.state as u64) as u32;
        self.state = squared;
        squared as f64 / TWO_POW_32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_square_reference_vector() {
        let mut gen = MiddleSquare::new(675248);
        let values = gen.fill(5);
        assert_eq!(
            values,
            vec![0.959861, 0.333139, 0.981593, 0.524817, 0.432883]
        );
    }

    #[test]
    fn test_middle_square_zero_seed_not_constant() {
        let values = MiddleSquare::new(0).fill(100);
        let nonzero = values.iter().filter(|&&v| v != 0.0).count();
        assert!(nonzero > 50, "middle_square(seed=0) collapsed to zeros");
    }

    #[test]
    fn test_middle_square_odd_digit_seed() {
        // 5 digits becomes 6 by appending a zero; must stay in range
        let values = MiddleSquare::new(12345).fill(1000);
        assert!(values.iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_middle_square_wide_seed_reduced() {
        let values = MiddleSquare::new(u64::MAX).fill(100);
        assert!(values.iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_weyl_reference_vector() {
        let mut gen = MiddleSquareWeyl::new(675248, DEFAULT_INCREMENT);
        let values = gen.fill(5);
        assert_eq!(
            values,
            vec![
                0.25267253164201975,
                0.34993083984591067,
                0.21029676706530154,
                0.8044686177745461,
                0.29298263881355524,
            ]
        );
    }

    #[test]
    fn test_weyl_zero_increment_recovers() {
        let a = MiddleSquareWeyl::new(42, 0).fill(50);
        let b = MiddleSquareWeyl::new(42, DEFAULT_INCREMENT).fill(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_weyl_does_not_collapse() {
        // Plain middle-square cycles quickly; the Weyl sequence must not
        let values = MiddleSquareWeyl::new(0, DEFAULT_INCREMENT).fill(10_000);
        let distinct: std::collections::HashSet<u64> =
            values.iter().map(|v| v.to_bits()).collect();
        assert!(distinct.len() > 9_000, "only {} distinct values", distinct.len());
    }
}
