//! Congruential generator family
//!
//! Two classic modular recurrences sharing one file because they differ only
//! in the additive term:
//!
//! - **Lcg** (mixed): `x = (a*x + c) mod m`, defaults from the classic
//!   glibc-style constants (a=1103515245, c=12345, m=2^31)
//! - **Mcg** (multiplicative): `x = (a*x) mod m`, defaults from the
//!   Park-Miller minimal standard (a=48271, m=2^31-1)
//!
//! State arithmetic wraps on overflow; wrapping is part of the contract, not
//! an error. The multiplicative variant has a fixed point at zero, so a seed
//! congruent to zero is replaced internally.

use super::Generator;

/// Default mixed-LCG multiplier
pub const LCG_MULTIPLIER: u64 = 1103515245;
/// Default mixed-LCG increment
pub const LCG_INCREMENT: u64 = 12345;
/// Default mixed-LCG modulus (2^31)
pub const LCG_MODULUS: u64 = 1 << 31;

/// Default multiplicative-congruential multiplier (Park-Miller)
pub const MCG_MULTIPLIER: u64 = 48271;
/// Default multiplicative-congruential modulus (2^31 - 1, a Mersenne prime)
pub const MCG_MODULUS: u64 = (1 << 31) - 1;

/// Substitute seed for states congruent to zero under the MCG recurrence
const MCG_SEED_FALLBACK: u64 = 123456789;

/// Mixed linear congruential generator
pub struct Lcg {
    state: u64,
    a: u64,
    c: u64,
    m: u64,
}

impl Lcg {
    /// Create a generator; the caller guarantees `m >= 2` and `a >= 1`
    /// (enforced by [`GeneratorKind::validate`](super::GeneratorKind::validate))
    pub fn new(seed: u64, a: u64, c: u64, m: u64) -> Self {
        Self { state: seed % m, a, c, m }
    }
}

impl Generator for Lcg {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        self.state = self.a.wrapping_mul(self.state).wrapping_add(self.c) % self.m;
        self.state as f64 / self.m as f64
    }
}

/// Multiplicative congruential generator
pub struct Mcg {
    state: u64,
    a: u64,
    m: u64,
}

impl Mcg {
    /// Create a generator; a seed congruent to zero mod `m` is replaced,
    /// since zero is a fixed point of the recurrence
    pub fn new(seed: u64, a: u64, m: u64) -> Self {
        let mut state = seed % m;
        if state == 0 {
            state = MCG_SEED_FALLBACK % m;
        }
        if state == 0 {
            state = 1;
        }
        Self { state, a, m }
    }
}

impl Generator for Mcg {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        self.state = self.a.wrapping_mul(self.state) % self.m;
        self.state as f64 / self.m as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_reference_vector() {
        let mut gen = Lcg::new(123456789, LCG_MULTIPLIER, LCG_INCREMENT, LCG_MODULUS);
        let values = gen.fill(5);
        assert_eq!(
            values,
            vec![
                0.10793783236294985,
                0.5247752792201936,
                0.8186211250722408,
                0.39627523021772504,
                0.7611499978229403,
            ]
        );
    }

    #[test]
    fn test_mcg_reference_vector() {
        let mut gen = Mcg::new(123456789, MCG_MULTIPLIER, MCG_MODULUS);
        let values = gen.fill(5);
        assert_eq!(
            values,
            vec![
                0.05380315429242475,
                0.13206084963495882,
                0.7092727290975268,
                0.30390626671905924,
                0.8594007957072001,
            ]
        );
    }

    #[test]
    fn test_lcg_zero_seed_not_constant() {
        // Zero is not a fixed point of the mixed recurrence: x -> c
        let values = Lcg::new(0, LCG_MULTIPLIER, LCG_INCREMENT, LCG_MODULUS).fill(100);
        let nonzero = values.iter().filter(|&&v| v != 0.0).count();
        assert!(nonzero > 90, "lcg(seed=0) collapsed: {} nonzero of 100", nonzero);
    }

    #[test]
    fn test_mcg_zero_seed_recovers() {
        let values = Mcg::new(0, MCG_MULTIPLIER, MCG_MODULUS).fill(100);
        assert!(values.iter().all(|&v| v != 0.0));
    }

    #[test]
    fn test_mcg_multiple_of_modulus_recovers() {
        let values = Mcg::new(MCG_MODULUS * 2, MCG_MULTIPLIER, MCG_MODULUS).fill(10);
        assert!(values.iter().all(|&v| v != 0.0));
    }

    #[test]
    fn test_congruential_range() {
        let mut lcg = Lcg::new(42, LCG_MULTIPLIER, LCG_INCREMENT, LCG_MODULUS);
        let mut mcg = Mcg::new(42, MCG_MULTIPLIER, MCG_MODULUS);
        for _ in 0..10_000 {
            let a = lcg.next_f64();
            let b = mcg.next_f64();
            assert!((0.0..1.0).contains(&a));
            assert!((0.0..1.0).contains(&b));
        }
    }
}
