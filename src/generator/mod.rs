//! Pseudo-random generator bank
//!
//! This module provides nine independent uniform-deviate generators. Each one
//! is a pure function of (count, seed, algorithm constants): two calls with
//! identical inputs produce bit-identical output. There is no shared state
//! between calls; every invocation reseeds from scratch.
//!
//! # Algorithms
//!
//! - **MersenneTwister**: reference MT19937 (via `rand_mt`)
//! - **XorShift**: classic 3-shift 32-bit xorshift
//! - **Pcg**: PCG-XSH-RR, 64-bit state with 32-bit output
//! - **Well**: stand-in delegating to xoshiro256++ (documented approximation)
//! - **Lcg**: mixed linear congruential generator
//! - **Mcg**: multiplicative congruential generator
//! - **Tausworthe**: 32-bit LFSR assembling words bit-by-bit
//! - **MiddleSquare**: von Neumann middle-square on decimal digits
//! - **MiddleSquareWeyl**: middle-square stabilized by a Weyl sequence
//!
//! # Degenerate seeds
//!
//! A seed of zero is a fixed point for several recurrences (xorshift, MCG,
//! Tausworthe, middle-square). Each affected generator substitutes its
//! documented default seed internally, so no seed value can raise or produce
//! a constant-zero stream.
//!
//! # Example
//!
//! ```
//! use randlab::generator::{generate_uniform, GeneratorKind};
//!
//! let values = generate_uniform(&GeneratorKind::XorShift, 100, 42).unwrap();
//! assert_eq!(values.len(), 100);
//! assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
//! ```

pub mod congruential;
pub mod mersenne;
pub mod middle_square;
pub mod pcg;
pub mod tausworthe;
pub mod well;
pub mod xorshift;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2^32 as f64, the normalization divisor shared by the 32-bit generators
pub(crate) const TWO_POW_32: f64 = 4_294_967_296.0;

/// A deterministic stream of uniform deviates in [0, 1)
///
/// Implementations hold the full generator state; constructing one with the
/// same seed always yields the same stream.
pub trait Generator {
    /// Advance the state and return the next deviate in [0, 1)
    fn next_f64(&mut self) -> f64;

    /// Collect the next `count` deviates into a Vec
    fn fill(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.next_f64()).collect()
    }
}

/// Generator algorithm selector with algorithm-specific constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeneratorKind {
    /// Reference MT19937, seeded from the low 32 bits of the seed
    MersenneTwister,
    /// 32-bit xorshift with shifts 13/17/5
    XorShift,
    /// PCG-XSH-RR with configurable LCG constants
    Pcg { mult: u64, inc: u64 },
    /// Simplified WELL stand-in (delegates to xoshiro256++, reseeded per call)
    Well,
    /// Mixed linear congruential generator `x = (a*x + c) mod m`
    Lcg { a: u64, c: u64, m: u64 },
    /// Multiplicative congruential generator `x = (a*x) mod m`
    Mcg { a: u64, m: u64 },
    /// 32-bit Tausworthe/LFSR with tap position 3
    Tausworthe,
    /// Von Neumann middle-square on decimal digits
    MiddleSquare,
    /// Middle-square with a Weyl sequence breaking short cycles
    MiddleSquareWeyl { increment: u64 },
}

impl Default for GeneratorKind {
    fn default() -> Self {
        Self::Pcg {
            mult: pcg::DEFAULT_MULTIPLIER,
            inc: pcg::DEFAULT_INCREMENT,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::MersenneTwister => write!(f, "mersenne-twister"),
            GeneratorKind::XorShift => write!(f, "xorshift"),
            GeneratorKind::Pcg { mult, inc } => write!(f, "pcg(mult={}, inc={})", mult, inc),
            GeneratorKind::Well => write!(f, "well (xoshiro approximation)"),
            GeneratorKind::Lcg { a, c, m } => write!(f, "lcg(a={}, c={}, m={})", a, c, m),
            GeneratorKind::Mcg { a, m } => write!(f, "mcg(a={}, m={})", a, m),
            GeneratorKind::Tausworthe => write!(f, "tausworthe"),
            GeneratorKind::MiddleSquare => write!(f, "middle-square"),
            GeneratorKind::MiddleSquareWeyl { increment } => {
                write!(f, "middle-square-weyl(increment={})", increment)
            }
        }
    }
}

impl GeneratorKind {
    /// Validate the algorithm constants
    ///
    /// Seeds are never validated: wrapping and zero-seed substitution are part
    /// of the generator contract, not errors.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            GeneratorKind::Lcg { a, m, .. } => {
                if *m < 2 {
                    return Err(Error::invalid_parameter("m", "modulus must be at least 2", m));
                }
                if *a == 0 {
                    return Err(Error::invalid_parameter("a", "multiplier must be nonzero", a));
                }
                Ok(())
            }
            GeneratorKind::Mcg { a, m } => {
                if *m < 2 {
                    return Err(Error::invalid_parameter("m", "modulus must be at least 2", m));
                }
                if *a == 0 {
                    return Err(Error::invalid_parameter("a", "multiplier must be nonzero", a));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Construct a fresh generator for this algorithm, seeded with `seed`
    pub fn instantiate(&self, seed: u64) -> Box<dyn Generator> {
        match self {
            GeneratorKind::MersenneTwister => Box::new(mersenne::MersenneTwister::new(seed)),
            GeneratorKind::XorShift => Box::new(xorshift::XorShift32::new(seed)),
            GeneratorKind::Pcg { mult, inc } => Box::new(pcg::Pcg32::new(seed, *mult, *inc)),
            GeneratorKind::Well => Box::new(well::Well::new(seed)),
            GeneratorKind::Lcg { a, c, m } => Box::new(congruential::Lcg::new(seed, *a, *c, *m)),
            GeneratorKind::Mcg { a, m } => Box::new(congruential::Mcg::new(seed, *a, *m)),
            GeneratorKind::Tausworthe => Box::new(tausworthe::Tausworthe::new(seed)),
            GeneratorKind::MiddleSquare => Box::new(middle_square::MiddleSquare::new(seed)),
            GeneratorKind::MiddleSquareWeyl { increment } => {
                Box::new(middle_square::MiddleSquareWeyl::new(seed, *increment))
            }
        }
    }
}

/// Produce `count` uniform deviates in [0, 1) from the selected algorithm
///
/// Deterministic: identical (kind, count, seed) always produce identical
/// output. A `count` of zero yields an empty Vec, never an error. Only
/// out-of-domain algorithm constants (e.g. a zero congruential modulus) fail.
pub fn generate_uniform(kind: &GeneratorKind, count: usize, seed: u64) -> Result<Vec<f64>, Error> {
    kind.validate()?;
    Ok(kind.instantiate(seed).fill(count))
}
