//! randlab - pseudo-random generation and distribution workbench
//!
//! randlab implements a bank of nine classic pseudo-random number generators
//! and a transformer mapping their uniform output onto twelve probability
//! distributions. The generators are statistical, not cryptographic; several
//! (middle-square, the congruential family) are included precisely because
//! their failure modes are instructive.
//!
//! # Architecture
//!
//! - **Generator bank**: nine seeded algorithms, each a pure function of
//!   (count, seed, constants) producing deviates in [0, 1)
//! - **Distribution transformer**: stateless transforms (inverse-CDF,
//!   rejection, Box-Muller) with an explicit, seeded auxiliary entropy
//!   source for methods needing extra randomness
//! - **Outputs**: console table + histogram, CSV, self-describing JSON
//!
//! # Example
//!
//! ```
//! use randlab::generator::{generate_uniform, GeneratorKind};
//! use randlab::transform::{AuxEntropy, DistributionType};
//!
//! let uniforms = generate_uniform(&GeneratorKind::XorShift, 1000, 42).unwrap();
//! let dist = DistributionType::Normal { mean: 0.0, std_dev: 1.0 };
//! let samples = dist.transform(&uniforms, &mut AuxEntropy::with_seed(7)).unwrap();
//! assert_eq!(samples.len(), 1000);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod stats;
pub mod transform;

// Re-export commonly used types
pub use error::Error;
pub use generator::{generate_uniform, Generator, GeneratorKind};
pub use transform::{AuxEntropy, DistributionType};

/// Result type used throughout randlab
pub type Result<T> = anyhow::Result<T>;
