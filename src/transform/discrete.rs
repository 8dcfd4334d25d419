//! Discrete distribution transforms
//!
//! Outputs are integral values carried as f64 so the whole pipeline shares
//! one sample type. Length contracts: Poisson, Geometric and
//! NegativeBinomial map 1:1; Binomial groups the input into blocks of
//! `trials` elements and pads the block results cyclically back to the input
//! length.

use super::{AuxEntropy, Error, LOG_EPS};
use rand_distr::Geometric as GeometricSampler;

/// Knuth's product-of-uniforms Poisson sampler
///
/// One output per input element. The input element itself is not consumed as
/// a draw; every uniform in the product comes from the auxiliary source,
/// matching the documented contract.
pub(crate) fn poisson(uniforms: &[f64], lambda: f64, aux: &mut AuxEntropy) -> Vec<f64> {
    let limit = (-lambda).exp();
    let mut out = Vec::with_capacity(uniforms.len());
    for _ in uniforms {
        // At least one draw: for tiny lambda the limit rounds to exactly 1.0
        // and a pre-checked loop would never run, leaving k at 0.
        let mut k: u64 = 0;
        let mut product = 1.0;
        loop {
            k += 1;
            product *= aux.next_uniform();
            if product <= limit {
                break;
            }
        }
        out.push((k - 1) as f64);
    }
    out
}

/// Binomial as a sum of Bernoulli trials over input blocks
///
/// Each block of `trials` consecutive elements counts how many lie at or
/// below `p`; a short final block wraps around within itself. The per-block
/// counts are then repeated cyclically so the output length equals the input
/// length exactly.
pub(crate) fn binomial(uniforms: &[f64], trials: u64, p: f64) -> Vec<f64> {
    let n = trials as usize;
    let mut blocks = Vec::with_capacity(uniforms.len() / n + 1);
    let mut start = 0;
    while start < uniforms.len() {
        let block = &uniforms[start..(start + n).min(uniforms.len())];
        let mut successes: u64 = 0;
        for j in 0..n {
            if block[j % block.len()] <= p {
                successes += 1;
            }
        }
        blocks.push(successes as f64);
        start += n;
    }
    (0..uniforms.len()).map(|i| blocks[i % blocks.len()]).collect()
}

/// Inverse-CDF geometric transform: `ceil(ln(1-u) / ln(1-p))`
pub(crate) fn geometric(uniforms: &[f64], p: f64) -> Vec<f64> {
    let log_q = (1.0 - p).ln();
    uniforms
        .iter()
        .map(|&u| ((1.0 - u).max(LOG_EPS).ln() / log_q).ceil().max(0.0))
        .collect()
}

/// Negative binomial as a sum of auxiliary geometric draws
///
/// Counts failures before the `successes`-th success. The input values are
/// never read, only the input length; all randomness comes from the
/// auxiliary source (documented contract deviation, see DESIGN.md).
pub(crate) fn negative_binomial(
    uniforms: &[f64],
    successes: u64,
    p: f64,
    aux: &mut AuxEntropy,
) -> Result<Vec<f64>, Error> {
    let sampler = GeometricSampler::new(p)
        .map_err(|_| Error::invalid_parameter("p", "must lie in (0, 1)", p))?;
    let mut out = Vec::with_capacity(uniforms.len());
    for _ in uniforms {
        let total: u64 = (0..successes).map(|_| aux.sample::<u64, _>(&sampler)).sum();
        out.push(total as f64);
    }
    Ok(out)
}
