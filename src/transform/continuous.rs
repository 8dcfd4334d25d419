//! Continuous distribution transforms
//!
//! Each function consumes a slice of uniform deviates and produces samples
//! from its target distribution. Pairing methods (Normal, Beta, StudentT,
//! FisherF) truncate an odd-length input to even before grouping; methods
//! that reject or discard pairs pad back to the truncated length with
//! auxiliary samples, matching the documented output-length contracts.
//!
//! Logarithms of zero are expected at the tails of finite-precision uniform
//! sampling and are clamped to [`LOG_EPS`](super::LOG_EPS) rather than
//! surfaced as errors.

use super::{AuxEntropy, Error, LOG_EPS};
use rand_distr::{Beta as BetaSampler, ChiSquared, FisherF as FisherFSampler, StudentT as StudentTSampler};
use std::f64::consts::PI;

/// Affine rescale of [0,1) deviates onto [a, b)
///
/// `a < b` is a caller contract and deliberately not validated here.
pub(crate) fn uniform(uniforms: &[f64], a: f64, b: f64) -> Vec<f64> {
    uniforms.iter().map(|&u| a + (b - a) * u).collect()
}

/// Box-Muller transform on successive pairs
///
/// Each pair (u1, u2) yields two outputs, cosine then sine branch. An odd
/// trailing element is discarded, so the output length is the input length
/// rounded down to even.
pub(crate) fn normal(uniforms: &[f64], mean: f64, std_dev: f64) -> Vec<f64> {
    let len = uniforms.len() & !1;
    let mut out = Vec::with_capacity(len);
    for pair in uniforms[..len].chunks_exact(2) {
        let u1 = pair[0].max(LOG_EPS);
        let u2 = pair[1];
        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;
        out.push(mean + std_dev * radius * theta.cos());
        out.push(mean + std_dev * radius * theta.sin());
    }
    out
}

/// Inverse-CDF exponential transform: `-ln(1-u) / lambda`
pub(crate) fn exponential(uniforms: &[f64], lambda: f64) -> Vec<f64> {
    uniforms
        .iter()
        .map(|&u| -(1.0 - u).max(LOG_EPS).ln() / lambda)
        .collect()
}

/// Simplified single-uniform Gamma approximation
///
/// Not a correct Gamma sampler (Marsaglia-Tsang would be); it reproduces the
/// documented approximation: for shape >= 1 an extra auxiliary uniform is
/// mixed in via `-ln(u * u2) * scale`, for shape < 1 just `-ln(u) * scale`.
pub(crate) fn gamma(uniforms: &[f64], shape: f64, scale: f64, aux: &mut AuxEntropy) -> Vec<f64> {
    let mut out = Vec::with_capacity(uniforms.len());
    if shape >= 1.0 {
        for &u in uniforms {
            let u2 = aux.next_uniform();
            out.push(-(u * u2).max(LOG_EPS).ln() * scale);
        }
    } else {
        for &u in uniforms {
            out.push(-u.max(LOG_EPS).ln() * scale);
        }
    }
    out
}

/// Chi-squared as the Gamma special case shape = df/2, scale = 2
pub(crate) fn chi_squared(uniforms: &[f64], df: f64, aux: &mut AuxEntropy) -> Vec<f64> {
    gamma(uniforms, df / 2.0, 2.0, aux)
}

/// Beta transform on pairs with rejection fallback
///
/// For each pair, `y1 = u1^(1/alpha)`, `y2 = u2^(1/beta)`; the ratio
/// `y1/(y1+y2)` is accepted when `y1+y2 <= 1`, otherwise an auxiliary Beta
/// sample substitutes. One output per pair, then padded with auxiliary
/// samples to the even-truncated input length.
pub(crate) fn beta(
    uniforms: &[f64],
    alpha: f64,
    beta: f64,
    aux: &mut AuxEntropy,
) -> Result<Vec<f64>, Error> {
    let sampler = BetaSampler::new(alpha, beta).map_err(|_| {
        Error::invalid_parameter("alpha/beta", "must be positive and finite", format!("{}/{}", alpha, beta))
    })?;
    let len = uniforms.len() & !1;
    let mut out = Vec::with_capacity(len);
    for pair in uniforms[..len].chunks_exact(2) {
        let u1 = pair[0].max(LOG_EPS);
        let u2 = pair[1].max(LOG_EPS);
        let y1 = u1.powf(1.0 / alpha);
        let y2 = u2.powf(1.0 / beta);
        if y1 + y2 <= 1.0 {
            out.push(y1 / (y1 + y2));
        } else {
            out.push(aux.sample(&sampler));
        }
    }
    while out.len() < len {
        out.push(aux.sample(&sampler));
    }
    Ok(out)
}

/// Student's t via a Box-Muller normal over an auxiliary chi-squared draw
///
/// One output per input pair, padded with auxiliary t samples to the
/// even-truncated input length.
pub(crate) fn student_t(uniforms: &[f64], df: f64, aux: &mut AuxEntropy) -> Result<Vec<f64>, Error> {
    let chi = ChiSquared::new(df)
        .map_err(|_| Error::invalid_parameter("df", "must be positive and finite", df))?;
    let pad = StudentTSampler::new(df)
        .map_err(|_| Error::invalid_parameter("df", "must be positive and finite", df))?;
    let len = uniforms.len() & !1;
    let mut out = Vec::with_capacity(len);
    for pair in uniforms[..len].chunks_exact(2) {
        let u1 = pair[0].max(LOG_EPS);
        let u2 = pair[1];
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        let v: f64 = aux.sample(&chi);
        out.push(z / (v / df).sqrt().max(LOG_EPS));
    }
    while out.len() < len {
        out.push(aux.sample(&pad));
    }
    Ok(out)
}

/// F statistic from two auxiliary chi-squared draws
///
/// The input values themselves are never read, only the pair count; all
/// randomness comes from the auxiliary source. This preserves the original
/// contract deviation, documented in DESIGN.md; determinism is restored by
/// the seeded auxiliary source.
pub(crate) fn fisher_f(
    uniforms: &[f64],
    dfn: f64,
    dfd: f64,
    aux: &mut AuxEntropy,
) -> Result<Vec<f64>, Error> {
    let chi_n = ChiSquared::new(dfn)
        .map_err(|_| Error::invalid_parameter("dfn", "must be positive and finite", dfn))?;
    let chi_d = ChiSquared::new(dfd)
        .map_err(|_| Error::invalid_parameter("dfd", "must be positive and finite", dfd))?;
    let pad = FisherFSampler::new(dfn, dfd).map_err(|_| {
        Error::invalid_parameter("dfn/dfd", "must be positive and finite", format!("{}/{}", dfn, dfd))
    })?;
    let len = uniforms.len() & !1;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len / 2 {
        let c1: f64 = aux.sample(&chi_n);
        let c2: f64 = aux.sample(&chi_d);
        out.push((c1 / dfn) / (c2 / dfd).max(LOG_EPS));
    }
    while out.len() < len {
        out.push(aux.sample(&pad));
    }
    Ok(out)
}
