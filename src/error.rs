//! Error types for the generator bank and distribution transformer
//!
//! Only out-of-domain parameters ever reach the caller. Numeric degeneracies
//! (logarithm of zero, division by zero at the tails of finite-precision
//! uniform sampling) are clamped internally by the transforms and never
//! surface as errors.

use thiserror::Error;

/// Validation error raised before any computation starts.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter is outside its valid domain
    #[error("invalid parameter `{field}`: {message}, got {value}")]
    InvalidParameter {
        /// Which parameter was rejected
        field: &'static str,
        /// What the parameter was expected to satisfy
        message: &'static str,
        /// The rejected value, formatted for a user-facing message
        value: String,
    },
}

impl Error {
    pub(crate) fn invalid_parameter(
        field: &'static str,
        message: &'static str,
        value: impl std::fmt::Display,
    ) -> Self {
        Error::InvalidParameter {
            field,
            message,
            value: value.to_string(),
        }
    }
}
