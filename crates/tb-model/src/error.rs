//! Error types for model construction.

use tb_core::CoreError;
use thiserror::Error;

/// Result type for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building or discretizing a model.
///
/// All of these are construction-time failures; a controller whose model
/// fails to build is never produced in a partial or degraded form.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Numerator degree exceeds denominator degree.
    #[error(
        "Improper transfer function: numerator has {num_len} coefficients, denominator {den_len}"
    )]
    Improper { num_len: usize, den_len: usize },

    /// Invalid argument provided to a model constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A matrix factorization failed during discretization.
    #[error("Singular matrix: {what}")]
    SingularMatrix { what: &'static str },

    /// Core numeric error (non-finite coefficient, etc.).
    #[error("Numeric error: {0}")]
    Numeric(#[from] CoreError),
}
