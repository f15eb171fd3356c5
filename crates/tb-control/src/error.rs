//! Error types for the control engine.

use tb_model::ModelError;
use thiserror::Error;

/// Result type for control engine operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur in the control engine.
#[derive(Error, Debug)]
pub enum ControlError {
    /// Invalid argument provided at construction.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A per-call input slice was shorter than its required minimum.
    #[error("{what} too short: need at least {needed} values, got {got}")]
    ShortInput {
        what: &'static str,
        needed: usize,
        got: usize,
    },

    /// Model construction failed; no controller is produced.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}
