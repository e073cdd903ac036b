//! Batched root-finding error types.
//!
//! ┌ [`ToleranceError`]   : invalid configuration tolerances
//! │   ├ invalid `function_tolerance`
//! │   ├ invalid `min_derivative`
//! │   └ invalid `max_step`
//! │
//! └ [`NewtonBatchError`] : boundary contract violations
//!     ├ empty batch or non-finite initial values
//!     ├ oracle output shape mismatch
//!     └ invalid global parameters (e.g. max_iter)
//!
//! Per-element numerical outcomes (divergence, derivative collapse,
//! budget exhaustion) are never raised as errors; they are encoded in
//! the `converged`/`failed` flags of the final report.

use thiserror::Error;

/// Tolerance configuration errors.
///
/// ┌ Invalid `function_tolerance` (must be finite and > 0)
/// ├ Invalid `min_derivative`     (must be finite and >= 0)
/// └ Invalid `max_step`           (must be > 0; infinity allowed)
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `function_tolerance`: must be finite and > 0. got {got}")]
    InvalidFunctionTolerance { got: f64 },

    #[error("invalid `min_derivative`: must be finite and >= 0. got {got}")]
    InvalidMinDerivative { got: f64 },

    #[error("invalid `max_step`: must be > 0 or f64::INFINITY. got {got}")]
    InvalidMaxStep { got: f64 },
}

/// Boundary contract errors for the batched Newton solver.
///
/// These are fatal to the whole call. Everything a single element can do
/// wrong numerically is reported per element instead, so that one
/// ill-posed element out of thousands never aborts the batch.
#[derive(Debug, Error)]
pub enum NewtonBatchError {
    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("empty batch: `initial_values` must contain at least one element")]
    EmptyBatch,

    #[error("invalid initial guess at index {index}: value={value} must be finite")]
    InvalidGuess { index: usize, value: f64 },

    #[error("oracle shape mismatch: batch has {expected} elements, \
             oracle returned {objective} objective and {derivative} derivative values")]
    ShapeMismatch {
        expected: usize,
        objective: usize,
        derivative: usize,
    },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
