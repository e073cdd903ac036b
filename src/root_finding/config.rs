//! Configuration for the batched Newton solver.
//!
//! [`NewtonBatchCfg`] — solver knobs
//! ├ `function_tolerance` : |f(x)| at or below which an element converges
//! ├ `min_derivative`     : |f'(x)| below which division is untrustworthy
//! ├ `max_iter`           : hard iteration cap
//! └ `max_step`           : optional cap on the absolute Newton step
//!
//! [`NewtonBatchCfg::new`] initializes the configuration with defaults;
//! each field has a fallible `set_*` builder that validates its input.

use super::errors::{NewtonBatchError, ToleranceError};

/// Batched Newton configuration.
///
/// # Defaults
/// ┌ `DEFAULT_FUNCTION_TOLERANCE` = 1e-8  (7-decimal roots on well-posed problems)
/// ├ `DEFAULT_MIN_DERIVATIVE`     = 1e-12
/// ├ `DEFAULT_MAX_ITER`           = 20
/// └ `max_step` unset (`f64::INFINITY`)
///
/// # Construction
/// - Use [`NewtonBatchCfg::new`] then optional setters.
/// - Setters validate and return `Result`, so an invalid tolerance is
///   rejected before the solve starts rather than mid-iteration.
#[derive(Debug, Copy, Clone)]
pub struct NewtonBatchCfg {
    function_tolerance: f64,
    min_derivative:     f64,
    max_iter:           usize,
    max_step:           f64,
}

impl NewtonBatchCfg {
    pub const DEFAULT_FUNCTION_TOLERANCE: f64 = 1e-8;
    pub const DEFAULT_MIN_DERIVATIVE:     f64 = 1e-12;
    pub const DEFAULT_MAX_ITER:           usize = 20;

    #[must_use]
    pub fn new() -> Self {
        Self {
            function_tolerance: Self::DEFAULT_FUNCTION_TOLERANCE,
            min_derivative:     Self::DEFAULT_MIN_DERIVATIVE,
            max_iter:           Self::DEFAULT_MAX_ITER,
            max_step:           f64::INFINITY,
        }
    }

    // getters
    #[inline] #[must_use] pub fn function_tolerance(&self) -> f64 { self.function_tolerance }
    #[inline] #[must_use] pub fn min_derivative(&self)     -> f64 { self.min_derivative }
    #[inline] #[must_use] pub fn max_iter(&self)           -> usize { self.max_iter }
    #[inline] #[must_use] pub fn max_step(&self)           -> f64 { self.max_step }

    // setters
    pub fn set_function_tolerance(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ToleranceError::InvalidFunctionTolerance { got: v });
        }
        self.function_tolerance = v;
        Ok(self)
    }

    pub fn set_min_derivative(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !v.is_finite() || v < 0.0 {
            return Err(ToleranceError::InvalidMinDerivative { got: v });
        }
        self.min_derivative = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, NewtonBatchError> {
        if v == 0 {
            return Err(NewtonBatchError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    pub fn set_max_step(mut self, v: f64) -> Result<Self, ToleranceError> {
        if v.is_nan() || v <= 0.0 {
            return Err(ToleranceError::InvalidMaxStep { got: v });
        }
        self.max_step = v;
        Ok(self)
    }
}

impl Default for NewtonBatchCfg {
    fn default() -> Self {
        Self::new()
    }
}
