//! Mutable per-solve batch state.
//!
//! [`BatchState`] owns the estimate and status vectors for the lifetime of
//! one solve. Both updates are phrased compute-for-all-then-select rather
//! than per-element control flow: the raw Newton candidate is formed for
//! every index, resolved elements included, and the status mask decides
//! which writes land. Frozen elements keep their estimate bit-for-bit, and
//! a non-finite candidate produced by one element's degenerate arithmetic
//! never reaches any sibling.

use super::config::NewtonBatchCfg;
use super::report::BatchReport;
use super::status::Status;

#[derive(Debug)]
pub(crate) struct BatchState {
    estimate:   Vec<f64>,
    status:     Vec<Status>,
    iterations: usize,
}

impl BatchState {
    /// Fresh state: all elements `Active`, iteration counter at zero.
    pub fn new(initial_values: &[f64]) -> Self {
        Self {
            estimate:   initial_values.to_vec(),
            status:     vec![Status::Active; initial_values.len()],
            iterations: 0,
        }
    }

    #[inline]
    pub fn estimate(&self) -> &[f64] {
        &self.estimate
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[inline]
    pub fn bump_iterations(&mut self) {
        self.iterations += 1;
    }

    /// `true` while at least one element still iterates.
    pub fn any_active(&self) -> bool {
        self.status.iter().any(|s| s.is_active())
    }

    /// Masked Newton update.
    ///
    /// Computes `candidate[i] = estimate[i] - objective[i] / derivative[i]`
    /// unconditionally for every index (clipped to `max_step` when one is
    /// configured), then selects per element: `Active` elements take the
    /// candidate, resolved elements retain their frozen estimate. Candidates
    /// may be non-finite where the derivative has collapsed; those values
    /// are caught by [`BatchState::reclassify`] on the next pass.
    pub fn apply_step(&mut self, objective: &[f64], derivative: &[f64], max_step: f64) {
        let candidate: Vec<f64> = self
            .estimate
            .iter()
            .zip(objective.iter().zip(derivative))
            .map(|(&x, (&fx, &dfx))| {
                let mut step = -fx / dfx;
                if step.abs() > max_step {
                    step = step.signum() * max_step;
                }
                x + step
            })
            .collect();

        for ((x, &c), &s) in self.estimate.iter_mut().zip(&candidate).zip(&self.status) {
            if s.is_active() {
                *x = c;
            }
        }
    }

    /// Reclassifies `Active` elements from the freshly evaluated objective
    /// and derivative; resolved elements are left untouched, preserving the
    /// monotonic status invariant.
    ///
    /// Policy per active element:
    /// ├ `Converged` : |objective| <= `function_tolerance`
    /// ├ `Failed`    : estimate, objective, or derivative non-finite,
    /// │               or |derivative| < `min_derivative`
    /// └ `Active`    : otherwise
    ///
    /// Convergence is checked first: a solved element whose derivative
    /// happens to be flat at the root is a root, not a failure.
    pub fn reclassify(&mut self, objective: &[f64], derivative: &[f64], cfg: &NewtonBatchCfg) {
        for i in 0..self.status.len() {
            if self.status[i].is_resolved() {
                continue;
            }

            let x   = self.estimate[i];
            let fx  = objective[i];
            let dfx = derivative[i];

            if fx.abs() <= cfg.function_tolerance() {
                self.status[i] = Status::Converged;
            } else if !x.is_finite()
                || !fx.is_finite()
                || !dfx.is_finite()
                || dfx.abs() < cfg.min_derivative()
            {
                self.status[i] = Status::Failed;
            }
        }
    }

    /// Consumes the state into the immutable final report.
    pub fn into_report(self, evaluations: usize) -> BatchReport {
        let converged = self.status.iter().map(|&s| s == Status::Converged).collect();
        let failed    = self.status.iter().map(|&s| s == Status::Failed).collect();

        BatchReport {
            roots: self.estimate,
            converged,
            failed,
            iterations: self.iterations,
            evaluations,
        }
    }
}
