//! Objective/derivative oracle contract for batched solvers.

/// Elementwise supplier of objective values and derivatives.
///
/// Given the batch's current estimate vector, [`ObjectiveOracle::evaluate`]
/// returns `(objective, derivative)`, each exactly as long as its input,
/// evaluated elementwise and independently. The solver calls the oracle
/// unconditionally on every iteration for the full batch; the oracle has
/// no notion of per-element status and must not keep cross-element state.
///
/// The oracle is allowed to produce non-finite values for individual
/// elements (e.g. from its own internal instabilities); the solver
/// tolerates these and fails the affected elements instead of panicking.
pub trait ObjectiveOracle {
    fn evaluate(&mut self, estimate: &[f64]) -> (Vec<f64>, Vec<f64>);
}

/// Any `FnMut(&[f64]) -> (Vec<f64>, Vec<f64>)` closure is an oracle.
impl<F> ObjectiveOracle for F
where
    F: FnMut(&[f64]) -> (Vec<f64>, Vec<f64>),
{
    fn evaluate(&mut self, estimate: &[f64]) -> (Vec<f64>, Vec<f64>) {
        self(estimate)
    }
}
