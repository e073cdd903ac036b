//! Batched Newton-Raphson driver.

use super::batch::BatchState;
use super::config::NewtonBatchCfg;
use super::errors::NewtonBatchError;
use super::oracle::ObjectiveOracle;
use super::report::BatchReport;

/// Evaluates the oracle with a shape check on both outputs.
#[inline]
fn eval_checked<O>(
    oracle: &mut O,
    estimate: &[f64],
    evals: &mut usize,
) -> Result<(Vec<f64>, Vec<f64>), NewtonBatchError>
where
    O: ObjectiveOracle,
{
    let (objective, derivative) = {
        *evals += 1;
        oracle.evaluate(estimate)
    };
    if objective.len() != estimate.len() || derivative.len() != estimate.len() {
        return Err(NewtonBatchError::ShapeMismatch {
            expected:   estimate.len(),
            objective:  objective.len(),
            derivative: derivative.len(),
        });
    }

    Ok((objective, derivative))
}

/// Finds roots of a batch of independent scalar equations using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton_method),
/// advancing every element in lockstep.
///
/// # Arguments
/// - `oracle`         : maps the estimate vector to `(objective, derivative)`
///                      vectors of the same length ([`ObjectiveOracle`];
///                      any matching `FnMut` closure qualifies)
/// - `initial_values` : finite, non-empty initial estimates
/// - `cfg`            : [`NewtonBatchCfg`] (tolerances, `max_iter`,
///                      optional `max_step`)
///
/// # Returns
/// [`BatchReport`] with, per element:
/// - `roots`       : best root estimate
/// - `converged`   : |f(root)| reached `function_tolerance`
/// - `failed`      : degenerate derivative or non-finite values
///
/// Elements with neither flag set ran out of `max_iter` while still
/// active; running out of budget is deliberately distinct from failure.
///
/// # Errors
/// Only boundary contract violations are errors; per-element divergence
/// never is.
/// - [`NewtonBatchError::EmptyBatch`]     : `initial_values` empty
/// - [`NewtonBatchError::InvalidGuess`]   : non-finite initial value
/// - [`NewtonBatchError::ShapeMismatch`]  : oracle output length differs
///   from the batch length
///
/// # Behavior
/// - The oracle is evaluated once per iteration, unconditionally, for the
///   full batch; resolved elements are masked out of the estimate update
///   rather than skipped.
/// - The objective/derivative at the initial estimates are classified
///   before the first step, so already-solved inputs return immediately
///   with zero iterations and untouched estimates.
/// - Once an element is `Converged` or `Failed`, its estimate and flags
///   are frozen for the remainder of the solve.
///
/// # Example
/// ```
/// use shoal::root_finding::newton::newton_batch;
/// use shoal::root_finding::config::NewtonBatchCfg;
///
/// // Square roots of [4, 9, 16] via f(x) = x^2 - c.
/// let constants = [4.0, 9.0, 16.0];
/// let oracle = |x: &[f64]| {
///     let f: Vec<f64>  = x.iter().zip(&constants).map(|(&x, &c)| x * x - c).collect();
///     let df: Vec<f64> = x.iter().map(|&x| 2.0 * x).collect();
///     (f, df)
/// };
///
/// let report = newton_batch(oracle, &[1.0, 1.0, 1.0], NewtonBatchCfg::new()).unwrap();
/// assert!(report.all_converged());
/// assert!((report.roots[1] - 3.0).abs() < 1e-7);
/// ```
pub fn newton_batch<O>(
    mut oracle: O,
    initial_values: &[f64],
    cfg: NewtonBatchCfg,
) -> Result<BatchReport, NewtonBatchError>
where
    O: ObjectiveOracle,
{
    if initial_values.is_empty() {
        return Err(NewtonBatchError::EmptyBatch);
    }
    if let Some(index) = initial_values.iter().position(|v| !v.is_finite()) {
        return Err(NewtonBatchError::InvalidGuess {
            index,
            value: initial_values[index],
        });
    }

    let mut evals: usize = 0;
    let mut state = BatchState::new(initial_values);

    // classify at the initial estimates: degenerate guesses fail and
    // already-solved inputs converge before any step is taken
    let (mut objective, mut derivative) = eval_checked(&mut oracle, state.estimate(), &mut evals)?;
    state.reclassify(&objective, &derivative, &cfg);

    while state.any_active() && state.iterations() < cfg.max_iter() {
        state.apply_step(&objective, &derivative, cfg.max_step());
        (objective, derivative) = eval_checked(&mut oracle, state.estimate(), &mut evals)?;
        state.reclassify(&objective, &derivative, &cfg);
        state.bump_iterations();
    }

    Ok(state.into_report(evals))
}
