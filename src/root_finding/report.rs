//! Defines the [`BatchReport`] struct returned by the batched solver.

/// Final report of one batched solve.
///
/// [`BatchReport`] holds three parallel vectors, one entry per batch element:
/// - `roots`       : best root estimate per element
/// - `converged`   : |f(root)| reached `function_tolerance`
/// - `failed`      : element judged unsolvable (degenerate derivative or
///                   non-finite values), independent of the iteration budget
///
/// For any element, `converged` and `failed` are never both `true`. An
/// element with neither flag set ran out of iteration budget while still
/// active; its `roots` entry holds the last computed (unresolved) value.
///
/// Aggregate counters:
/// - `iterations`  : loop trips performed (shared across the batch)
/// - `evaluations` : total oracle calls
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub roots:       Vec<f64>,
    pub converged:   Vec<bool>,
    pub failed:      Vec<bool>,
    pub iterations:  usize,
    pub evaluations: usize,
}

impl BatchReport {
    /// Number of batch elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// `true` if every element converged.
    #[must_use]
    pub fn all_converged(&self) -> bool {
        self.converged.iter().all(|&c| c)
    }

    /// `true` if at least one element was judged unsolvable.
    #[must_use]
    pub fn any_failed(&self) -> bool {
        self.failed.iter().any(|&f| f)
    }

    /// Number of elements that neither converged nor failed: the iteration
    /// budget ran out while they were still active.
    #[must_use]
    pub fn unresolved(&self) -> usize {
        self.converged
            .iter()
            .zip(&self.failed)
            .filter(|&(&c, &f)| !c && !f)
            .count()
    }
}
