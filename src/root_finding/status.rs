//! Per-element status for batched root-finding.
//! - `Status::Active`    : still iterating
//! - `Status::Converged` : |f(x)| within tolerance; estimate frozen
//! - `Status::Failed`    : unsolvable from here; estimate frozen

/// Resolution state of a single batch element.
///
/// Transitions are monotonic: `Active -> Converged` or `Active -> Failed`,
/// never reversed and never between the two resolved states. Once an
/// element leaves [`Status::Active`], its estimate is frozen for the
/// remainder of the solve.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Active,
    Converged,
    Failed,
}

impl Status {
    /// Returns `true` if the element is still being iterated.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Status::Active)
    }

    /// Returns `true` if the element resolved, either way.
    #[inline]
    pub fn is_resolved(self) -> bool {
        !self.is_active()
    }
}
