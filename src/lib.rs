//! # shoal
//!
//! Batched (vectorized) root-finding primitives.
//!
//! The core entry point is [`root_finding::newton::newton_batch`], which
//! drives every element of an estimate vector through Newton-Raphson
//! iterations independently and in lockstep. Each element resolves on its
//! own as converged, failed, or out of budget; one ill-posed element never
//! aborts or corrupts the rest of the batch.

pub mod root_finding;
