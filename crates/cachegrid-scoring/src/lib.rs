//! cachegrid-scoring — assignment validation and scoring.
//!
//! Checks a candidate [`Assignment`](cachegrid_model::Assignment) against
//! the hard feasibility invariants (cache count range, per-cache
//! uniqueness, capacity) and computes the normalized latency-savings
//! score. Validation failures are fatal: no partial score is ever
//! produced for an infeasible solution.

pub mod error;
pub mod scorer;

pub use error::{ValidateError, ValidateResult};
pub use scorer::{ScoreReport, cache_contents, score};
