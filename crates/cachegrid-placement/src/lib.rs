//! cachegrid-placement — heuristics that build cache assignments.
//!
//! Given an immutable [`Instance`](cachegrid_model::Instance), each
//! heuristic produces a [`PlacementPlan`] that is feasible by construction
//! (no cache is ever filled past capacity). Placement never fails; videos
//! that fit nowhere are counted and left at the datacenter.
//!
//! # Strategies
//!
//! - **`popularity`** — single-pass weighted first-fit: videos ordered by
//!   total request volume, each dropped into the first cache with room.
//! - **`savings`** — greedy over a per-(cache, video) latency-savings
//!   matrix: repeatedly commit the pair with the highest remaining
//!   savings, re-deriving the committed video's column as placements
//!   change what its requests already get.

pub mod plan;
pub mod popularity;
pub mod savings;

pub use plan::PlacementPlan;
