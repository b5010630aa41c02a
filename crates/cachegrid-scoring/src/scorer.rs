//! Feasibility checks and the latency-savings score.
//!
//! The score is the total latency saved across the workload, normalized to
//! milliseconds per 1000 requests and truncated to an integer:
//!
//! ```text
//! score = Σ (datacenter_latency - best_latency) * count  *  1000 / Σ count
//! ```
//!
//! where `best_latency` is the cheapest reachable cache holding the
//! requested video, or the datacenter latency if there is none.
//!
//! Video and endpoint ids are trusted to be in range for the instance
//! they came with; only the assignment's own shape is validated.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use cachegrid_model::{Assignment, Instance};

use crate::error::{ValidateError, ValidateResult};

/// Outcome of scoring a valid assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreReport {
    /// Normalized score: latency saved per 1000 requests, truncated.
    pub score: u64,
    /// Raw latency savings summed over the workload, in ms·requests.
    pub total_savings: u64,
    /// Total request volume the savings are normalized against.
    pub total_requests: u64,
}

/// Validate the assignment's shape and overlay it onto per-cache content
/// sets (one set per cache, empty for unmentioned caches).
///
/// Entries are checked in input order, so the first violation wins:
/// header count out of `[0, C]`, an entry naming a nonexistent cache, a
/// cache described twice, or a cache filled past capacity.
pub fn cache_contents(
    instance: &Instance,
    assignment: &Assignment,
) -> ValidateResult<Vec<HashSet<usize>>> {
    if assignment.declared < 0 || assignment.declared > instance.cache_count as i64 {
        return Err(ValidateError::CacheCount {
            declared: assignment.declared,
            available: instance.cache_count,
        });
    }

    let mut contents: Vec<Option<HashSet<usize>>> = vec![None; instance.cache_count];
    for entry in &assignment.entries {
        if entry.cache >= instance.cache_count {
            return Err(ValidateError::CacheUnknown {
                cache: entry.cache,
                available: instance.cache_count,
            });
        }
        if contents[entry.cache].is_some() {
            return Err(ValidateError::DuplicateCache { cache: entry.cache });
        }
        let stored: u64 = entry.videos.iter().map(|&v| instance.video_sizes[v]).sum();
        if stored > instance.cache_capacity {
            return Err(ValidateError::OverCapacity {
                cache: entry.cache,
                stored,
                capacity: instance.cache_capacity,
            });
        }
        contents[entry.cache] = Some(entry.videos.iter().copied().collect());
    }

    Ok(contents.into_iter().map(Option::unwrap_or_default).collect())
}

/// Validate and score a candidate assignment.
///
/// An instance with no requests has nothing to save and scores 0 rather
/// than dividing by zero.
pub fn score(instance: &Instance, assignment: &Assignment) -> ValidateResult<ScoreReport> {
    let contents = cache_contents(instance, assignment)?;

    let mut total_savings = 0u64;
    for request in &instance.requests {
        let endpoint = &instance.endpoints[request.endpoint];
        let worst = endpoint.datacenter_latency;
        // Only connected caches can beat the datacenter; an unconnected
        // cache serves at `worst` and contributes nothing.
        let mut best = worst;
        for (&cache, &latency) in &endpoint.cache_latency {
            if contents[cache].contains(&request.video) {
                best = best.min(latency);
            }
        }
        total_savings += (worst - best) * request.count;
    }

    let total_requests = instance.total_request_count();
    let score = if total_requests == 0 {
        0
    } else {
        total_savings * 1000 / total_requests
    };

    Ok(ScoreReport { score, total_savings, total_requests })
}
