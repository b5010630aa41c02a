//! Savings-matrix greedy placement.
//!
//! Maintains the latency savings every (cache, video) pair would add and
//! repeatedly commits the best one that still fits. After a commit the
//! video's column is re-derived: each of its requests is now served at the
//! best latency among caches already holding the video, so the remaining
//! gain for every open cache is only the improvement over that.
//!
//! Pairs with zero remaining gain are still committed (the loop stops only
//! when the best entry goes negative), so caches fill up even after all
//! latency wins are exhausted.

use tracing::{debug, warn};

use cachegrid_model::Instance;

use crate::plan::PlacementPlan;

/// Column state: the pair has been committed.
const COMMITTED: i64 = -1;
/// Column state: the video no longer fits in this cache.
const UNFIT: i64 = -2;

/// Place videos by repeatedly committing the highest-savings
/// (cache, video) pair.
pub fn place(instance: &Instance) -> PlacementPlan {
    let mut savings = initial_savings(instance);
    let mut contents: Vec<Vec<usize>> = vec![Vec::new(); instance.cache_count];
    let mut space_left = vec![instance.cache_capacity; instance.cache_count];

    while let Some((cache, video, gain)) = best_pair(&savings) {
        if gain < 0 {
            break;
        }
        let size = instance.video_sizes[video];
        if space_left[cache] < size {
            savings[cache][video] = UNFIT;
            continue;
        }
        space_left[cache] -= size;
        contents[cache].push(video);
        savings[cache][video] = COMMITTED;
        debug!(video, cache, gain, "committed video to cache");
        refresh_savings(instance, &contents, &mut savings, video);
    }

    let unplaced = PlacementPlan::count_unplaced(instance, &contents);
    if unplaced > 0 {
        warn!(unplaced, "videos fit in no cache");
    }
    PlacementPlan::from_contents(contents, unplaced)
}

/// Savings each (cache, video) pair would yield on an empty grid.
fn initial_savings(instance: &Instance) -> Vec<Vec<i64>> {
    let mut savings = vec![vec![0i64; instance.video_count()]; instance.cache_count];
    for request in &instance.requests {
        if instance.video_sizes[request.video] > instance.cache_capacity {
            continue;
        }
        let endpoint = &instance.endpoints[request.endpoint];
        for (&cache, &latency) in &endpoint.cache_latency {
            let gain = endpoint.datacenter_latency as i64 - latency as i64;
            savings[cache][request.video] += gain * request.count as i64;
        }
    }
    savings
}

/// The maximal remaining entry; later pairs win ties.
fn best_pair(savings: &[Vec<i64>]) -> Option<(usize, usize, i64)> {
    let mut best: Option<(usize, usize, i64)> = None;
    for (cache, row) in savings.iter().enumerate() {
        for (video, &gain) in row.iter().enumerate() {
            if best.is_none_or(|(_, _, b)| gain >= b) {
                best = Some((cache, video, gain));
            }
        }
    }
    best
}

/// Re-derive one video's column after a commit.
///
/// Each request for the video is currently served at the best latency among
/// the caches that already hold it (datacenter if none is reachable); an
/// open cache's remaining gain is the improvement over that, clamped at
/// zero. Committed and unfit entries are left alone.
fn refresh_savings(
    instance: &Instance,
    contents: &[Vec<usize>],
    savings: &mut [Vec<i64>],
    video: usize,
) {
    for row in savings.iter_mut() {
        if row[video] > 0 {
            row[video] = 0;
        }
    }
    for request in instance.requests.iter().filter(|r| r.video == video) {
        let endpoint = &instance.endpoints[request.endpoint];
        let mut current = endpoint.datacenter_latency;
        for (&cache, &latency) in &endpoint.cache_latency {
            if contents[cache].contains(&video) {
                current = current.min(latency);
            }
        }
        for (cache, row) in savings.iter_mut().enumerate() {
            if row[video] >= 0 {
                let gain = current as i64 - endpoint.latency_to(cache) as i64;
                if gain > 0 {
                    row[video] += gain * request.count as i64;
                }
            }
        }
    }
}
