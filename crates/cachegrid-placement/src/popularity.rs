//! Popularity-weighted first-fit placement.
//!
//! Videos are ranked by total request volume across all endpoints.
//! Endpoint position and latency are deliberately ignored; this strategy
//! optimizes for demand alone. Each video goes into the first cache
//! (scanning from cache 0) with enough space left.

use tracing::{debug, warn};

use cachegrid_model::Instance;

use crate::plan::PlacementPlan;

/// Place videos by descending request volume, first-fit from cache 0.
pub fn place(instance: &Instance) -> PlacementPlan {
    let mut weight = vec![0u64; instance.video_count()];
    for request in &instance.requests {
        weight[request.video] += request.count;
    }

    // Stable ascending sort consumed back to front: highest demand first,
    // equal weights in descending id order on every run.
    let mut order: Vec<usize> = (0..instance.video_count()).collect();
    order.sort_by_key(|&video| weight[video]);

    let mut contents: Vec<Vec<usize>> = vec![Vec::new(); instance.cache_count];
    let mut space_left = vec![instance.cache_capacity; instance.cache_count];
    let mut unplaced = 0;

    for &video in order.iter().rev() {
        let size = instance.video_sizes[video];
        match (0..instance.cache_count).find(|&cache| space_left[cache] >= size) {
            Some(cache) => {
                space_left[cache] -= size;
                contents[cache].push(video);
                debug!(video, cache, size, weight = weight[video], "placed video");
            }
            None => unplaced += 1,
        }
    }

    if unplaced > 0 {
        warn!(unplaced, "videos fit in no cache");
    }

    PlacementPlan::from_contents(contents, unplaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachegrid_model::{Endpoint, Request};
    use std::collections::HashMap;

    fn instance(cache_count: usize, capacity: u64, sizes: &[u64], requests: &[(usize, u64)]) -> Instance {
        Instance {
            cache_count,
            cache_capacity: capacity,
            video_sizes: sizes.to_vec(),
            endpoints: vec![Endpoint {
                datacenter_latency: 100,
                cache_latency: HashMap::new(),
            }],
            requests: requests
                .iter()
                .map(|&(video, count)| Request { video, endpoint: 0, count })
                .collect(),
        }
    }

    fn contents_of(plan: &PlacementPlan, cache: usize) -> &[usize] {
        &plan.assignment.entries[cache].videos
    }

    #[test]
    fn most_requested_video_is_placed_first() {
        // Cache fits exactly one of the two videos; the popular one wins.
        let inst = instance(1, 4, &[4, 4], &[(0, 2), (1, 9)]);
        let plan = place(&inst);
        assert_eq!(contents_of(&plan, 0), &[1]);
        assert_eq!(plan.unplaced, 1);
    }

    #[test]
    fn first_fit_scans_caches_from_zero() {
        let inst = instance(3, 10, &[6, 6], &[(0, 5), (1, 3)]);
        let plan = place(&inst);
        // Video 0 lands in cache 0; video 1 no longer fits there and
        // spills into cache 1. Cache 2 stays empty.
        assert_eq!(contents_of(&plan, 0), &[0]);
        assert_eq!(contents_of(&plan, 1), &[1]);
        assert!(contents_of(&plan, 2).is_empty());
    }

    #[test]
    fn equal_weights_break_ties_by_descending_id() {
        let inst = instance(1, 100, &[1, 1, 1], &[(0, 5), (1, 5), (2, 5)]);
        let plan = place(&inst);
        assert_eq!(contents_of(&plan, 0), &[2, 1, 0]);
    }

    #[test]
    fn tie_break_is_stable_across_runs() {
        let inst = instance(2, 3, &[2, 2, 2], &[(0, 7), (1, 7), (2, 7)]);
        let first = place(&inst);
        let second = place(&inst);
        assert_eq!(first.assignment, second.assignment);
    }

    #[test]
    fn unrequested_videos_still_get_packed() {
        let inst = instance(1, 10, &[3, 3], &[]);
        let plan = place(&inst);
        assert_eq!(plan.unplaced, 0);
        assert_eq!(contents_of(&plan, 0).len(), 2);
    }

    #[test]
    fn oversized_video_is_counted_unplaced() {
        let inst = instance(2, 5, &[9], &[(0, 4)]);
        let plan = place(&inst);
        assert_eq!(plan.unplaced, 1);
        assert!(contents_of(&plan, 0).is_empty());
        assert!(contents_of(&plan, 1).is_empty());
    }

    #[test]
    fn plan_always_validates_on_its_instance() {
        let inst = instance(2, 7, &[3, 5, 2, 4, 1], &[(0, 3), (2, 8), (4, 1), (1, 6)]);
        let plan = place(&inst);
        assert!(cachegrid_scoring::score(&inst, &plan.assignment).is_ok());
    }

    #[test]
    fn emits_an_entry_for_every_cache() {
        let inst = instance(4, 1, &[1], &[(0, 1)]);
        let plan = place(&inst);
        assert_eq!(plan.assignment.entries.len(), 4);
        assert_eq!(plan.assignment.declared, 4);
    }
}
