//! Problem instance — videos, endpoints, caches, and the request workload.
//!
//! An [`Instance`] is built once (parsed or constructed) and never mutated.
//! All cache servers share a single capacity; endpoint→cache connectivity is
//! sparse, and an unconnected cache serves at the endpoint's datacenter
//! latency (no benefit).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ParseResult;
use crate::tokens::Tokens;

/// A request origin with its latency profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    /// Latency to the origin datacenter, in ms.
    pub datacenter_latency: u64,
    /// Latency to each explicitly connected cache, in ms. Caches absent
    /// from this map are unreachable from the endpoint.
    pub cache_latency: HashMap<usize, u64>,
}

impl Endpoint {
    /// Latency from this endpoint to `cache`, falling back to the
    /// datacenter latency for unconnected caches.
    pub fn latency_to(&self, cache: usize) -> u64 {
        self.cache_latency
            .get(&cache)
            .copied()
            .unwrap_or(self.datacenter_latency)
    }
}

/// One workload record: `count` requests for `video` from `endpoint`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Request {
    pub video: usize,
    pub endpoint: usize,
    pub count: u64,
}

/// The full problem description, independent of any candidate solution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instance {
    /// Number of cache servers (ids `0..cache_count`).
    pub cache_count: usize,
    /// Capacity of every cache server, in MB.
    pub cache_capacity: u64,
    /// Video sizes in MB, indexed by video id.
    pub video_sizes: Vec<u64>,
    pub endpoints: Vec<Endpoint>,
    pub requests: Vec<Request>,
}

impl Instance {
    pub fn video_count(&self) -> usize {
        self.video_sizes.len()
    }

    /// Total request volume across the whole workload.
    pub fn total_request_count(&self) -> u64 {
        self.requests.iter().map(|r| r.count).sum()
    }

    /// Parse the whitespace-delimited instance format:
    ///
    /// ```text
    /// V E R C X
    /// v_size[0] ... v_size[V-1]
    /// E blocks:  L_d K  followed by K pairs of  cache_id L_c
    /// R lines:   video_id endpoint_id count
    /// ```
    pub fn parse(input: &str) -> ParseResult<Instance> {
        let mut t = Tokens::new(input);

        let video_count = t.next_usize("video count")?;
        let endpoint_count = t.next_usize("endpoint count")?;
        let request_count = t.next_usize("request count")?;
        let cache_count = t.next_usize("cache count")?;
        let cache_capacity = t.next_u64("cache capacity")?;

        let mut video_sizes = Vec::with_capacity(video_count);
        for _ in 0..video_count {
            video_sizes.push(t.next_u64("video size")?);
        }

        let mut endpoints = Vec::with_capacity(endpoint_count);
        for _ in 0..endpoint_count {
            let datacenter_latency = t.next_u64("datacenter latency")?;
            let connected = t.next_usize("connected cache count")?;
            let mut cache_latency = HashMap::with_capacity(connected);
            for _ in 0..connected {
                let cache = t.next_usize("cache id")?;
                let latency = t.next_u64("cache latency")?;
                cache_latency.insert(cache, latency);
            }
            endpoints.push(Endpoint { datacenter_latency, cache_latency });
        }

        let mut requests = Vec::with_capacity(request_count);
        for _ in 0..request_count {
            requests.push(Request {
                video: t.next_usize("request video id")?,
                endpoint: t.next_usize("request endpoint id")?,
                count: t.next_u64("request count")?,
            });
        }

        Ok(Instance {
            cache_count,
            cache_capacity,
            video_sizes,
            endpoints,
            requests,
        })
    }
}
