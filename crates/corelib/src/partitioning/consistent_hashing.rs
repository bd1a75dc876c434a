//! Consistent hashing with weighted virtual nodes.
//!
//! # Algorithm
//!
//! 1. Every node with a non-zero weight contributes `weight` virtual nodes
//!    (see [`crate::vnode`]).
//! 2. All points are pooled and sorted by hash, ties broken by identity.
//! 3. Each point owns `(previous point, this point]`. The first point's
//!    predecessor is the last point, so its arc wraps past `max_slot` and is
//!    split in two unless the last point sits exactly on `max_slot`.
//! 4. Points sharing a hash with the previous materialized point are dropped;
//!    the first of them (by identity) keeps the arc.
//!
//! # Performance
//!
//! - **Time**: O(w log w) where w = total weight
//! - **Space**: O(w) scratch plus at most w + 1 segments

use tracing::debug;

use crate::config::RingConfiguration;
use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::node::Node;
use crate::partitioning::traits::PartitioningStrategy;
use crate::range::{HashRange, HashRangeBoundary};
use crate::segment::RingSegment;
use crate::vnode::VirtualNode;

/// Virtual node based partitioning.
#[derive(Clone, Debug)]
pub struct ConsistentHashing<H> {
    config: RingConfiguration,
    hasher: H,
}

impl<H: HashAlgorithm> ConsistentHashing<H> {
    pub fn new(config: RingConfiguration, hasher: H) -> Self {
        Self { config, hasher }
    }

    pub fn config(&self) -> &RingConfiguration {
        &self.config
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Turns sorted points into segments.
    fn carve<N: Node>(&self, points: &[VirtualNode<'_, N>]) -> Result<Vec<RingSegment<N>>> {
        let Some(last) = points.last() else {
            return Err(Error::ZeroTotalWeight);
        };

        let mut segments = Vec::with_capacity(points.len() + 1);
        let mut previous = last.hash;

        for (i, point) in points.iter().enumerate() {
            if i > 0 && point.hash == previous {
                continue;
            }

            let from = HashRangeBoundary::exclusive(previous);
            let to = HashRangeBoundary::inclusive(point.hash);

            if previous < point.hash {
                segments.push(RingSegment::new(point.node.clone(), HashRange::new(from, to)?));
            } else if previous == self.config.max_slot() {
                let range = HashRange::new(HashRangeBoundary::inclusive(0), to)?;
                segments.push(RingSegment::new(point.node.clone(), range));
            } else {
                let (upper, lower) = HashRange::loop_around(&self.config, from, to)?;
                segments.push(RingSegment::new(point.node.clone(), upper));
                segments.push(RingSegment::new(point.node.clone(), lower));
            }

            previous = point.hash;
        }

        Ok(segments)
    }
}

impl<N: Node, H: HashAlgorithm> PartitioningStrategy<N> for ConsistentHashing<H> {
    fn create_partitions(&self, nodes: &[N]) -> Result<Vec<RingSegment<N>>> {
        match nodes {
            [] => return Ok(Vec::new()),
            [single] => {
                return Ok(vec![RingSegment::new(
                    single.clone(),
                    HashRange::full_coverage(&self.config),
                )])
            }
            _ => {}
        }

        let total_weight: usize = nodes.iter().map(|n| n.weight() as usize).sum();
        let mut points = Vec::with_capacity(total_weight);
        let mut key = Vec::new();
        for node in nodes.iter().filter(|n| n.weight() > 0) {
            VirtualNode::write_points(node, &self.config, &self.hasher, &mut key, &mut points);
        }
        points.sort_unstable();

        let segments = self.carve(&points)?;
        debug!(
            nodes = nodes.len(),
            virtual_nodes = points.len(),
            segments = segments.len(),
            hasher = self.hasher.name(),
            "partitioned ring with consistent hashing"
        );

        Ok(segments)
    }

    fn name(&self) -> &'static str {
        "ConsistentHashing"
    }
}
