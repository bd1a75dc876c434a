//! Deterministic proportional partitioning.
//!
//! Nodes are sorted by identity and dealt alternately to the front and the
//! back of the ring: with sorted `A B C D E` the ring order becomes
//! `A C E D B`. Each node then receives `weight * floor(slots / total_weight)`
//! contiguous slots; the last node absorbs the rounding remainder.
//!
//! The first range is `[0, size * weight]` and so holds one slot more than
//! its nominal size. On a ring with `total_weight` slots or fewer this can
//! leave a later node with an empty `(x, x]` range, in which case
//! partitioning fails with [`Error::InvalidRange`] rather than
//! [`Error::ZeroTotalWeight`].
//!
//! Compared to plain sequential slicing, the alternating order keeps more of
//! each node's previous range when a node joins at the end of the sort order.

use tracing::debug;

use crate::config::RingConfiguration;
use crate::error::{Error, Result};
use crate::node::{by_identity, Node};
use crate::partitioning::traits::PartitioningStrategy;
use crate::range::{HashRange, HashRangeBoundary};
use crate::segment::RingSegment;

/// Hash-free partitioning into one contiguous slice per node.
#[derive(Clone, Debug)]
pub struct PingPong {
    config: RingConfiguration,
}

impl PingPong {
    pub fn new(config: RingConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RingConfiguration {
        &self.config
    }
}

/// Deals sorted nodes alternately to the front (ascending) and the back
/// (descending) of the output.
fn ping_pong_order<N: Node>(mut nodes: Vec<&N>) -> Vec<&N> {
    nodes.sort_by(|a, b| by_identity(*a, *b));

    let back: Vec<&N> = nodes.iter().skip(1).step_by(2).copied().collect();
    let mut ordered: Vec<&N> = nodes.iter().step_by(2).copied().collect();
    ordered.extend(back.into_iter().rev());
    ordered
}

impl<N: Node> PartitioningStrategy<N> for PingPong {
    fn create_partitions(&self, nodes: &[N]) -> Result<Vec<RingSegment<N>>> {
        if nodes.is_empty() {
            return Err(Error::EmptyNodeSet);
        }

        let weighted: Vec<&N> = nodes.iter().filter(|n| n.weight() > 0).collect();
        let total_weight: u128 = weighted.iter().map(|n| u128::from(n.weight())).sum();
        if total_weight == 0 {
            return Err(Error::ZeroTotalWeight);
        }

        let max_slot = self.config.max_slot();
        let segment_size = self.config.number_of_slots() / total_weight;
        let ordered = ping_pong_order(weighted);
        let last = ordered.len() - 1;

        let mut segments = Vec::with_capacity(ordered.len());
        let mut from = 0u64;
        for (i, node) in ordered.into_iter().enumerate() {
            let to = if i == last {
                max_slot
            } else {
                // Every prefix short of the full weight ends below max_slot.
                let end = u128::from(from) + segment_size * u128::from(node.weight());
                end.min(u128::from(max_slot)) as u64
            };

            let lower = if i == 0 {
                HashRangeBoundary::inclusive(0)
            } else {
                HashRangeBoundary::exclusive(from)
            };
            let range = HashRange::new(lower, HashRangeBoundary::inclusive(to))?;
            segments.push(RingSegment::new(node.clone(), range));

            from = to;
        }

        debug!(
            nodes = nodes.len(),
            segments = segments.len(),
            segment_size = %segment_size,
            "partitioned ring with ping-pong"
        );

        Ok(segments)
    }

    fn name(&self) -> &'static str {
        "PingPong"
    }
}
