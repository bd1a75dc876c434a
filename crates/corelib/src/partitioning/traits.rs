//! Core partitioning trait definitions.

use crate::error::Result;
use crate::node::Node;
use crate::segment::RingSegment;

/// Splits the ring between a set of weighted nodes.
///
/// Implementations are stateless with respect to membership: the output
/// depends only on `nodes` and the strategy's own configuration, and must
/// cover `[0, max_slot]` with pairwise disjoint segments.
pub trait PartitioningStrategy<N: Node>: Send + Sync {
    /// Partitions the ring between `nodes`.
    ///
    /// The returned segments need not be sorted.
    fn create_partitions(&self, nodes: &[N]) -> Result<Vec<RingSegment<N>>>;

    /// Returns the name of this strategy.
    fn name(&self) -> &'static str;
}
