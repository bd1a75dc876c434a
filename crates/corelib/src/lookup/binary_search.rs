//! Logarithmic lookup over the sorted segment array.
//!
//! # Algorithm
//!
//! Segments are sorted by upper bound, so "the segment ends before the hash
//! code" is monotone over the array and the owner is the first segment for
//! which it no longer holds. Hash codes no segment contains resolve to the
//! head segment; on a fully covered ring that never happens.

use tracing::debug;

use crate::config::RingConfiguration;
use crate::error::Result;
use crate::node::Node;
use crate::segment::{ConnectedRingSegments, RingSegment, SegmentRef};

use super::traits::{LookupStrategy, LookupStrategyFactory};

/// O(log n) lookup, O(n) memory.
#[derive(Clone, Debug)]
pub struct BinarySearch<N> {
    segments: ConnectedRingSegments<N>,
}

impl<N: Node> BinarySearch<N> {
    pub fn new(segments: Vec<RingSegment<N>>) -> Result<Self> {
        let segments = ConnectedRingSegments::new(segments)?;
        debug!(segments = segments.len(), "built binary search lookup");
        Ok(Self { segments })
    }
}

impl<N: Node> LookupStrategy<N> for BinarySearch<N> {
    fn segments(&self) -> &ConnectedRingSegments<N> {
        &self.segments
    }

    fn lookup_segment(&self, hash_code: u64) -> Result<SegmentRef<'_, N>> {
        let sorted = self.segments.as_slice();
        let index = sorted.partition_point(|s| s.segment().range.is_below(hash_code));

        let owner = sorted
            .get(index)
            .filter(|candidate| candidate.segment().range.contains(hash_code))
            .and_then(|_| self.segments.get(index));

        Ok(owner.unwrap_or_else(|| self.segments.head()))
    }

    fn name(&self) -> &'static str {
        "BinarySearch"
    }
}

/// Creates [`BinarySearch`] lookups; works for any ring size.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinarySearchFactory;

impl<N: Node> LookupStrategyFactory<N> for BinarySearchFactory {
    fn create(
        &self,
        _config: &RingConfiguration,
        segments: Vec<RingSegment<N>>,
    ) -> Result<Box<dyn LookupStrategy<N>>> {
        Ok(Box::new(BinarySearch::new(segments)?))
    }

    fn name(&self) -> &'static str {
        "BinarySearch"
    }
}
