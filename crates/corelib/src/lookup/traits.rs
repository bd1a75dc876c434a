//! Core lookup trait definitions.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::config::RingConfiguration;
use crate::error::Result;
use crate::node::Node;
use crate::segment::{ConnectedRingSegments, IterationDirection, RingSegment, SegmentIter, SegmentRef};

/// Resolves hash codes to the segments owning them.
///
/// A strategy is built once from a full set of segments and is immutable
/// afterwards, so lookups can run concurrently without synchronization.
pub trait LookupStrategy<N: Node>: Send + Sync {
    /// The connected segments this strategy resolves against.
    fn segments(&self) -> &ConnectedRingSegments<N>;

    /// Finds the segment whose range contains `hash_code`.
    ///
    /// `hash_code` must already be reduced to the ring size.
    fn lookup_segment(&self, hash_code: u64) -> Result<SegmentRef<'_, N>>;

    /// Returns the name of this strategy.
    fn name(&self) -> &'static str;

    /// First segment in ring order.
    fn head(&self) -> SegmentRef<'_, N> {
        self.segments().head()
    }

    /// The node owning `hash_code`.
    fn lookup_node(&self, hash_code: u64) -> Result<&N> {
        Ok(self.lookup_segment(hash_code)?.node())
    }

    /// Up to `limit` distinct nodes, starting with the owner of `hash_code`
    /// and walking the ring in `direction`.
    fn lookup_many(
        &self,
        hash_code: u64,
        limit: usize,
        direction: IterationDirection,
    ) -> Result<DistinctNodes<'_, N>> {
        let start = self.lookup_segment(hash_code)?;
        Ok(DistinctNodes::new(start.iterate(direction), limit))
    }
}

/// Creates a [`LookupStrategy`] for a freshly partitioned ring.
pub trait LookupStrategyFactory<N: Node>: Send + Sync {
    fn create(
        &self,
        config: &RingConfiguration,
        segments: Vec<RingSegment<N>>,
    ) -> Result<Box<dyn LookupStrategy<N>>>;

    /// Returns the name of the strategies this factory creates.
    fn name(&self) -> &'static str;
}

/// Lazily yields distinct nodes along a segment walk.
///
/// Segments of nodes already yielded are skipped without counting against
/// the limit. The walk visits every segment at most once, so the iterator
/// ends early when the ring has fewer distinct nodes than requested.
pub struct DistinctNodes<'a, N> {
    walk: SegmentIter<'a, N>,
    seen: HashSet<&'a str>,
    remaining: usize,
}

impl<'a, N: Node> DistinctNodes<'a, N> {
    pub fn new(walk: SegmentIter<'a, N>, limit: usize) -> Self {
        Self {
            walk,
            seen: HashSet::new(),
            remaining: limit,
        }
    }
}

impl<'a, N: Node> Iterator for DistinctNodes<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for segment in self.walk.by_ref() {
            let node = segment.node();
            if self.seen.insert(node.identity()) {
                self.remaining -= 1;
                return Some(node);
            }
        }

        self.remaining = 0;
        None
    }
}

impl<N: Node> FusedIterator for DistinctNodes<'_, N> {}
