//! Circular doubly-linked segment list.
//!
//! Segments live in one arena, sorted in ring order; `next` and `previous`
//! links are arena indices. The links are written once while the list is
//! built and never change afterwards.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::range::HashRange;

use super::ring_segment::{IterationDirection, RingSegment};

/// A segment together with the arena indices of its neighbours.
#[derive(Clone, Debug)]
pub struct ConnectedRingSegment<N> {
    segment: RingSegment<N>,
    next: usize,
    previous: usize,
}

impl<N> ConnectedRingSegment<N> {
    #[inline]
    pub fn segment(&self) -> &RingSegment<N> {
        &self.segment
    }

    #[inline]
    pub fn next_index(&self) -> usize {
        self.next
    }

    #[inline]
    pub fn previous_index(&self) -> usize {
        self.previous
    }
}

/// All segments of a ring, sorted and linked into a single cycle.
#[derive(Clone, Debug)]
pub struct ConnectedRingSegments<N> {
    sorted: Vec<ConnectedRingSegment<N>>,
}

impl<N: Node> ConnectedRingSegments<N> {
    /// Sorts `segments` by range (then node identity) and links them in that
    /// order, closing the cycle from the last segment back to the first.
    pub fn new(mut segments: Vec<RingSegment<N>>) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::EmptyNodeSet);
        }

        segments.sort_by(RingSegment::ring_order);

        let count = segments.len();
        let mut sorted: Vec<_> = segments
            .into_iter()
            .map(|segment| ConnectedRingSegment {
                segment,
                next: 0,
                previous: 0,
            })
            .collect();

        for index in 0..count {
            let next = (index + 1) % count;
            sorted[index].next = next;
            sorted[next].previous = index;
        }

        Ok(Self { sorted })
    }

    /// Number of segments. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The first segment in sort order, i.e. the one owning slot `0` on a
    /// fully covered ring.
    #[inline]
    pub fn head(&self) -> SegmentRef<'_, N> {
        SegmentRef {
            segments: self,
            index: 0,
        }
    }

    pub fn get(&self, index: usize) -> Option<SegmentRef<'_, N>> {
        (index < self.sorted.len()).then_some(SegmentRef {
            segments: self,
            index,
        })
    }

    /// The sorted arena, for index based lookups.
    #[inline]
    pub fn as_slice(&self) -> &[ConnectedRingSegment<N>] {
        &self.sorted
    }

    /// Segments in sort order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = SegmentRef<'_, N>> + '_ {
        (0..self.sorted.len()).map(move |index| SegmentRef {
            segments: self,
            index,
        })
    }
}

/// Borrowed handle on one segment of a [`ConnectedRingSegments`].
pub struct SegmentRef<'a, N> {
    segments: &'a ConnectedRingSegments<N>,
    index: usize,
}

impl<N> Clone for SegmentRef<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for SegmentRef<'_, N> {}

impl<'a, N: Node> SegmentRef<'a, N> {
    /// Position of this segment in the sorted arena.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn segment(&self) -> &'a RingSegment<N> {
        &self.segments.sorted[self.index].segment
    }

    #[inline]
    pub fn node(&self) -> &'a N {
        &self.segment().node
    }

    #[inline]
    pub fn range(&self) -> &'a HashRange {
        &self.segment().range
    }

    pub fn next(&self) -> Self {
        self.step(IterationDirection::Clockwise)
    }

    pub fn previous(&self) -> Self {
        self.step(IterationDirection::Counterclockwise)
    }

    /// The neighbouring segment in `direction`.
    pub fn step(&self, direction: IterationDirection) -> Self {
        let link = &self.segments.sorted[self.index];
        let index = match direction {
            IterationDirection::Clockwise => link.next,
            IterationDirection::Counterclockwise => link.previous,
        };
        Self {
            segments: self.segments,
            index,
        }
    }

    /// Walks the ring from this segment, yielding every segment exactly once.
    pub fn iterate(&self, direction: IterationDirection) -> SegmentIter<'a, N> {
        SegmentIter {
            segments: self.segments,
            start: self.index,
            current: Some(self.index),
            remaining: self.segments.len(),
            direction,
        }
    }
}

impl<N> PartialEq for SegmentRef<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.segments, other.segments) && self.index == other.index
    }
}

impl<N> Eq for SegmentRef<'_, N> {}

impl<N: Node> fmt::Debug for SegmentRef<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentRef")
            .field("index", &self.index)
            .field("node", &self.node().identity())
            .field("range", self.range())
            .finish()
    }
}

impl<N: Node> fmt::Display for SegmentRef<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <- {} {} -> {}",
            self.previous().node().identity(),
            self.node().identity(),
            self.range(),
            self.next().node().identity()
        )
    }
}

/// Finite walk around the segment cycle; stops before revisiting its start.
pub struct SegmentIter<'a, N> {
    segments: &'a ConnectedRingSegments<N>,
    start: usize,
    current: Option<usize>,
    remaining: usize,
    direction: IterationDirection,
}

impl<'a, N: Node> Iterator for SegmentIter<'a, N> {
    type Item = SegmentRef<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let item = SegmentRef {
            segments: self.segments,
            index,
        };

        let following = item.step(self.direction).index;
        self.current = (following != self.start).then_some(following);
        self.remaining -= 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: Node> ExactSizeIterator for SegmentIter<'_, N> {}

impl<N: Node> FusedIterator for SegmentIter<'_, N> {}
