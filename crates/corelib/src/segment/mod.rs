//! Ring segments and the circular segment graph.
//!
//! A [`RingSegment`] assigns one contiguous [`HashRange`](crate::range::HashRange)
//! to a node. [`ConnectedRingSegments`] sorts a full set of segments into ring
//! order and links them into a circular doubly-linked list that can be walked
//! in either direction from any segment.

mod connected;
mod ring_segment;

pub use connected::{ConnectedRingSegment, ConnectedRingSegments, SegmentIter, SegmentRef};
pub use ring_segment::{IterationDirection, RingSegment};
