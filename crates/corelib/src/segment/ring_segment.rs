//! Node/range ownership pairs.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node::{by_identity, Node};
use crate::range::HashRange;

/// One contiguous ownership assignment.
///
/// A node usually owns many segments: one per virtual node, plus an extra one
/// when its arc wraps past the end of the ring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingSegment<N> {
    pub node: N,
    pub range: HashRange,
}

impl<N: Node> RingSegment<N> {
    pub fn new(node: N, range: HashRange) -> Self {
        Self { node, range }
    }

    /// Ring order: by range, then by node identity.
    pub fn ring_order(&self, other: &Self) -> Ordering {
        self.range
            .cmp(&other.range)
            .then_with(|| by_identity(&self.node, &other.node))
    }
}

impl<N: Node> fmt::Display for RingSegment<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node.identity(), self.range)
    }
}

/// Which way to walk the ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IterationDirection {
    /// Towards higher hash codes, wrapping from `max_slot` to `0`.
    #[default]
    Clockwise,
    /// Towards lower hash codes, wrapping from `0` to `max_slot`.
    Counterclockwise,
}
