//! Virtual node hash points.
//!
//! # Virtual Nodes (VNodes) Concept
//!
//! Instead of placing each node once on the ring, consistent hashing places
//! `weight` points per node. Every point owns the arc between the previous
//! point and itself, so a node's share of the ring tracks its weight and
//! membership changes only move the arcs adjacent to the affected points.
//!
//! Points are computed as `hash(utf8(identity) || le_u32(index))` reduced
//! modulo the ring size, for `index` in `0..weight`.

use std::cmp::Ordering;

use crate::config::RingConfiguration;
use crate::hash::HashAlgorithm;
use crate::node::{by_identity, Node};

/// A single virtual node: where on the ring it sits and who owns it.
///
/// Only lives for the duration of a partitioning. Ordered by hash, then by
/// node identity so colliding points sort deterministically.
#[derive(Debug)]
pub struct VirtualNode<'a, N> {
    /// Slot on the ring, already reduced to `[0, max_slot]`.
    pub hash: u64,
    /// The physical node that owns this point.
    pub node: &'a N,
}

// Manual impls: `N` itself needs neither `Copy` nor `Ord`.
impl<N> Clone for VirtualNode<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for VirtualNode<'_, N> {}

impl<'a, N: Node> VirtualNode<'a, N> {
    #[inline]
    pub fn new(hash: u64, node: &'a N) -> Self {
        Self { hash, node }
    }

    /// Appends the `weight` virtual nodes of `node` to `points`.
    ///
    /// `key` is a scratch buffer reused across calls; its previous contents
    /// are discarded.
    pub fn write_points<H: HashAlgorithm + ?Sized>(
        node: &'a N,
        config: &RingConfiguration,
        hasher: &H,
        key: &mut Vec<u8>,
        points: &mut Vec<Self>,
    ) {
        let identity = node.identity().as_bytes();
        key.clear();
        key.extend_from_slice(identity);

        for index in 0..node.weight() {
            key.truncate(identity.len());
            key.extend_from_slice(&index.to_le_bytes());
            points.push(Self::new(config.constrain(hasher.hash(key.as_slice())), node));
        }
    }
}

impl<N: Node> PartialEq for VirtualNode<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Node> Eq for VirtualNode<'_, N> {}

impl<N: Node> PartialOrd for VirtualNode<'_, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Node> Ord for VirtualNode<'_, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash
            .cmp(&other.hash)
            .then_with(|| by_identity(self.node, other.node))
    }
}
