//! Core library for a weighted consistent-hashing ring.
//!
//! This crate provides the building blocks of the ring:
//! - Modular hash ranges with open and closed boundaries
//! - Node and virtual node abstractions
//! - Partitioning strategies (consistent hashing, ping-pong)
//! - Lookup strategies (binary search, direct-mapped memory table)
//! - The [`HashRing`] facade, its builder and the share report

pub mod config;
pub mod error;
pub mod hash;
pub mod lookup;
pub mod node;
pub mod partitioning;
pub mod range;
pub mod ring;
pub mod segment;
pub mod vnode;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::RingConfiguration;
pub use error::{Error, Result};
pub use hash::{HashAlgorithm, SipHash13, XxHash64, Xxh3};
pub use lookup::{
    BinarySearch, BinarySearchFactory, LookupStrategy, LookupStrategyFactory, MemoryLookup,
    MemoryLookupFactory,
};
pub use node::{Node, WeightedNode};
pub use partitioning::{ConsistentHashing, PartitioningStrategy, PingPong};
pub use range::{HashRange, HashRangeBoundary};
pub use ring::{HashRing, HashRingBuilder, NodeSummary, RingSummary};
pub use segment::{IterationDirection, RingSegment, SegmentRef};
pub use vnode::VirtualNode;
