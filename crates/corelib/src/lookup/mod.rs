//! Lookup strategies: resolving a hash code to the segment that owns it.
//!
//! | Strategy | Lookup | Memory |
//! |----------|--------|--------|
//! | [`BinarySearch`] | O(log n) segments | O(n) segments |
//! | [`MemoryLookup`] | O(1) | O(ring size) |
//!
//! Memory lookup only accepts constrained rings, see
//! [`RingConfiguration::with_size`](crate::config::RingConfiguration::with_size).

pub mod binary_search;
pub mod memory;
pub mod traits;

pub use binary_search::{BinarySearch, BinarySearchFactory};
pub use memory::{MemoryLookup, MemoryLookupFactory};
pub use traits::{DistinctNodes, LookupStrategy, LookupStrategyFactory};
