//! Replication strategy abstractions.
//!
//! - **SimpleStrategy**: N distinct nodes placed sequentially around the ring

pub mod simple;

pub use simple::SimpleStrategy;

use ring_core::{HashRing, Node, Result};

/// Trait for replication strategies.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (Send + Sync) as they may be
/// shared across threads.
pub trait ReplicationStrategy<N: Node>: Send + Sync {
    /// Number of copies, primary included.
    fn replication_factor(&self) -> usize;

    /// Nodes that should hold copies of `hash_code`, primary first.
    ///
    /// Returns fewer than [`replication_factor`](Self::replication_factor)
    /// nodes when the ring has fewer distinct nodes.
    fn replicas<'a>(&self, ring: &'a HashRing<N>, hash_code: u64) -> Result<Vec<&'a N>>;

    /// Get the strategy name (for logging/debugging).
    fn name(&self) -> &'static str;
}
