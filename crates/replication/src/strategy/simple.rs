//! Simple replication strategy.
//!
//! Places N replicas sequentially around the ring, starting at the segment
//! that owns the key. Works well for:
//!
//! - Small clusters
//! - Single data center deployments
//! - When network topology doesn't matter
//!
//! # Algorithm
//!
//! 1. Find the primary segment owning the key's hash code
//! 2. Walk the segment chain in the configured direction
//! 3. Collect the first N distinct nodes (primary first)
//!
//! # Performance
//!
//! - **Time**: one lookup plus a walk over at most every segment once
//! - **Space**: O(r) for the result and the set of seen nodes
//!
//! # Limitations
//!
//! - Doesn't consider data center/rack placement
//! - May place replicas on nodes in the same failure domain

use ring_core::{HashRing, IterationDirection, Node, Result};
use tracing::debug;

use crate::strategy::ReplicationStrategy;

/// N distinct nodes taken in ring order from the key's owner.
///
/// # Example
///
/// ```rust
/// use replication::{ReplicationStrategy, SimpleStrategy};
/// use ring_core::{HashRingBuilder, RingConfiguration, WeightedNode};
///
/// let nodes: Vec<WeightedNode> = vec!["a:1".parse()?, "b:1".parse()?, "c:1".parse()?];
/// let ring = HashRingBuilder::new(RingConfiguration::default())
///     .ping_pong()
///     .binary_search()
///     .build(&nodes)?;
///
/// let strategy = SimpleStrategy::new(2);
/// let replicas = strategy.replicas(&ring, 0)?;
/// assert_eq!(replicas.len(), 2);
/// # Ok::<(), ring_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    /// Number of replicas to create (including primary).
    replication_factor: usize,
    direction: IterationDirection,
}

impl SimpleStrategy {
    /// Clockwise placement with `replication_factor` copies.
    ///
    /// - 1: No replication (single copy)
    /// - 3: Standard (primary + 2 replicas)
    pub fn new(replication_factor: usize) -> Self {
        Self {
            replication_factor,
            direction: IterationDirection::Clockwise,
        }
    }

    /// Walks the ring in `direction` instead.
    pub fn with_direction(mut self, direction: IterationDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn direction(&self) -> IterationDirection {
        self.direction
    }
}

/// Three replicas, clockwise.
impl Default for SimpleStrategy {
    fn default() -> Self {
        Self::new(3)
    }
}

impl<N: Node> ReplicationStrategy<N> for SimpleStrategy {
    fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    fn replicas<'a>(&self, ring: &'a HashRing<N>, hash_code: u64) -> Result<Vec<&'a N>> {
        let replicas: Vec<&N> = ring
            .get_nodes(hash_code, self.replication_factor, self.direction)?
            .collect();

        if replicas.len() < self.replication_factor {
            debug!(
                requested = self.replication_factor,
                placed = replicas.len(),
                "ring has fewer distinct nodes than the replication factor"
            );
        }

        Ok(replicas)
    }

    fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}
