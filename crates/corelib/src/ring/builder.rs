//! Staged builder for [`HashRing`].
//!
//! Each stage only offers the choices that are still open: first the
//! partitioning strategy, then the lookup strategy, then the node list.
//!
//! ```
//! use ring_core::{HashRingBuilder, RingConfiguration, WeightedNode};
//!
//! let config = RingConfiguration::with_size(128_000)?;
//! let nodes: Vec<WeightedNode> = vec!["a:1".parse()?, "b:2".parse()?];
//! let ring = HashRingBuilder::new(config)
//!     .ping_pong()
//!     .memory_lookup()
//!     .build(&nodes)?;
//! assert_eq!(ring.calculate_summary().len(), 2);
//! # Ok::<(), ring_core::Error>(())
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::config::RingConfiguration;
use crate::error::Result;
use crate::hash::HashAlgorithm;
use crate::lookup::{BinarySearchFactory, LookupStrategyFactory, MemoryLookupFactory};
use crate::node::Node;
use crate::partitioning::{ConsistentHashing, PartitioningStrategy, PingPong};

use super::ring::HashRing;

/// Entry point: choose how the ring is partitioned.
#[derive(Clone, Debug)]
pub struct HashRingBuilder<N> {
    config: RingConfiguration,
    _nodes: PhantomData<fn() -> N>,
}

impl<N: Node> HashRingBuilder<N> {
    pub fn new(config: RingConfiguration) -> Self {
        Self {
            config,
            _nodes: PhantomData,
        }
    }

    /// Hashed virtual nodes, `weight` per node.
    pub fn consistent_hashing<H>(self, hasher: H) -> LookupBuilder<N>
    where
        H: HashAlgorithm + 'static,
    {
        let strategy = ConsistentHashing::new(self.config, hasher);
        self.partition_with(strategy)
    }

    /// Deterministic proportional slices.
    pub fn ping_pong(self) -> LookupBuilder<N> {
        let strategy = PingPong::new(self.config);
        self.partition_with(strategy)
    }

    pub fn partition_with<P>(self, strategy: P) -> LookupBuilder<N>
    where
        P: PartitioningStrategy<N> + 'static,
    {
        LookupBuilder {
            config: self.config,
            partitioning: Arc::new(strategy),
        }
    }
}

/// Second stage: choose how hash codes are resolved.
pub struct LookupBuilder<N: Node> {
    config: RingConfiguration,
    partitioning: Arc<dyn PartitioningStrategy<N>>,
}

impl<N: Node> LookupBuilder<N> {
    pub fn binary_search(self) -> FinalBuilder<N> {
        self.lookup_with(BinarySearchFactory)
    }

    /// Only for constrained rings; see [`MemoryLookupFactory`].
    pub fn memory_lookup(self) -> FinalBuilder<N> {
        self.lookup_with(MemoryLookupFactory)
    }

    pub fn lookup_with<F>(self, factory: F) -> FinalBuilder<N>
    where
        F: LookupStrategyFactory<N> + 'static,
    {
        FinalBuilder {
            config: self.config,
            partitioning: self.partitioning,
            lookup_factory: Arc::new(factory),
        }
    }
}

/// Last stage: supply the nodes.
///
/// Reusable: every [`build`](FinalBuilder::build) call produces an
/// independent ring.
pub struct FinalBuilder<N: Node> {
    config: RingConfiguration,
    partitioning: Arc<dyn PartitioningStrategy<N>>,
    lookup_factory: Arc<dyn LookupStrategyFactory<N>>,
}

impl<N: Node> FinalBuilder<N> {
    pub fn build(&self, nodes: &[N]) -> Result<HashRing<N>> {
        HashRing::new(
            self.config,
            Arc::clone(&self.partitioning),
            Arc::clone(&self.lookup_factory),
            nodes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::node::WeightedNode;
    use crate::test_support::nodes;

    #[test]
    fn test_strategy_names() {
        let ring = HashRingBuilder::new(RingConfiguration::with_size(1000).unwrap())
            .consistent_hashing(|bytes: &[u8]| -> u64 { bytes.iter().map(|b| u64::from(*b)).sum() })
            .memory_lookup()
            .build(&nodes("A:4 B:4"))
            .unwrap();

        assert_eq!(ring.partitioning().name(), "ConsistentHashing");
        assert_eq!(ring.lookup().name(), "MemoryLookup");
    }

    #[test]
    fn test_final_builder_is_reusable() {
        let builder = HashRingBuilder::<WeightedNode>::new(RingConfiguration::default())
            .ping_pong()
            .binary_search();

        let two = builder.build(&nodes("A:1 B:1")).unwrap();
        let three = builder.build(&nodes("A:1 B:1 C:1")).unwrap();
        assert_eq!(two.segments().len(), 2);
        assert_eq!(three.segments().len(), 3);
    }

    #[test]
    fn test_memory_lookup_on_full_ring_fails() {
        let result = HashRingBuilder::new(RingConfiguration::default())
            .ping_pong()
            .memory_lookup()
            .build(&nodes("A:1"));
        assert!(matches!(result, Err(Error::RingTooLarge { .. })));
    }
}
