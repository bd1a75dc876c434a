//! The hash ring facade.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::config::RingConfiguration;
use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::lookup::{DistinctNodes, LookupStrategy, LookupStrategyFactory};
use crate::node::Node;
use crate::partitioning::PartitioningStrategy;
use crate::segment::{ConnectedRingSegments, IterationDirection, SegmentRef};

use super::summary::RingSummary;

/// An immutable, weighted consistent-hashing ring.
///
/// A ring is built once from a node list: the partitioning strategy splits the
/// ring into segments and the lookup strategy indexes them. Membership
/// changes go through [`HashRing::rebuild`], which produces a new ring.
///
/// # Example
///
/// ```
/// use ring_core::{HashRingBuilder, Node, RingConfiguration, WeightedNode, XxHash64};
///
/// let nodes: Vec<WeightedNode> = vec!["a:10".parse()?, "b:20".parse()?];
/// let ring = HashRingBuilder::new(RingConfiguration::default())
///     .consistent_hashing(XxHash64::default())
///     .binary_search()
///     .build(&nodes)?;
///
/// let owner = ring.get_node_by(b"user:42", &XxHash64::new(7))?;
/// assert!(owner.identity() == "a" || owner.identity() == "b");
/// # Ok::<(), ring_core::Error>(())
/// ```
pub struct HashRing<N: Node> {
    config: RingConfiguration,
    partitioning: Arc<dyn PartitioningStrategy<N>>,
    lookup_factory: Arc<dyn LookupStrategyFactory<N>>,
    lookup: Box<dyn LookupStrategy<N>>,
    summary: OnceLock<RingSummary<N>>,
}

impl<N: Node> HashRing<N> {
    /// Partitions the ring between `nodes` and indexes the result.
    pub fn new(
        config: RingConfiguration,
        partitioning: Arc<dyn PartitioningStrategy<N>>,
        lookup_factory: Arc<dyn LookupStrategyFactory<N>>,
        nodes: &[N],
    ) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::EmptyNodeSet);
        }

        let segments = partitioning.create_partitions(nodes)?;
        let lookup = lookup_factory.create(&config, segments)?;

        debug!(
            nodes = nodes.len(),
            segments = lookup.segments().len(),
            partitioning = partitioning.name(),
            lookup = lookup.name(),
            "built hash ring"
        );

        Ok(Self {
            config,
            partitioning,
            lookup_factory,
            lookup,
            summary: OnceLock::new(),
        })
    }

    /// Builds a new ring for `nodes` with the same configuration and
    /// strategies. `self` is left untouched.
    pub fn rebuild(&self, nodes: &[N]) -> Result<Self> {
        Self::new(
            self.config,
            Arc::clone(&self.partitioning),
            Arc::clone(&self.lookup_factory),
            nodes,
        )
    }

    pub fn config(&self) -> &RingConfiguration {
        &self.config
    }

    pub fn partitioning(&self) -> &dyn PartitioningStrategy<N> {
        self.partitioning.as_ref()
    }

    pub fn lookup(&self) -> &dyn LookupStrategy<N> {
        self.lookup.as_ref()
    }

    /// First segment in ring order.
    pub fn head(&self) -> SegmentRef<'_, N> {
        self.lookup.head()
    }

    pub fn segments(&self) -> &ConnectedRingSegments<N> {
        self.lookup.segments()
    }

    /// The node owning `hash_code`, after reducing it to the ring size.
    pub fn get_node(&self, hash_code: u64) -> Result<&N> {
        Ok(self.get_segment(hash_code)?.node())
    }

    /// Hashes `key` with `hasher` and returns the owning node.
    pub fn get_node_by<H: HashAlgorithm + ?Sized>(&self, key: &[u8], hasher: &H) -> Result<&N> {
        self.get_node(hasher.hash(key))
    }

    /// Up to `limit` distinct nodes, starting with the owner of `hash_code`
    /// and walking the ring in `direction`.
    pub fn get_nodes(
        &self,
        hash_code: u64,
        limit: usize,
        direction: IterationDirection,
    ) -> Result<DistinctNodes<'_, N>> {
        self.lookup
            .lookup_many(self.config.constrain(hash_code), limit, direction)
    }

    /// The segment owning `hash_code`, after reducing it to the ring size.
    pub fn get_segment(&self, hash_code: u64) -> Result<SegmentRef<'_, N>> {
        self.lookup.lookup_segment(self.config.constrain(hash_code))
    }

    pub fn get_segment_by<H: HashAlgorithm + ?Sized>(
        &self,
        key: &[u8],
        hasher: &H,
    ) -> Result<SegmentRef<'_, N>> {
        self.get_segment(hasher.hash(key))
    }

    /// Share and segment count per node, computed on first use.
    pub fn calculate_summary(&self) -> &RingSummary<N> {
        self.summary.get_or_init(|| {
            let summary = RingSummary::calculate(&self.config, self.segments());
            debug!(nodes = summary.len(), "computed ring summary");
            summary
        })
    }
}

/// The ring report: one line per node with its share and segment count.
impl<N: Node> fmt::Display for HashRing<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.calculate_summary(), f)
    }
}

impl<N: Node> fmt::Debug for HashRing<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRing")
            .field("config", &self.config)
            .field("partitioning", &self.partitioning.name())
            .field("lookup", &self.lookup.name())
            .field("segments", &self.segments().len())
            .finish()
    }
}
