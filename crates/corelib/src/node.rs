//! Node abstractions for the hash ring.
//!
//! Nodes are the weighted participants the ring is partitioned between. The
//! ring only needs two things from a node: a stable identity, which orders
//! nodes and breaks ties between colliding hash points, and a relative weight.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A participant of the ring.
///
/// Segments hold their own copy of the owning node, so keep implementations
/// cheap to clone, or wrap them in an [`Arc`].
pub trait Node: Clone + Send + Sync + 'static {
    /// Stable, unique identity. Nodes are ordered by it byte-wise.
    fn identity(&self) -> &str;

    /// Relative capacity. Zero keeps the node out of partitioning.
    fn weight(&self) -> u32;
}

impl<N: Node> Node for Arc<N> {
    fn identity(&self) -> &str {
        (**self).identity()
    }

    fn weight(&self) -> u32 {
        (**self).weight()
    }
}

/// Orders two nodes by identity.
#[inline]
pub(crate) fn by_identity<N: Node>(a: &N, b: &N) -> Ordering {
    a.identity().cmp(b.identity())
}

/// Plain named node with a weight.
///
/// Equality, ordering and hashing consider the identity only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeightedNode {
    identity: String,
    weight: u32,
}

impl WeightedNode {
    pub fn new(identity: impl Into<String>, weight: u32) -> Self {
        Self {
            identity: identity.into(),
            weight,
        }
    }
}

impl Node for WeightedNode {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn weight(&self) -> u32 {
        self.weight
    }
}

impl PartialEq for WeightedNode {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for WeightedNode {}

impl PartialOrd for WeightedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity.cmp(&other.identity)
    }
}

impl Hash for WeightedNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for WeightedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity)
    }
}

/// Parses `identity:weight`, e.g. `node_01:10`.
impl FromStr for WeightedNode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| Error::NodeFormat {
            input: s.to_string(),
            reason,
        };

        let (identity, weight) = s
            .trim()
            .rsplit_once(':')
            .ok_or_else(|| malformed("expected identity:weight"))?;
        if identity.is_empty() {
            return Err(malformed("identity must not be empty"));
        }
        let weight = weight
            .parse()
            .map_err(|_| malformed("weight must be a non-negative 32-bit integer"))?;

        Ok(Self::new(identity, weight))
    }
}
