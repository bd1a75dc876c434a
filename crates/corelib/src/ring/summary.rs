//! Per-node share summary and the ring report.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::Serializer;
use serde::Serialize;

use crate::config::RingConfiguration;
use crate::node::Node;
use crate::segment::ConnectedRingSegments;

/// What one node owns of the ring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NodeSummary {
    /// Fraction of the ring, in `[0, 1]`.
    pub total_share: f64,
    pub segment_count: usize,
}

/// Shares of every node with at least one segment, ordered by identity.
#[derive(Clone, Debug)]
pub struct RingSummary<N> {
    entries: Vec<(N, NodeSummary)>,
}

impl<N: Node> RingSummary<N> {
    pub(crate) fn calculate(config: &RingConfiguration, segments: &ConnectedRingSegments<N>) -> Self {
        let mut grouped: BTreeMap<&str, (&N, u128, usize)> = BTreeMap::new();
        for segment in segments.iter() {
            let node = segment.node();
            let entry = grouped.entry(node.identity()).or_insert((node, 0, 0));
            entry.1 += segment.range().size();
            entry.2 += 1;
        }

        let slots = config.number_of_slots() as f64;
        let entries = grouped
            .into_values()
            .map(|(node, size, segment_count)| {
                let summary = NodeSummary {
                    total_share: size as f64 / slots,
                    segment_count,
                };
                (node.clone(), summary)
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, identity: &str) -> Option<&NodeSummary> {
        self.entries
            .binary_search_by(|(node, _)| node.identity().cmp(identity))
            .ok()
            .map(|index| &self.entries[index].1)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&N, &NodeSummary)> + '_ {
        self.entries.iter().map(|(node, summary)| (node, summary))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line per node: `A Share=33.33% Segments=12`.
impl<N: Node> fmt::Display for RingSummary<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, summary) in &self.entries {
            writeln!(
                f,
                "{} Share={:.2}% Segments={}",
                node.identity(),
                summary.total_share * 100.0,
                summary.segment_count
            )?;
        }
        Ok(())
    }
}

/// Serializes as a map from identity to [`NodeSummary`].
impl<N: Node> Serialize for RingSummary<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(node, summary)| (node.identity(), summary)))
    }
}
