//! Helpers shared by the unit tests.

use std::collections::HashMap;

use crate::config::RingConfiguration;
use crate::node::{Node, WeightedNode};
use crate::segment::RingSegment;

/// Parses a whitespace separated list like `"A:1 B:2"`.
pub(crate) fn nodes(text: &str) -> Vec<WeightedNode> {
    text.split_whitespace()
        .map(|entry| entry.parse().unwrap())
        .collect()
}

/// Share of the ring and segment count per node identity.
pub(crate) fn summarize(
    config: &RingConfiguration,
    segments: &[RingSegment<WeightedNode>],
) -> HashMap<String, (f64, usize)> {
    let mut summary: HashMap<String, (f64, usize)> = HashMap::new();
    for segment in segments {
        let entry = summary
            .entry(segment.node.identity().to_string())
            .or_default();
        entry.0 += config.share(&segment.range);
        entry.1 += 1;
    }
    summary
}

/// Asserts the segments are pairwise disjoint and cover every slot.
pub(crate) fn assert_whole_ring_coverage<N: Node>(
    config: &RingConfiguration,
    segments: &[RingSegment<N>],
) {
    let mut sorted: Vec<&RingSegment<N>> = segments.iter().collect();
    sorted.sort_by(|a, b| a.ring_order(b));

    for pair in sorted.windows(2) {
        let overlap = pair[0].range.intersect(&pair[1].range);
        assert!(
            overlap.map_or(true, |r| r.size() == 0),
            "{} overlaps {}",
            pair[0],
            pair[1]
        );
    }

    let covered: u128 = segments.iter().map(|s| s.range.size()).sum();
    assert_eq!(covered, config.number_of_slots(), "ring not fully covered");
}
