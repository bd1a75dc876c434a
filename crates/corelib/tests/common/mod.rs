//! Shared helpers for the integration tests.

#![allow(dead_code)]

use ring_core::{HashRing, Node, RingConfiguration, WeightedNode};

/// Parses a whitespace separated list like `"A:1 B:2"`.
pub fn nodes(text: &str) -> Vec<WeightedNode> {
    text.split_whitespace()
        .map(|entry| entry.parse().expect("valid node"))
        .collect()
}

/// `count` nodes named `node_00`, `node_01`, ... all of `weight`.
pub fn numbered_nodes(count: usize, weight: u32) -> Vec<WeightedNode> {
    (0..count)
        .map(|i| WeightedNode::new(format!("node_{i:02}"), weight))
        .collect()
}

/// Asserts the ring's segments are disjoint and cover every slot exactly once.
pub fn assert_full_coverage<N: Node>(ring: &HashRing<N>) {
    let config: &RingConfiguration = ring.config();
    let segments: Vec<_> = ring.segments().iter().collect();

    for pair in segments.windows(2) {
        let overlap = pair[0].range().intersect(pair[1].range());
        assert!(
            overlap.is_none(),
            "segments {} and {} overlap",
            pair[0],
            pair[1]
        );
    }

    let covered: u128 = segments.iter().map(|s| s.range().size()).sum();
    assert_eq!(covered, config.number_of_slots(), "ring not fully covered");
}

/// Identities of the ring's segments in ring order.
pub fn segment_owners<N: Node>(ring: &HashRing<N>) -> Vec<String> {
    ring.segments()
        .iter()
        .map(|s| s.node().identity().to_string())
        .collect()
}
