//! Integration tests for the hash ring facade and its builder.
//!
//! # Test Strategy
//!
//! 1. **Builder combinations**: every partitioning with every lookup
//! 2. **Lookup equivalence**: binary search and memory lookup agree on every slot
//! 3. **Membership changes**: rebuild, determinism, remapped share
//! 4. **Queries**: distinct node walks, segments, custom node types
//! 5. **Errors**: empty node sets, oversized memory tables, zero weights

mod common;

use std::sync::Arc;

use common::{assert_full_coverage, nodes, numbered_nodes, segment_owners};
use ring_core::{
    Error, HashRing, HashRingBuilder, IterationDirection, Node, RingConfiguration, RingSegment,
    WeightedNode, XxHash64, Xxh3,
};

fn consistent_ring(config: RingConfiguration, members: &[WeightedNode]) -> HashRing<WeightedNode> {
    HashRingBuilder::new(config)
        .consistent_hashing(XxHash64::default())
        .binary_search()
        .build(members)
        .expect("ring builds")
}

fn owned_segments(ring: &HashRing<WeightedNode>) -> Vec<RingSegment<WeightedNode>> {
    ring.segments().iter().map(|s| s.segment().clone()).collect()
}

// ============================================================================
// Builder Combinations
// ============================================================================

#[test]
fn test_consistent_hashing_binary_search() {
    let ring = consistent_ring(RingConfiguration::default(), &nodes("A:100 B:200 C:100"));

    assert_full_coverage(&ring);
    let summary = ring.calculate_summary();
    assert_eq!(summary.len(), 3);
    let total: f64 = summary.iter().map(|(_, s)| s.total_share).sum();
    assert!((total - 1.0).abs() < 1e-9, "shares sum to {total}");
}

#[test]
fn test_ping_pong_binary_search() {
    let ring = HashRingBuilder::new(RingConfiguration::default())
        .ping_pong()
        .binary_search()
        .build(&nodes("A:1 B:1 C:2"))
        .unwrap();

    assert_full_coverage(&ring);
    assert_eq!(segment_owners(&ring), ["A", "C", "B"]);
    assert_eq!(ring.calculate_summary().get("C").unwrap().total_share, 0.5);
}

#[test]
fn test_constrained_ring_with_memory_lookup() {
    let config = RingConfiguration::with_size(128_000).unwrap();
    let ring = HashRingBuilder::new(config)
        .consistent_hashing(Xxh3::default())
        .memory_lookup()
        .build(&nodes("A:100 B:100 C:50"))
        .unwrap();

    assert_full_coverage(&ring);
    assert_eq!(ring.lookup().name(), "MemoryLookup");
    // Hash codes beyond the ring are reduced before they reach the table.
    assert!(ring.get_node(u64::MAX).is_ok());
}

#[test]
fn test_ping_pong_memory_lookup() {
    let config = RingConfiguration::with_size(128_000).unwrap();
    let ring = HashRingBuilder::new(config)
        .ping_pong()
        .memory_lookup()
        .build(&nodes("A:1 B:1 C:1 D:1"))
        .unwrap();

    assert_full_coverage(&ring);
    assert_eq!(ring.get_node(0).unwrap().identity(), "A");
    assert_eq!(ring.get_node(127_999).unwrap().identity(), "B");
}

// ============================================================================
// Lookup Equivalence
// ============================================================================

#[test]
fn test_lookups_agree_on_every_slot() {
    let config = RingConfiguration::with_size(128_000).unwrap();
    let members = nodes("A:64 B:128 C:32 D:96");
    let binary = HashRingBuilder::new(config)
        .consistent_hashing(XxHash64::new(3))
        .binary_search()
        .build(&members)
        .unwrap();
    let memory = HashRingBuilder::new(config)
        .consistent_hashing(XxHash64::new(3))
        .memory_lookup()
        .build(&members)
        .unwrap();

    assert_eq!(owned_segments(&binary), owned_segments(&memory));
    for slot in 0..128_000u64 {
        assert_eq!(
            binary.get_segment(slot).unwrap().segment(),
            memory.get_segment(slot).unwrap().segment(),
            "lookups disagree on slot {slot}"
        );
    }
}

#[test]
fn test_every_slot_of_every_segment_resolves_to_it() {
    let config = RingConfiguration::with_size(10_000).unwrap();
    let ring = HashRingBuilder::new(config)
        .consistent_hashing(XxHash64::default())
        .memory_lookup()
        .build(&nodes("A:10 B:20 C:30"))
        .unwrap();

    for segment in ring.segments().iter() {
        for slot in segment.range().slots() {
            assert_eq!(ring.get_segment(slot).unwrap(), segment);
        }
    }
}

// ============================================================================
// Membership Changes
// ============================================================================

#[test]
fn test_rebuild_matches_fresh_build() {
    let config = RingConfiguration::default();
    let original = consistent_ring(config, &nodes("A:50 B:50 C:50"));

    let changed = nodes("A:50 C:50 D:80");
    let rebuilt = original.rebuild(&changed).unwrap();
    let fresh = consistent_ring(config, &changed);

    assert_eq!(owned_segments(&rebuilt), owned_segments(&fresh));
    // The original ring is untouched.
    assert!(original.calculate_summary().get("B").is_some());
    assert!(rebuilt.calculate_summary().get("B").is_none());
}

#[test]
fn test_builds_are_deterministic() {
    let config = RingConfiguration::default();
    let members = numbered_nodes(8, 40);

    let first = consistent_ring(config, &members);
    let second = consistent_ring(config, &members);
    assert_eq!(owned_segments(&first), owned_segments(&second));
}

#[test]
fn test_adding_a_node_only_moves_keys_to_it() {
    let config = RingConfiguration::default();
    let before = consistent_ring(config, &numbered_nodes(5, 100));
    let mut grown = numbered_nodes(5, 100);
    grown.push(WeightedNode::new("newcomer", 100));
    let after = before.rebuild(&grown).unwrap();

    let hasher = XxHash64::new(11);
    let mut moved = 0;
    for key in 0..2_000u32 {
        let key = key.to_le_bytes();
        let old = before.get_node_by(&key, &hasher).unwrap().identity();
        let new = after.get_node_by(&key, &hasher).unwrap().identity();
        if old != new {
            assert_eq!(new, "newcomer", "key moved between existing nodes");
            moved += 1;
        }
    }

    // Roughly a sixth of the keys move to the new node.
    assert!((150..550).contains(&moved), "{moved} keys moved");
}

#[test]
fn test_predefined_placement_halves_ring() {
    let config = RingConfiguration::default();
    let max_slot = config.max_slot();
    let by_angle = move |bytes: &[u8]| -> u64 {
        if bytes.starts_with(b"A") {
            max_slot / 2
        } else {
            max_slot
        }
    };

    let ring = HashRingBuilder::new(config)
        .consistent_hashing(by_angle)
        .binary_search()
        .build(&nodes("A:1 B:1"))
        .unwrap();

    assert_eq!(ring.to_string(), "A Share=50.00% Segments=1\nB Share=50.00% Segments=1\n");
}

#[test]
fn test_weight_proportionality_with_real_hash() {
    let ring = consistent_ring(RingConfiguration::default(), &nodes("A:1000 B:1000 C:2000"));
    let summary = ring.calculate_summary();

    for (identity, expected) in [("A", 0.25), ("B", 0.25), ("C", 0.5)] {
        let node = summary.get(identity).unwrap();
        assert!(
            (node.total_share - expected).abs() < 0.05,
            "{identity} owns {}",
            node.total_share
        );
    }
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_get_nodes_yields_distinct_nodes() {
    let ring = consistent_ring(RingConfiguration::default(), &numbered_nodes(6, 20));

    for hash_code in [0, 42, u64::MAX / 3, u64::MAX] {
        let owner = ring.get_node(hash_code).unwrap().identity();
        let replicas: Vec<&str> = ring
            .get_nodes(hash_code, 3, IterationDirection::Clockwise)
            .unwrap()
            .map(|n| n.identity())
            .collect();

        assert_eq!(replicas.len(), 3);
        assert_eq!(replicas[0], owner);
        assert!(replicas[1] != replicas[0] && replicas[2] != replicas[1] && replicas[2] != replicas[0]);
    }

    let everyone = ring
        .get_nodes(7, 100, IterationDirection::Counterclockwise)
        .unwrap()
        .count();
    assert_eq!(everyone, 6);
}

#[test]
fn test_segment_walks_cover_ring() {
    let ring = consistent_ring(RingConfiguration::default(), &nodes("A:5 B:5"));
    let start = ring.get_segment(12345).unwrap();

    let clockwise: Vec<_> = start.iterate(IterationDirection::Clockwise).collect();
    let counterclockwise: Vec<_> = start.iterate(IterationDirection::Counterclockwise).collect();

    assert_eq!(clockwise.len(), ring.segments().len());
    assert_eq!(counterclockwise.len(), ring.segments().len());
    assert_eq!(clockwise[1], start.next());
    assert_eq!(counterclockwise[1], start.previous());
    assert_eq!(ring.head().range().from().value(), 0);
}

#[test]
fn test_shared_nodes() {
    let members: Vec<Arc<WeightedNode>> = nodes("A:10 B:10").into_iter().map(Arc::new).collect();
    let ring = HashRingBuilder::new(RingConfiguration::default())
        .consistent_hashing(XxHash64::default())
        .binary_search()
        .build(&members)
        .unwrap();

    // Segments share the caller's allocations instead of copying nodes.
    let owner = ring.get_node(99).unwrap();
    assert!(members.iter().any(|m| Arc::ptr_eq(m, owner)));
    assert_eq!(ring.calculate_summary().len(), 2);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_node_set() {
    let result = HashRingBuilder::<WeightedNode>::new(RingConfiguration::default())
        .ping_pong()
        .binary_search()
        .build(&[]);
    assert_eq!(result.unwrap_err(), Error::EmptyNodeSet);
}

#[test]
fn test_memory_lookup_requires_constrained_ring() {
    let result = HashRingBuilder::new(RingConfiguration::default())
        .consistent_hashing(XxHash64::default())
        .memory_lookup()
        .build(&nodes("A:1 B:1"));
    assert!(matches!(result, Err(Error::RingTooLarge { .. })));
}

#[test]
fn test_all_zero_weights() {
    for builder in [
        HashRingBuilder::new(RingConfiguration::default())
            .ping_pong()
            .binary_search(),
        HashRingBuilder::new(RingConfiguration::default())
            .consistent_hashing(XxHash64::default())
            .binary_search(),
    ] {
        assert_eq!(
            builder.build(&nodes("A:0 B:0")).unwrap_err(),
            Error::ZeroTotalWeight
        );
    }
}
