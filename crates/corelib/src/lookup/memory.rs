//! Direct-mapped lookup table.
//!
//! # Performance
//!
//! One table entry per slot, each a 32-bit segment index. A ring of
//! `128_000` slots costs 500 KiB; the full 64-bit ring is not addressable and
//! is rejected with [`Error::RingTooLarge`].

use tracing::debug;

use crate::config::RingConfiguration;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::segment::{ConnectedRingSegments, RingSegment, SegmentRef};

use super::traits::{LookupStrategy, LookupStrategyFactory};

/// Largest ring memory lookup accepts.
pub const MAX_SLOTS: u128 = i32::MAX as u128;

/// Marks slots no segment covers.
const UNOWNED: u32 = u32::MAX;

/// O(1) lookup, O(ring size) memory.
#[derive(Clone, Debug)]
pub struct MemoryLookup<N> {
    segments: ConnectedRingSegments<N>,
    table: Vec<u32>,
}

impl<N: Node> MemoryLookup<N> {
    pub fn new(config: &RingConfiguration, segments: Vec<RingSegment<N>>) -> Result<Self> {
        let slots = config.number_of_slots();
        if slots > MAX_SLOTS {
            return Err(Error::RingTooLarge {
                slots,
                limit: MAX_SLOTS,
            });
        }

        let segments = ConnectedRingSegments::new(segments)?;
        let mut table = vec![UNOWNED; slots as usize];

        for (index, connected) in segments.as_slice().iter().enumerate() {
            let range = connected.segment().range;
            let last = range.to().value();
            if u128::from(last) >= slots {
                return Err(Error::OutOfRange {
                    hash_code: last,
                    slots,
                });
            }

            // Bounded by MAX_SLOTS: ranges are disjoint and each holds a slot.
            let index = index as u32;
            for slot in range.slots() {
                table[slot as usize] = index;
            }
        }

        debug!(
            segments = segments.len(),
            slots = %slots,
            "built memory lookup"
        );

        Ok(Self { segments, table })
    }

    /// Number of slots the table maps.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<N: Node> LookupStrategy<N> for MemoryLookup<N> {
    fn segments(&self) -> &ConnectedRingSegments<N> {
        &self.segments
    }

    fn lookup_segment(&self, hash_code: u64) -> Result<SegmentRef<'_, N>> {
        let index = usize::try_from(hash_code)
            .ok()
            .and_then(|slot| self.table.get(slot))
            .ok_or(Error::OutOfRange {
                hash_code,
                slots: self.table.len() as u128,
            })?;

        Ok(self
            .segments
            .get(*index as usize)
            .unwrap_or_else(|| self.segments.head()))
    }

    fn name(&self) -> &'static str {
        "MemoryLookup"
    }
}

/// Creates [`MemoryLookup`] tables; requires a constrained ring.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryLookupFactory;

impl<N: Node> LookupStrategyFactory<N> for MemoryLookupFactory {
    fn create(
        &self,
        config: &RingConfiguration,
        segments: Vec<RingSegment<N>>,
    ) -> Result<Box<dyn LookupStrategy<N>>> {
        Ok(Box::new(MemoryLookup::new(config, segments)?))
    }

    fn name(&self) -> &'static str {
        "MemoryLookup"
    }
}
