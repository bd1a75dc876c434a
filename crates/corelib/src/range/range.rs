//! Modular hash ranges.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::config::RingConfiguration;
use crate::error::{Error, Result};

use super::boundary::HashRangeBoundary;

/// A contiguous interval of slots `from ..= to` with open or closed ends.
///
/// # Invariants
///
/// - `from.value <= to.value`
/// - if `from.value == to.value`, both ends are inclusive (a single slot)
///
/// Ranges never wrap; an interval crossing `max_slot -> 0` is represented as
/// two ranges, see [`HashRange::loop_around`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashRange {
    from: HashRangeBoundary,
    to: HashRangeBoundary,
}

impl HashRange {
    pub fn new(from: HashRangeBoundary, to: HashRangeBoundary) -> Result<Self> {
        if from.value() > to.value() {
            return Err(Error::InvalidRange {
                from,
                to,
                reason: "lower bound exceeds upper bound; use loop_around to wrap the ring",
            });
        }

        if from.value() == to.value() && !(from.is_inclusive() && to.is_inclusive()) {
            return Err(Error::InvalidRange {
                from,
                to,
                reason: "a single-slot range must be inclusive on both ends",
            });
        }

        Ok(Self { from, to })
    }

    /// `[0, max_slot]`.
    pub fn full_coverage(config: &RingConfiguration) -> Self {
        Self {
            from: HashRangeBoundary::inclusive(0),
            to: HashRangeBoundary::inclusive(config.max_slot()),
        }
    }

    /// Splits an interval that wraps past `max_slot` into `[from, max_slot]`
    /// and `[0, to]`.
    ///
    /// Fails unless `from` lies after `to` on the ring, that is unless the
    /// pair would be an inverted range if taken literally.
    pub fn loop_around(
        config: &RingConfiguration,
        from: HashRangeBoundary,
        to: HashRangeBoundary,
    ) -> Result<(Self, Self)> {
        let wraps = from.value() > to.value() || (from.value() == to.value() && !from.is_inclusive());
        if !wraps {
            return Err(Error::InvalidRange {
                from,
                to,
                reason: "loop around requires the lower bound to lie after the upper bound",
            });
        }

        let upper = Self::new(from, HashRangeBoundary::inclusive(config.max_slot()))?;
        let lower = Self::new(HashRangeBoundary::inclusive(0), to)?;
        Ok((upper, lower))
    }

    #[inline]
    pub fn from(&self) -> HashRangeBoundary {
        self.from
    }

    #[inline]
    pub fn to(&self) -> HashRangeBoundary {
        self.to
    }

    #[inline]
    pub fn contains(&self, location: u64) -> bool {
        self.from.admits_from_below(location) && self.to.admits_from_above(location)
    }

    /// True if the whole range lies before `location`.
    #[inline]
    pub fn is_below(&self, location: u64) -> bool {
        !self.to.admits_from_above(location)
    }

    /// Exact number of slots in the range.
    pub fn size(&self) -> u128 {
        let delta = u128::from(self.to.value() - self.from.value());
        match (self.from.is_inclusive(), self.to.is_inclusive()) {
            (true, true) => delta + 1,
            // Validation guarantees delta >= 1 when either end is open.
            (false, false) => delta - 1,
            _ => delta,
        }
    }

    /// The overlap of two ranges, if it forms a valid range.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let from = match self.from.cmp_as_lower(&other.from) {
            Ordering::Less => other.from,
            _ => self.from,
        };
        let to = match self.to.cmp_as_upper(&other.to) {
            Ordering::Greater => other.to,
            _ => self.to,
        };

        Self::new(from, to).ok()
    }

    /// Every slot contained in the range, in increasing order.
    pub fn slots(&self) -> RangeInclusive<u64> {
        // Validation rules out overflow: an open lower bound sits strictly
        // below the upper value and an open upper bound strictly above the
        // lower value.
        let first = if self.from.is_inclusive() {
            self.from.value()
        } else {
            self.from.value() + 1
        };
        let last = if self.to.is_inclusive() {
            self.to.value()
        } else {
            self.to.value() - 1
        };
        first..=last
    }
}

/// Ranges order by where they end on the ring, then by where they start.
impl Ord for HashRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to
            .cmp_as_upper(&other.to)
            .then_with(|| self.from.cmp_as_lower(&other.from))
    }
}

impl PartialOrd for HashRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
