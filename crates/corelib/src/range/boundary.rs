//! Range endpoints.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One endpoint of a [`HashRange`](super::HashRange).
///
/// A boundary has no total order of its own: whether `inclusive(5)` sorts
/// before or after `exclusive(5)` depends on the role the boundary plays.
/// As a lower bound an inclusive endpoint starts earlier; as an upper bound it
/// ends later. Use [`cmp_as_lower`](Self::cmp_as_lower) and
/// [`cmp_as_upper`](Self::cmp_as_upper) accordingly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashRangeBoundary {
    value: u64,
    inclusive: bool,
}

impl HashRangeBoundary {
    pub const fn new(value: u64, inclusive: bool) -> Self {
        Self { value, inclusive }
    }

    /// Boundary that contains its own value.
    pub const fn inclusive(value: u64) -> Self {
        Self::new(value, true)
    }

    /// Boundary that stops just short of its value.
    pub const fn exclusive(value: u64) -> Self {
        Self::new(value, false)
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    /// Orders two boundaries used as lower bounds.
    pub fn cmp_as_lower(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| other.inclusive.cmp(&self.inclusive))
    }

    /// Orders two boundaries used as upper bounds.
    pub fn cmp_as_upper(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.inclusive.cmp(&other.inclusive))
    }

    /// True if `location` lies on or after this boundary used as a lower bound.
    #[inline]
    pub fn admits_from_below(&self, location: u64) -> bool {
        location > self.value || (self.inclusive && location == self.value)
    }

    /// True if `location` lies on or before this boundary used as an upper bound.
    #[inline]
    pub fn admits_from_above(&self, location: u64) -> bool {
        location < self.value || (self.inclusive && location == self.value)
    }
}

impl fmt::Display for HashRangeBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.inclusive { "inclusive" } else { "exclusive" };
        write!(f, "{} ({})", self.value, kind)
    }
}
