//! Ring configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::range::HashRange;

/// Describes the integer space `[0, max_slot]` the ring is laid over.
///
/// The modulus of the ring is `max_slot + 1`. The default configuration spans
/// the whole `u64` space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RingConfiguration {
    max_slot: u64,
}

impl RingConfiguration {
    /// Creates a configuration whose largest valid hash code is `max_slot`.
    pub const fn new(max_slot: u64) -> Self {
        Self { max_slot }
    }

    /// Creates a constrained ring of exactly `size` slots.
    pub fn with_size(size: u64) -> Result<Self> {
        match size.checked_sub(1) {
            Some(max_slot) => Ok(Self::new(max_slot)),
            None => Err(Error::InvalidConfiguration(
                "ring must have at least one slot".to_string(),
            )),
        }
    }

    /// The largest valid hash code.
    #[inline]
    pub fn max_slot(&self) -> u64 {
        self.max_slot
    }

    /// Number of slots on the ring (`2^64` for the default configuration).
    #[inline]
    pub fn number_of_slots(&self) -> u128 {
        u128::from(self.max_slot) + 1
    }

    /// Fraction of the ring covered by `range`.
    pub fn share(&self, range: &HashRange) -> f64 {
        range.size() as f64 / self.number_of_slots() as f64
    }

    /// Reduces an arbitrary hash code into `[0, max_slot]`.
    #[inline]
    pub fn constrain(&self, hash_code: u64) -> u64 {
        if hash_code > self.max_slot {
            // max_slot < u64::MAX here, so the modulus cannot overflow.
            hash_code % (self.max_slot + 1)
        } else {
            hash_code
        }
    }
}

impl Default for RingConfiguration {
    fn default() -> Self {
        Self::new(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spans_u64() {
        let config = RingConfiguration::default();
        assert_eq!(config.max_slot(), u64::MAX);
        assert_eq!(config.number_of_slots(), 1u128 << 64);
        assert_eq!(config.constrain(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_with_size() {
        let config = RingConfiguration::with_size(128_000).unwrap();
        assert_eq!(config.max_slot(), 127_999);
        assert_eq!(config.number_of_slots(), 128_000);

        assert!(matches!(
            RingConfiguration::with_size(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_constrain() {
        let config = RingConfiguration::with_size(10).unwrap();
        assert_eq!(config.constrain(9), 9);
        assert_eq!(config.constrain(10), 0);
        assert_eq!(config.constrain(25), 5);

        let single = RingConfiguration::with_size(1).unwrap();
        assert_eq!(single.constrain(u64::MAX), 0);
    }

    #[test]
    fn test_share() {
        let config = RingConfiguration::with_size(100).unwrap();
        let range: HashRange = "[0, 24]".parse().unwrap();
        assert!((config.share(&range) - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.share(&HashRange::full_coverage(&config)), 1.0);
    }
}
