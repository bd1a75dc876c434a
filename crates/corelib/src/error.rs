//! Error types for the core library.

use thiserror::Error;

use crate::range::HashRangeBoundary;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// All of them are precondition violations reported synchronously at the
/// offending call; none leave a partially built ring behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A boundary pair that does not form a valid range.
    #[error("invalid range from {from} to {to}: {reason}")]
    InvalidRange {
        from: HashRangeBoundary,
        to: HashRangeBoundary,
        reason: &'static str,
    },

    /// A ring or partitioning was requested without any node.
    #[error("node set must not be empty")]
    EmptyNodeSet,

    /// Memory lookup cannot address a ring of this size.
    #[error("ring of {slots} slots is too large for memory lookup (limit is {limit}); consider reducing the number of slots")]
    RingTooLarge { slots: u128, limit: u128 },

    /// A raw hash code was not reduced to the ring size before lookup.
    #[error("hash code {hash_code} exceeds the number of slots ({slots}); reduce it with RingConfiguration::constrain first")]
    OutOfRange { hash_code: u64, slots: u128 },

    /// Every node has weight zero.
    #[error("total node weight must be greater than zero")]
    ZeroTotalWeight,

    /// Text that does not follow the range notation.
    #[error("malformed range {input:?}: {reason}")]
    RangeFormat { input: String, reason: &'static str },

    /// Text that does not follow the `identity:weight` node notation.
    #[error("malformed node {input:?}: {reason}")]
    NodeFormat { input: String, reason: &'static str },

    /// Ring configuration that cannot describe any slot.
    #[error("invalid ring configuration: {0}")]
    InvalidConfiguration(String),
}
