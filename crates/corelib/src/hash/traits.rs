//! Core hash trait definitions.

/// A deterministic `bytes -> u64` function.
///
/// Implementations must return the same code for the same input. They may keep
/// internal state (behind interior mutability) since the ring never calls them
/// concurrently during a single partitioning.
pub trait HashAlgorithm: Send + Sync {
    /// Hashes `bytes` to a 64-bit code.
    fn hash(&self, bytes: &[u8]) -> u64;

    /// Returns the name of this algorithm.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> HashAlgorithm for F
where
    F: Fn(&[u8]) -> u64 + Send + Sync,
{
    fn hash(&self, bytes: &[u8]) -> u64 {
        self(bytes)
    }
}
