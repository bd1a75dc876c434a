//! xxHash based hash algorithms.

use xxhash_rust::xxh3::xxh3_64_with_seed;
use xxhash_rust::xxh64::xxh64;

use crate::hash::traits::HashAlgorithm;

/// Seeded XXH64.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XxHash64 {
    seed: u64,
}

impl XxHash64 {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl HashAlgorithm for XxHash64 {
    fn hash(&self, bytes: &[u8]) -> u64 {
        xxh64(bytes, self.seed)
    }

    fn name(&self) -> &'static str {
        "xxh64"
    }
}

/// Seeded XXH3 (64-bit output).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh3 {
    seed: u64,
}

impl Xxh3 {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl HashAlgorithm for Xxh3 {
    fn hash(&self, bytes: &[u8]) -> u64 {
        xxh3_64_with_seed(bytes, self.seed)
    }

    fn name(&self) -> &'static str {
        "xxh3"
    }
}
