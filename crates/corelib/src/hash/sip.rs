//! SipHash-1-3 hash algorithm.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::hash::traits::HashAlgorithm;

/// Keyed SipHash-1-3, for rings whose node placement must not be predictable
/// without the key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SipHash13 {
    key0: u64,
    key1: u64,
}

impl SipHash13 {
    pub fn new_with_keys(key0: u64, key1: u64) -> Self {
        Self { key0, key1 }
    }
}

impl HashAlgorithm for SipHash13 {
    fn hash(&self, bytes: &[u8]) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(self.key0, self.key1);
        hasher.write(bytes);
        hasher.finish()
    }

    fn name(&self) -> &'static str {
        "siphash13"
    }
}
