//! Hash function abstraction for placing virtual nodes on the ring.
//!
//! The ring never hashes keys on its own behalf: callers hash their keys with
//! whatever function they like and hand the resulting `u64` to the ring. A
//! [`HashAlgorithm`] is only consumed by consistent hashing, to position the
//! virtual nodes of every node.

pub mod sip;
pub mod traits;
pub mod xxhash;

pub use sip::SipHash13;
pub use traits::HashAlgorithm;
pub use xxhash::{XxHash64, Xxh3};
