//! Partitioning strategies.
//!
//! A partitioning strategy turns a weighted node set into segments that cover
//! the ring exactly once. The ring is always partitioned from scratch; there
//! is no incremental update.
//!
//! - [`ConsistentHashing`]: `weight` hashed virtual nodes per node
//! - [`PingPong`]: deterministic proportional slices, no hashing

pub mod consistent_hashing;
pub mod ping_pong;
pub mod traits;

pub use consistent_hashing::ConsistentHashing;
pub use ping_pong::PingPong;
pub use traits::PartitioningStrategy;
