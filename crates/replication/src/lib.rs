//! Replica placement on top of the hash ring.
//!
//! A replication strategy decides how many copies of a key exist and which
//! nodes hold them. Placement is a pure function of the ring and the key's
//! hash code, so every client that shares the ring agrees on it.

pub mod strategy;

pub use strategy::{ReplicationStrategy, SimpleStrategy};
