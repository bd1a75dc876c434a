//! Hash ring facade.
//!
//! [`HashRing`] composes a configuration, a partitioning strategy and a
//! lookup strategy factory, and answers ownership queries. Build rings with
//! [`HashRingBuilder`].

mod builder;
#[allow(clippy::module_inception)]
mod ring;
mod summary;

pub use builder::{FinalBuilder, HashRingBuilder, LookupBuilder};
pub use ring::HashRing;
pub use summary::{NodeSummary, RingSummary};
