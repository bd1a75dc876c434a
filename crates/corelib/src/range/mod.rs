//! Hash range arithmetic over the ring `[0, max_slot]`.
//!
//! Ranges carry open or closed endpoints so adjacent ownership intervals can
//! share a boundary value without overlapping: `(a, b]` followed by `(b, c]`.

mod boundary;
mod format;
#[allow(clippy::module_inception)]
mod range;

pub use boundary::HashRangeBoundary;
pub use format::RangeWithShare;
pub use range::HashRange;
