//! Human readable range notation: `[0, 100]`, `(100, 200]`, `[5, 9)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::RingConfiguration;
use crate::error::Error;

use super::boundary::HashRangeBoundary;
use super::range::HashRange;

impl fmt::Display for HashRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.from().is_inclusive() { '[' } else { '(' };
        let close = if self.to().is_inclusive() { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.from().value(), self.to().value())
    }
}

impl FromStr for HashRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| Error::RangeFormat {
            input: s.to_string(),
            reason,
        };

        let text = s.trim();
        let mut chars = text.chars();
        let from_inclusive = match chars.next() {
            Some('[') => true,
            Some('(') => false,
            _ => return Err(malformed("expected '[' or '('")),
        };
        let to_inclusive = match chars.next_back() {
            Some(']') => true,
            Some(')') => false,
            _ => return Err(malformed("expected ']' or ')'")),
        };

        let (from, to) = chars
            .as_str()
            .split_once(',')
            .ok_or_else(|| malformed("expected two bounds separated by ','"))?;
        let from: u64 = from
            .trim()
            .parse()
            .map_err(|_| malformed("lower bound is not an unsigned integer"))?;
        let to: u64 = to
            .trim()
            .parse()
            .map_err(|_| malformed("upper bound is not an unsigned integer"))?;

        HashRange::new(
            HashRangeBoundary::new(from, from_inclusive),
            HashRangeBoundary::new(to, to_inclusive),
        )
    }
}

impl HashRange {
    /// Pairs the range with the share of `config` it covers, for reports.
    pub fn with_share<'a>(&'a self, config: &'a RingConfiguration) -> RangeWithShare<'a> {
        RangeWithShare {
            range: self,
            config,
        }
    }
}

/// Display adapter printing a range followed by its ring share.
#[derive(Debug, Clone, Copy)]
pub struct RangeWithShare<'a> {
    range: &'a HashRange,
    config: &'a RingConfiguration,
}

impl fmt::Display for RangeWithShare<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.2}%",
            self.range,
            self.config.share(self.range) * 100.0
        )
    }
}

impl Serialize for HashRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HashRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
