//! `ringctl` subcommands.

use std::fmt;

use anyhow::{Context, Result};
use clap::Subcommand;
use replication::{ReplicationStrategy, SimpleStrategy};
use ring_core::{HashAlgorithm, HashRing, IterationDirection, Node, WeightedNode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Share and segment count per node.
    Report {
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Every segment in ring order with its share of the ring.
    Segments,

    /// Resolve a key to its owning node, or to several distinct nodes.
    Lookup {
        key: String,

        /// Number of distinct nodes to return, owner first.
        #[arg(long, short = 'r')]
        replicas: Option<usize>,

        /// Walk the ring towards lower hash codes.
        #[arg(long)]
        counterclockwise: bool,
    },
}

/// Output of a command, rendered by its `Display` impl.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CommandResult {
    Report(String),
    Segments(Vec<String>),
    Lookup {
        key: String,
        hash_code: u64,
        nodes: Vec<String>,
    },
}

impl Command {
    pub fn execute<H: HashAlgorithm>(
        &self,
        ring: &HashRing<WeightedNode>,
        hasher: &H,
    ) -> Result<CommandResult> {
        match self {
            Command::Report { json: false } => Ok(CommandResult::Report(ring.to_string())),
            Command::Report { json: true } => {
                let json = serde_json::to_string_pretty(ring.calculate_summary())
                    .context("failed to serialize summary")?;
                Ok(CommandResult::Report(json))
            }
            Command::Segments => {
                let config = ring.config();
                let lines = ring
                    .segments()
                    .iter()
                    .map(|s| format!("{} {}", s.node().identity(), s.range().with_share(config)))
                    .collect();
                Ok(CommandResult::Segments(lines))
            }
            Command::Lookup {
                key,
                replicas,
                counterclockwise,
            } => {
                let hash_code = hasher.hash(key.as_bytes());
                let direction = if *counterclockwise {
                    IterationDirection::Counterclockwise
                } else {
                    IterationDirection::Clockwise
                };
                let strategy = SimpleStrategy::new(replicas.unwrap_or(1)).with_direction(direction);
                let nodes = strategy
                    .replicas(ring, hash_code)?
                    .into_iter()
                    .map(|n| n.identity().to_string())
                    .collect();

                Ok(CommandResult::Lookup {
                    key: key.clone(),
                    hash_code,
                    nodes,
                })
            }
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Report(report) => f.write_str(report.trim_end()),
            CommandResult::Segments(lines) => f.write_str(&lines.join("\n")),
            CommandResult::Lookup {
                key,
                hash_code,
                nodes,
            } => write!(f, "{key} ({hash_code}) -> {}", nodes.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_core::{HashRingBuilder, RingConfiguration, XxHash64};

    fn ring() -> HashRing<WeightedNode> {
        let nodes: Vec<WeightedNode> = vec![
            "a:1".parse().unwrap(),
            "b:1".parse().unwrap(),
            "c:2".parse().unwrap(),
        ];
        HashRingBuilder::new(RingConfiguration::with_size(100).unwrap())
            .ping_pong()
            .binary_search()
            .build(&nodes)
            .unwrap()
    }

    #[test]
    fn test_report() {
        let result = Command::Report { json: false }
            .execute(&ring(), &XxHash64::default())
            .unwrap();
        assert_eq!(
            result.to_string(),
            "a Share=26.00% Segments=1\nb Share=24.00% Segments=1\nc Share=50.00% Segments=1"
        );
    }

    #[test]
    fn test_report_json() {
        let result = Command::Report { json: true }
            .execute(&ring(), &XxHash64::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&result.to_string()).unwrap();
        assert_eq!(value["c"]["total_share"], 0.5);
        assert_eq!(value["a"]["segment_count"], 1);
    }

    #[test]
    fn test_segments() {
        let result = Command::Segments.execute(&ring(), &XxHash64::default()).unwrap();
        assert_eq!(
            result,
            CommandResult::Segments(vec![
                "a [0, 25] 26.00%".to_string(),
                "c (25, 75] 50.00%".to_string(),
                "b (75, 99] 24.00%".to_string(),
            ])
        );
    }

    #[test]
    fn test_lookup() {
        let constant = |_: &[u8]| 30u64;
        let lookup = |replicas, counterclockwise| Command::Lookup {
            key: "user:1".to_string(),
            replicas,
            counterclockwise,
        };

        let owner = lookup(None, false).execute(&ring(), &constant).unwrap();
        assert_eq!(owner.to_string(), "user:1 (30) -> c");

        let clockwise = lookup(Some(2), false).execute(&ring(), &constant).unwrap();
        assert_eq!(clockwise.to_string(), "user:1 (30) -> c, b");

        let counterclockwise = lookup(Some(3), true).execute(&ring(), &constant).unwrap();
        assert_eq!(counterclockwise.to_string(), "user:1 (30) -> c, a, b");
    }
}
