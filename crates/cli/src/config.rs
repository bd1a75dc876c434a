//! Command line configuration.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use ring_core::{HashRing, HashRingBuilder, RingConfiguration, WeightedNode, XxHash64};
use tracing::debug;

use crate::commands::{Command, CommandResult};

/// How the ring is split between nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PartitioningKind {
    /// Hashed virtual nodes, `weight` per node.
    #[default]
    ConsistentHashing,
    /// Deterministic proportional slices.
    PingPong,
}

/// How hash codes are resolved to segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LookupKind {
    #[default]
    BinarySearch,
    /// Direct-mapped table; needs `--size`.
    Memory,
}

/// Inspect a weighted consistent-hashing ring.
#[derive(Debug, Parser)]
#[command(name = "ringctl", version)]
pub struct CliConfig {
    /// Number of slots on the ring. Defaults to the full 64-bit space.
    #[arg(long, global = true)]
    pub size: Option<u64>,

    #[arg(long, value_enum, default_value_t = PartitioningKind::default(), global = true)]
    pub partitioning: PartitioningKind,

    #[arg(long, value_enum, default_value_t = LookupKind::default(), global = true)]
    pub lookup: LookupKind,

    /// Seed of the XxHash64 function used for virtual nodes and keys.
    #[arg(long, default_value_t = 0, global = true)]
    pub seed: u64,

    /// Ring member as `identity:weight`. Repeat for every node.
    #[arg(long = "node", value_name = "ID:WEIGHT", global = true)]
    pub nodes: Vec<WeightedNode>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Builds the ring, runs the command and prints its result.
    pub fn run(self) -> Result<()> {
        let result = self.execute()?;
        println!("{result}");
        Ok(())
    }

    pub fn execute(&self) -> Result<CommandResult> {
        let ring = self.build_ring()?;
        self.command.execute(&ring, &self.hasher())
    }

    pub fn ring_configuration(&self) -> Result<RingConfiguration> {
        match self.size {
            Some(size) => RingConfiguration::with_size(size).context("invalid --size"),
            None => Ok(RingConfiguration::default()),
        }
    }

    pub fn hasher(&self) -> XxHash64 {
        XxHash64::new(self.seed)
    }

    pub fn build_ring(&self) -> Result<HashRing<WeightedNode>> {
        if self.nodes.is_empty() {
            bail!("at least one --node ID:WEIGHT is required");
        }

        let config = self.ring_configuration()?;
        let builder = HashRingBuilder::new(config);
        let partitioned = match self.partitioning {
            PartitioningKind::ConsistentHashing => builder.consistent_hashing(self.hasher()),
            PartitioningKind::PingPong => builder.ping_pong(),
        };
        let builder = match self.lookup {
            LookupKind::BinarySearch => partitioned.binary_search(),
            LookupKind::Memory => partitioned.memory_lookup(),
        };

        debug!(
            nodes = self.nodes.len(),
            partitioning = ?self.partitioning,
            lookup = ?self.lookup,
            "building ring"
        );
        builder.build(&self.nodes).context("failed to build ring")
    }
}
