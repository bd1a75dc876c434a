//! CLI tool for inspecting weighted consistent-hash rings.
//!
//! Provides commands for:
//! - Reporting the share of every node
//! - Listing segments in ring order
//! - Resolving keys to their owner and replica nodes

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::{CliConfig, LookupKind, PartitioningKind};
