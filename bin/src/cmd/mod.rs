//! CLI subcommand modules.
//!
//! This module contains the implementations for all alphaic CLI subcommands.

pub(crate) mod demo;
pub(crate) mod ic;

use clap::ValueEnum;

/// Output format shared by the subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable report
    Text,
    /// Single JSON object on stdout
    Json,
}
