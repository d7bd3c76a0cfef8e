// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "confdc", about = "Inspect confd's on-disk scratch area")]
pub struct Cli {
    /// Root of the scratch area (defaults to /var/lib/confd).
    #[arg(long = "scratch-root", default_value = "/var/lib/confd")]
    pub scratch_root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print which generation is live and which, if any, is being built.
    Status,
    /// List every entity with a node in a generation's dependency graph.
    List {
        /// Defaults to the live generation.
        #[arg(long)]
        generation: Option<u64>,
    },
    /// Print the staged action files for one entity.
    Show {
        entity: String,
        #[arg(long)]
        generation: Option<u64>,
    },
}
