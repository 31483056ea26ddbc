// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Builds real directory trees from file-structure sketches in documents
#[derive(Parser)]
#[command(name = "treeframe")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TREEFRAME_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a document and build its tree on disk
    Build(BuildArgs),
    /// Preview what a document describes without touching the filesystem
    Scan(ScanArgs),
}

#[derive(clap::Args)]
pub struct BuildArgs {
    /// Document to build from (`-` reads stdin)
    #[arg(value_name = "DOC")]
    pub doc: PathBuf,

    /// Base directory to build under (default: the document's directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Keep the build log even when the build succeeds
    #[arg(long)]
    pub keep_log: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Document to scan (`-` reads stdin)
    #[arg(value_name = "DOC")]
    pub doc: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
