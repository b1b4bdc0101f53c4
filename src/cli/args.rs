// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pawhaven - pet adoption browser for your terminal
#[derive(Parser, Debug)]
#[command(name = "pawhaven")]
#[command(version, about = "Pet adoption browser for your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the adoption listing interactively (default when no command given)
    Browse,

    /// Print the bundled catalog and exit
    Catalog(CatalogArgs),
}

/// Arguments for the catalog subcommand
#[derive(clap::Args, Debug, Default)]
pub struct CatalogArgs {
    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for non-interactive commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
