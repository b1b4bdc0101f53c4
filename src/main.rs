// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Pawhaven - pet adoption browser for your terminal
//!
//! Entry point for the pawhaven CLI.

use clap::Parser;

use pawhaven::catalog::{CatalogSource, StaticCatalog};
use pawhaven::cli::{Cli, Commands, OutputFormat};
use pawhaven::config::Settings;
use pawhaven::error::Result;
use pawhaven::tui::run_listing_tui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    match cli.command {
        None | Some(Commands::Browse) => run_listing_tui(&settings).await,
        Some(Commands::Catalog(args)) => print_catalog(args.format),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let env_filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_catalog(format: OutputFormat) -> Result<()> {
    let catalog = StaticCatalog::bundled();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.list_pets())?);
        }
        OutputFormat::Text => {
            for pet in catalog.list_pets() {
                println!(
                    "{:>3}  {:<8} {:<18} {}",
                    pet.id,
                    pet.name,
                    pet.location,
                    pet.badge_label()
                );
            }
        }
    }
    Ok(())
}
