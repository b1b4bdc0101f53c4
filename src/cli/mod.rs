// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Command-line interface

pub mod args;

pub use args::{CatalogArgs, Cli, Commands, OutputFormat};
