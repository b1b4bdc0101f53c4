// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Pawhaven - pet adoption browser for the terminal.
//!
//! This crate exposes the runtime used by the `pawhaven` binary:
//! - `catalog`: the read-only adoption catalog and its source trait
//! - `nav`: routes and the navigation service
//! - `tui`: the listing screen, its widgets, and the event loop
//! - `assets`, `theme`, `config`: bundled art, palettes, and settings

pub mod assets;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod nav;
pub mod theme;
pub mod tui;

pub use error::{PawhavenError, Result};
