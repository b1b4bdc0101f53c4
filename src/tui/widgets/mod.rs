// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! UI widgets for the listing TUI

pub mod header;
pub mod menu_bar;
pub mod tile;

pub use header::HeaderBar;
pub use menu_bar::MenuBar;
pub use tile::PetTile;
