// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Application configuration
//!
//! Settings live in `~/.pawhaven/settings.json`. A missing file yields the
//! defaults; a missing key inside the file does too, so older files keep
//! working after new settings are added.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PawhavenError, Result};

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Colors and look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Named theme; see `theme::Theme::named`
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

fn default_theme() -> String {
    "crimson".to_string()
}

/// Listing grid behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Tile columns in the grid
    #[serde(default = "default_columns")]
    pub columns: u16,
    /// Paint the banner backdrop behind the grid
    #[serde(default = "default_backdrop")]
    pub show_backdrop: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            show_backdrop: default_backdrop(),
        }
    }
}

fn default_columns() -> u16 {
    2
}

fn default_backdrop() -> bool {
    true
}

impl Settings {
    /// Directory holding all pawhaven state
    pub fn pawhaven_home() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pawhaven")
    }

    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::pawhaven_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| PawhavenError::Config(format!("{}: {e}", path.display())))?;
        Ok(settings)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Grid columns, never below one
    pub fn grid_columns(&self) -> u16 {
        self.listing.columns.max(1)
    }
}
