// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Color themes
//!
//! The default "crimson" theme carries the original brand palette:
//! deep red chrome with white text and a washed-out backdrop.

use ratatui::style::Color;

/// Resolved color palette used by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Header and menu bar background
    pub primary: Color,
    /// Screen background
    pub secondary: Color,
    /// Backdrop art and overlay tint
    pub overlay: Color,
    /// Body text on light surfaces
    pub text_primary: Color,
    /// Text on the primary chrome
    pub text_secondary: Color,
    /// Badge background when vaccinated
    pub badge_ok: Color,
    /// Badge background when not vaccinated
    pub badge_warn: Color,
}

impl Theme {
    pub fn crimson() -> Self {
        Self {
            primary: Color::Rgb(0x8e, 0x20, 0x20),
            secondary: Color::Rgb(0xf0, 0xf0, 0xf0),
            overlay: Color::Rgb(0xc9, 0xa8, 0xa8),
            text_primary: Color::Rgb(0x8e, 0x20, 0x20),
            text_secondary: Color::White,
            badge_ok: Color::Rgb(0x2e, 0x6e, 0x2e),
            badge_warn: Color::Rgb(0x8e, 0x20, 0x20),
        }
    }

    pub fn mono() -> Self {
        Self {
            primary: Color::DarkGray,
            secondary: Color::Black,
            overlay: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::White,
            badge_ok: Color::DarkGray,
            badge_warn: Color::DarkGray,
        }
    }

    /// Look a theme up by its settings name, falling back to crimson.
    pub fn named(name: &str) -> Self {
        match name {
            "mono" => Self::mono(),
            _ => Self::crimson(),
        }
    }

    /// Badge background for a vaccination flag
    pub fn badge_bg(&self, vaccinated: bool) -> Color {
        if vaccinated {
            self.badge_ok
        } else {
            self.badge_warn
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::crimson()
    }
}
