// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Pet tile widget
//!
//! One card per catalog entry: image art on top, then name, location, and
//! the vaccination badge.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::assets::PET_ART_HEIGHT;
use crate::catalog::Pet;
use crate::theme::Theme;

/// Widget for rendering a single catalog tile
pub struct PetTile<'a> {
    pet: &'a Pet,
    art: &'static str,
    theme: Theme,
}

impl<'a> PetTile<'a> {
    pub fn new(pet: &'a Pet, art: &'static str, theme: Theme) -> Self {
        Self { pet, art, theme }
    }
}

impl Widget for PetTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 4 || area.width < 8 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.overlay));
        let inner = block.inner(area);
        block.render(area, buf);

        // Image art, centered
        let art_style = Style::default().fg(self.theme.text_primary);
        for (i, line) in self.art.lines().enumerate() {
            let y = inner.y + i as u16;
            if i as u16 >= PET_ART_HEIGHT || y >= inner.y + inner.height {
                break;
            }
            let line_width = line.chars().count() as u16;
            let x = inner.x + inner.width.saturating_sub(line_width) / 2;
            buf.set_stringn(x, y, line, inner.width as usize, art_style);
        }

        // Details under the art
        let name_y = inner.y + PET_ART_HEIGHT;
        if name_y < inner.y + inner.height {
            buf.set_stringn(
                inner.x,
                name_y,
                &self.pet.name,
                inner.width as usize,
                Style::default().fg(self.theme.text_primary).bold(),
            );
        }

        let location_y = name_y + 1;
        if location_y < inner.y + inner.height {
            buf.set_stringn(
                inner.x,
                location_y,
                &self.pet.location,
                inner.width as usize,
                Style::default().fg(self.theme.text_primary),
            );
        }

        let badge_y = location_y + 1;
        if badge_y < inner.y + inner.height {
            let badge = format!(" {} ", self.pet.badge_label());
            buf.set_stringn(
                inner.x,
                badge_y,
                &badge,
                inner.width as usize,
                Style::default()
                    .fg(self.theme.text_secondary)
                    .bg(self.theme.badge_bg(self.pet.vaccinated)),
            );
        }
    }
}
