// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Bottom menu bar widget
//!
//! Exactly three tabs in fixed order. The tab whose route name equals the
//! active route is rendered inverted; equality is the only highlight rule,
//! so at most one tab can ever be marked.

use ratatui::prelude::*;

use crate::nav::Route;
use crate::theme::Theme;

/// Widget for rendering the bottom tab bar
pub struct MenuBar<'a> {
    active: &'a str,
    theme: Theme,
}

impl<'a> MenuBar<'a> {
    pub fn new(active: &'a str, theme: Theme) -> Self {
        Self { active, theme }
    }
}

impl Widget for MenuBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 3 {
            return;
        }

        // Top border, standing in for the bar's hairline
        let mut tab_y = area.y;
        if area.height >= 2 {
            buf.set_string(
                area.x,
                area.y,
                "─".repeat(area.width as usize),
                Style::default().fg(self.theme.overlay),
            );
            tab_y = area.y + 1;
        }

        let bg_style = Style::default().bg(self.theme.primary);
        for x in area.x..area.x + area.width {
            buf.set_string(x, tab_y, " ", bg_style);
        }

        let tabs = Route::tabs();
        let segment = area.width / tabs.len() as u16;
        for (i, tab) in tabs.iter().enumerate() {
            let seg_x = area.x + segment * i as u16;
            let text = format!("{} {}", tab.icon(), tab.label());
            let text_width = text.chars().count() as u16;
            let is_active = tab.name() == self.active;

            let style = if is_active {
                Style::default()
                    .fg(self.theme.primary)
                    .bg(self.theme.overlay)
                    .bold()
            } else {
                Style::default()
                    .fg(self.theme.text_secondary)
                    .bg(self.theme.primary)
            };

            if is_active {
                // Fill the whole segment so the highlight reads as a pill
                for x in seg_x..(seg_x + segment).min(area.x + area.width) {
                    buf.set_string(x, tab_y, " ", style);
                }
            }

            let text_x = seg_x + segment.saturating_sub(text_width) / 2;
            buf.set_stringn(text_x, tab_y, &text, segment as usize, style);
        }
    }
}
