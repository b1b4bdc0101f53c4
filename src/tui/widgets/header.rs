// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Header bar widget
//!
//! One line of primary-colored chrome: profile affordance on the left,
//! title centered, optional status message on the right.

use ratatui::prelude::*;

use crate::theme::Theme;

/// Widget for rendering the header bar
pub struct HeaderBar<'a> {
    title: &'a str,
    theme: Theme,
    status: Option<&'a str>,
}

impl<'a> HeaderBar<'a> {
    pub fn new(title: &'a str, theme: Theme) -> Self {
        Self {
            title,
            theme,
            status: None,
        }
    }

    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let bg_style = Style::default().bg(self.theme.primary);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        // Profile affordance
        let profile = "[p] Profile";
        buf.set_stringn(
            area.x + 1,
            area.y,
            profile,
            area.width.saturating_sub(1) as usize,
            Style::default()
                .fg(self.theme.text_secondary)
                .bg(self.theme.primary),
        );

        // Centered title
        let title_width = self.title.chars().count() as u16;
        if title_width < area.width {
            let title_x = area.x + (area.width - title_width) / 2;
            buf.set_stringn(
                title_x,
                area.y,
                self.title,
                area.width as usize,
                Style::default()
                    .fg(self.theme.text_secondary)
                    .bg(self.theme.primary)
                    .bold(),
            );
        }

        // Right-aligned status
        if let Some(status) = self.status {
            let status_width = status.chars().count() as u16 + 1;
            if status_width < area.width / 2 {
                let status_x = area.x + area.width - status_width;
                buf.set_stringn(
                    status_x,
                    area.y,
                    status,
                    status_width as usize,
                    Style::default()
                        .fg(self.theme.overlay)
                        .bg(self.theme.primary),
                );
            }
        }
    }
}
