// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Render pass for the listing TUI
//!
//! Draws, in order: header bar, content area (backdrop + tile grid, or a
//! placeholder panel for the tabs whose screens are not part of this
//! build), and the bottom menu bar. The help overlay sits on top.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::assets::AssetLoader;
use crate::nav::Route;
use crate::theme::Theme;

use super::app::{AppMode, ListingApp};
use super::widgets::{HeaderBar, MenuBar, PetTile};

/// Full height of one tile, borders included
pub const TILE_HEIGHT: u16 = crate::assets::PET_ART_HEIGHT + 5;

/// Horizontal gap between tiles and the screen edge
const GRID_MARGIN: u16 = 2;

/// Layout regions.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Layout {
    pub(crate) header: Rect,
    pub(crate) content: Rect,
    pub(crate) menu: Rect,
}

pub(crate) fn calculate_layout(area: Rect) -> Layout {
    // Header: 1 line. Menu bar: 2 lines. Content: remaining space.
    let header_height = 1;
    let menu_height = 2.min(area.height.saturating_sub(header_height));
    let content_height = area
        .height
        .saturating_sub(header_height)
        .saturating_sub(menu_height);

    Layout {
        header: Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: header_height.min(area.height),
        },
        content: Rect {
            x: area.x,
            y: area.y + header_height,
            width: area.width,
            height: content_height,
        },
        menu: Rect {
            x: area.x,
            y: area.y + header_height + content_height,
            width: area.width,
            height: menu_height,
        },
    }
}

/// Draw the whole screen
pub fn draw(
    frame: &mut Frame,
    app: &ListingApp,
    theme: Theme,
    assets: &dyn AssetLoader,
    show_backdrop: bool,
) {
    let layout = calculate_layout(frame.area());

    let header = HeaderBar::new("PET RESCUE", theme).status(app.status_message.as_deref());
    frame.render_widget(header, layout.header);

    match Route::from_name(&app.active_tab) {
        Some(Route::Home) => draw_panel(
            frame,
            layout.content,
            theme,
            "Welcome to Pawhaven",
            "Press 2 to browse adoptable pets, or ? for help.",
        ),
        Some(Route::ListPet) => draw_panel(
            frame,
            layout.content,
            theme,
            "List a Pet",
            "Listing a pet is not part of this build yet.",
        ),
        _ => draw_grid(frame, app, layout.content, theme, assets, show_backdrop),
    }

    let menu = MenuBar::new(&app.active_tab, theme);
    frame.render_widget(menu, layout.menu);

    if app.mode == AppMode::Help {
        draw_help_overlay(frame, frame.area(), theme);
    }
}

/// Dimmed banner art across the content area, standing in for the
/// background image and its translucent overlay.
fn draw_backdrop(frame: &mut Frame, area: Rect, theme: Theme, assets: &dyn AssetLoader) {
    let Some(banner) = assets.resolve("banner") else {
        return;
    };
    let style = Style::default().fg(theme.overlay).dim();
    let buf = frame.buffer_mut();
    let banner_lines: Vec<&str> = banner.lines().collect();
    if banner_lines.is_empty() {
        return;
    }
    for y in area.y..area.y + area.height {
        let line = banner_lines[((y - area.y) as usize) % banner_lines.len()];
        let mut x = area.x;
        while x < area.x + area.width {
            let remaining = (area.x + area.width - x) as usize;
            buf.set_stringn(x, y, line, remaining, style);
            x += line.chars().count().max(1) as u16 + 2;
        }
    }
}

fn draw_grid(
    frame: &mut Frame,
    app: &ListingApp,
    area: Rect,
    theme: Theme,
    assets: &dyn AssetLoader,
    show_backdrop: bool,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    if show_backdrop {
        draw_backdrop(frame, area, theme, assets);
    }

    let columns = app.columns();
    let tile_width = area
        .width
        .saturating_sub(GRID_MARGIN * (columns + 1))
        / columns;
    if tile_width < 8 {
        return;
    }

    for (i, pet) in app.pets().iter().enumerate() {
        let col = (i as u16) % columns;
        let row = i / columns as usize;
        if row < app.scroll_offset {
            continue;
        }
        let y = area.y + ((row - app.scroll_offset) as u16) * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.y + area.height {
            break;
        }
        let x = area.x + GRID_MARGIN + col * (tile_width + GRID_MARGIN);

        let tile_area = Rect {
            x,
            y,
            width: tile_width,
            height: TILE_HEIGHT,
        };
        let art = assets.resolve_or_placeholder(pet.image);
        frame.render_widget(PetTile::new(pet, art, theme), tile_area);
    }
}

/// Centered placeholder panel for tabs without a real screen
fn draw_panel(frame: &mut Frame, area: Rect, theme: Theme, title: &str, body: &str) {
    if area.height < 3 {
        return;
    }
    let panel = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(theme.text_primary).bold(),
        )),
        Line::from(""),
        Line::from(body.to_string()),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    let panel_area = Rect {
        x: area.x + area.width / 6,
        y: area.y + area.height / 3,
        width: area.width - area.width / 3,
        height: (area.height - area.height / 3).min(6),
    };
    frame.render_widget(panel, panel_area);
}

fn draw_help_overlay(frame: &mut Frame, area: Rect, theme: Theme) {
    let popup_width = area.width.clamp(30, 46).min(area.width);
    let popup_height = 14.min(area.height.saturating_sub(2)).max(5);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(""),
        Line::from("  ←/→ or Tab   Switch tab"),
        Line::from("  1/2/3        Select tab directly"),
        Line::from("  ↑/↓ j/k      Scroll the grid"),
        Line::from("  PgUp/PgDn    Scroll a page"),
        Line::from("  p            Open profile"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Esc      Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Esc to close",
            Style::default().fg(theme.overlay),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Help ")
                .title_style(Style::default().fg(theme.text_primary).bold()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}
