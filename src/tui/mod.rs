// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Listing TUI
//!
//! Terminal lifecycle and the main event loop: draw, poll the keyboard
//! with a short timeout, drain navigation events, repeat.

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::assets::BundledAssets;
use crate::catalog::StaticCatalog;
use crate::config::Settings;
use crate::error::{PawhavenError, Result};
use crate::nav::{EventRouter, Route};
use crate::theme::Theme;

pub use app::{AppMode, AppResult, ListingApp};
pub use events::{create_event_channel, AppEvent, EventReceiver, EventSender};

type PanicHook = Box<dyn Fn(&std::panic::PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Install a hook that restores the terminal before panics are reported.
/// The previous hook keeps running; the returned handle puts it back via
/// [`restore_panic_hook`].
fn install_terminal_panic_hook() -> Arc<PanicHook> {
    let original: Arc<PanicHook> = Arc::new(std::panic::take_hook());
    let hook = Arc::clone(&original);
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        (*hook)(panic_info);
    }));
    original
}

/// Remove the terminal hook and reinstate the hook it replaced.
fn restore_panic_hook(original: Arc<PanicHook>) {
    // Dropping the terminal hook releases its clone of the handle
    let _ = std::panic::take_hook();
    if let Ok(hook) = Arc::try_unwrap(original) {
        std::panic::set_hook(hook);
    }
}

/// Run the listing TUI until the user quits.
pub async fn run_listing_tui(settings: &Settings) -> Result<()> {
    let original_panic_hook = install_terminal_panic_hook();

    enable_raw_mode().map_err(|e| PawhavenError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| PawhavenError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| PawhavenError::Tui(e.to_string()))?;

    let (tx, mut rx) = create_event_channel();
    let navigator = Arc::new(EventRouter::new(tx));
    let catalog = Arc::new(StaticCatalog::bundled());
    let mut app = ListingApp::new(
        catalog,
        navigator,
        settings.grid_columns(),
        Route::AdoptPet.name(),
    );
    let theme = Theme::named(&settings.appearance.theme);
    let assets = BundledAssets;

    tracing::info!("listing TUI started");

    let result: Result<()> = loop {
        // Route changes arrive between renders
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        if app.should_quit {
            break Ok(());
        }

        let size = terminal.size().map_err(|e| PawhavenError::Tui(e.to_string()))?;
        app.listing_height = ui::calculate_layout(Rect::new(0, 0, size.width, size.height))
            .content
            .height;

        terminal
            .draw(|f| ui::draw(f, &app, theme, &assets, settings.listing.show_backdrop))
            .map_err(|e| PawhavenError::Tui(e.to_string()))?;

        let has_event = crossterm::event::poll(Duration::from_millis(50))
            .map_err(|e| PawhavenError::Tui(e.to_string()))?;
        if !has_event {
            continue;
        }

        let event = crossterm::event::read().map_err(|e| PawhavenError::Tui(e.to_string()))?;
        match event {
            TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                if app.handle_key(key) == AppResult::Quit {
                    break Ok(());
                }
            }
            TermEvent::Resize(_, _) => {
                // Re-rendered on the next iteration
            }
            _ => {}
        }
    };

    restore_panic_hook(original_panic_hook);
    disable_raw_mode().map_err(|e| PawhavenError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| PawhavenError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| PawhavenError::Tui(e.to_string()))?;

    tracing::info!("listing TUI stopped");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_previous_panic_hook_survives_a_session() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        std::panic::set_hook(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let original = install_terminal_panic_hook();
        restore_panic_hook(original);

        // The counting hook must be back in place, not the default
        let result = std::panic::catch_unwind(|| panic!("boom"));
        let _ = std::panic::take_hook();
        assert!(result.is_err());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
