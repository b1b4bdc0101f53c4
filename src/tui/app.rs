// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Listing application state
//!
//! Owns the one piece of UI state the screen has: which menu tab is
//! active. The active tab is re-derived from every route-change event and
//! set optimistically on tab selection, mirroring what the navigation
//! service will echo back.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::{CatalogSource, Pet};
use crate::nav::{Navigator, Route};

use super::events::AppEvent;
use super::ui::TILE_HEIGHT;

/// Result of handling one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Current mode of the listing UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing the listing
    Browse,
    /// Showing the help overlay
    Help,
}

/// Main application state for the listing TUI
pub struct ListingApp {
    /// Route name of the currently active menu tab
    pub active_tab: String,
    pub mode: AppMode,
    /// Grid scroll offset, in tile rows
    pub scroll_offset: usize,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Height of the listing area, updated before each render
    pub listing_height: u16,
    columns: u16,
    catalog: Arc<dyn CatalogSource>,
    navigator: Arc<dyn Navigator>,
}

impl ListingApp {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        navigator: Arc<dyn Navigator>,
        columns: u16,
        initial_route: &str,
    ) -> Self {
        Self {
            active_tab: initial_route.to_string(),
            mode: AppMode::Browse,
            scroll_offset: 0,
            should_quit: false,
            status_message: None,
            listing_height: TILE_HEIGHT,
            columns: columns.max(1),
            catalog,
            navigator,
        }
    }

    /// Pets to render, in catalog order
    pub fn pets(&self) -> &[Pet] {
        self.catalog.list_pets()
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Set the active tab from a route-change notification. Idempotent;
    /// the only effect is the local state write.
    pub fn sync_route(&mut self, route_name: &str) {
        if self.active_tab != route_name {
            self.active_tab = route_name.to_string();
            self.scroll_offset = 0;
        }
    }

    /// Select a tab: mark it active and issue exactly one navigation
    /// request. The name is not validated here; resolving it is the
    /// navigation service's job.
    pub fn select_tab(&mut self, route_name: &str) {
        self.active_tab = route_name.to_string();
        self.navigator.navigate_to(route_name);
    }

    fn active_tab_index(&self) -> usize {
        Route::tabs()
            .iter()
            .position(|r| r.name() == self.active_tab)
            .unwrap_or(0)
    }

    pub fn select_next_tab(&mut self) {
        let tabs = Route::tabs();
        let next = (self.active_tab_index() + 1) % tabs.len();
        self.select_tab(tabs[next].name());
    }

    pub fn select_prev_tab(&mut self) {
        let tabs = Route::tabs();
        let current = self.active_tab_index();
        let prev = if current == 0 { tabs.len() - 1 } else { current - 1 };
        self.select_tab(tabs[prev].name());
    }

    /// Rows in the tile grid
    pub fn total_rows(&self) -> usize {
        self.pets().len().div_ceil(self.columns as usize)
    }

    fn visible_rows(&self) -> usize {
        (self.listing_height / TILE_HEIGHT).max(1) as usize
    }

    fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.visible_rows())
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = (self.scroll_offset + rows).min(self.max_scroll());
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    /// Apply an event from the navigation channel
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::RouteChanged(name) => self.sync_route(&name),
            AppEvent::Status(msg) => self.status_message = Some(msg),
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Refresh => {}
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> AppResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppResult::Quit;
        }

        match self.mode {
            AppMode::Help => self.handle_help_key(key),
            AppMode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) -> AppResult {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.mode = AppMode::Browse;
            }
            _ => {}
        }
        AppResult::Continue
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> AppResult {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppResult::Quit,
            KeyCode::Char('?') => self.mode = AppMode::Help,
            KeyCode::Left => self.select_prev_tab(),
            KeyCode::Right | KeyCode::Tab => self.select_next_tab(),
            KeyCode::Char('1') => self.select_tab(Route::tabs()[0].name()),
            KeyCode::Char('2') => self.select_tab(Route::tabs()[1].name()),
            KeyCode::Char('3') => self.select_tab(Route::tabs()[2].name()),
            KeyCode::Char('p') => {
                // Profile affordance in the header; the router decides
                // whether the destination exists.
                self.navigator.navigate_to(Route::Profile.name());
                self.set_status("Profile is not available yet");
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => {
                let page = self.visible_rows();
                self.scroll_up(page);
            }
            KeyCode::PageDown => {
                let page = self.visible_rows();
                self.scroll_down(page);
            }
            _ => {}
        }
        AppResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::nav::RecordingNavigator;

    fn test_app() -> (ListingApp, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::new());
        let app = ListingApp::new(
            Arc::new(StaticCatalog::bundled()),
            navigator.clone(),
            2,
            Route::AdoptPet.name(),
        );
        (app, navigator)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_route_is_active() {
        let (app, navigator) = test_app();
        assert_eq!(app.active_tab, "AdoptPet");
        // No navigation request issued just by mounting
        assert!(navigator.requests().is_empty());
    }

    #[test]
    fn test_select_tab_issues_exactly_one_request() {
        let (mut app, navigator) = test_app();
        app.select_tab("Home");
        assert_eq!(app.active_tab, "Home");
        assert_eq!(navigator.requests(), vec!["Home"]);
    }

    #[test]
    fn test_select_tab_accepts_any_string() {
        let (mut app, navigator) = test_app();
        app.select_tab("Checkout");
        assert_eq!(app.active_tab, "Checkout");
        assert_eq!(navigator.requests(), vec!["Checkout"]);
    }

    #[test]
    fn test_sync_route_updates_active_tab() {
        let (mut app, _) = test_app();
        app.handle_event(AppEvent::RouteChanged("ListPet".to_string()));
        assert_eq!(app.active_tab, "ListPet");
    }

    #[test]
    fn test_sync_route_is_idempotent() {
        let (mut app, navigator) = test_app();
        app.sync_route("AdoptPet");
        app.sync_route("AdoptPet");
        assert_eq!(app.active_tab, "AdoptPet");
        // Route sync never issues navigation requests
        assert!(navigator.requests().is_empty());
    }

    #[test]
    fn test_sync_route_resets_scroll() {
        let (mut app, _) = test_app();
        app.listing_height = TILE_HEIGHT; // one visible row of two
        app.scroll_down(1);
        assert_eq!(app.scroll_offset, 1);
        app.sync_route("Home");
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_tab_cycling_right() {
        let (mut app, navigator) = test_app();
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.active_tab, "ListPet");
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.active_tab, "Home");
        assert_eq!(navigator.requests(), vec!["ListPet", "Home"]);
    }

    #[test]
    fn test_tab_cycling_left_wraps() {
        let (mut app, _) = test_app();
        app.select_tab("Home");
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.active_tab, "ListPet");
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.active_tab, "Home");
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.active_tab, "ListPet");
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.active_tab, "AdoptPet");
    }

    #[test]
    fn test_profile_key_requests_navigation_without_changing_tab() {
        let (mut app, navigator) = test_app();
        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(app.active_tab, "AdoptPet");
        assert_eq!(navigator.requests(), vec!["Profile"]);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _) = test_app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppResult::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), AppResult::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), AppResult::Quit);
    }

    #[test]
    fn test_help_overlay_toggle() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert_eq!(app.mode, AppMode::Help);
        // q closes help instead of quitting
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppResult::Continue);
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[test]
    fn test_scroll_clamps_at_bounds() {
        let (mut app, _) = test_app();
        app.listing_height = TILE_HEIGHT; // one visible row
        assert_eq!(app.total_rows(), 2);

        app.scroll_up(5);
        assert_eq!(app.scroll_offset, 0);

        app.scroll_down(10);
        assert_eq!(app.scroll_offset, 1);
    }

    #[test]
    fn test_total_rows_single_column() {
        let navigator = Arc::new(RecordingNavigator::new());
        let app = ListingApp::new(
            Arc::new(StaticCatalog::bundled()),
            navigator,
            1,
            Route::AdoptPet.name(),
        );
        assert_eq!(app.total_rows(), 4);
    }

    #[test]
    fn test_handle_event_quit_and_status() {
        let (mut app, _) = test_app();
        app.handle_event(AppEvent::Status("saved".to_string()));
        assert_eq!(app.status_message.as_deref(), Some("saved"));
        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_event_then_render_state_consistent() {
        // Route change away from a tab route keeps exactly the new name
        let (mut app, _) = test_app();
        app.handle_event(AppEvent::RouteChanged("Home".to_string()));
        assert_eq!(app.active_tab, "Home");
        app.handle_event(AppEvent::RouteChanged("AdoptPet".to_string()));
        assert_eq!(app.active_tab, "AdoptPet");
    }
}
