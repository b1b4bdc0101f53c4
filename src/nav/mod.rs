// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Navigation routes and the navigation service
//!
//! Routes are the destinations reachable from the listing screen. The
//! screen never resolves a route itself; it hands the route name to a
//! [`Navigator`] and reacts to the route-change events the service emits.

use std::sync::Mutex;

use crate::tui::events::{send_event, AppEvent, EventSender};

/// Destinations known to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    AdoptPet,
    ListPet,
    Profile,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::AdoptPet, Route::ListPet, Route::Profile]
    }

    /// The three routes shown in the bottom menu bar, in bar order
    pub fn tabs() -> &'static [Route] {
        &[Route::Home, Route::AdoptPet, Route::ListPet]
    }

    /// Stable wire name used in navigation requests and events
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AdoptPet => "AdoptPet",
            Route::ListPet => "ListPet",
            Route::Profile => "Profile",
        }
    }

    /// Label shown in the menu bar
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AdoptPet => "Adopt a Pet",
            Route::ListPet => "List Pet",
            Route::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> char {
        match self {
            Route::Home => '⌂',
            Route::AdoptPet => '♥',
            Route::ListPet => '+',
            Route::Profile => '@',
        }
    }

    pub fn from_name(name: &str) -> Option<Route> {
        Route::all().iter().copied().find(|r| r.name() == name)
    }
}

/// Navigation service consumed by the listing screen.
///
/// `navigate_to` accepts any string; resolving it is the service's job, and
/// an unknown destination is the service's no-op, not the caller's error.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route_name: &str);
}

/// Router that echoes known routes back to the app as route-change events.
///
/// The three menu tabs are the only destinations this build can show;
/// anything else (including "Profile") is dropped with a debug log.
pub struct EventRouter {
    tx: EventSender,
}

impl EventRouter {
    pub fn new(tx: EventSender) -> Self {
        Self { tx }
    }

    fn is_available(route: Route) -> bool {
        Route::tabs().contains(&route)
    }
}

impl Navigator for EventRouter {
    fn navigate_to(&self, route_name: &str) {
        match Route::from_name(route_name) {
            Some(route) if Self::is_available(route) => {
                send_event(&self.tx, AppEvent::RouteChanged(route.name().to_string()));
            }
            Some(route) => {
                tracing::debug!(route = route.name(), "destination not available");
            }
            None => {
                tracing::debug!(route = route_name, "unknown route ignored");
            }
        }
    }
}

/// Navigator that records every request; used by tests.
#[derive(Default)]
pub struct RecordingNavigator {
    requests: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("navigator lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route_name: &str) {
        self.requests
            .lock()
            .expect("navigator lock")
            .push(route_name.to_string());
    }
}
