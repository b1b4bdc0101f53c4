// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Event system for the listing TUI
//!
//! Route changes arrive from the navigation service asynchronously to
//! keyboard input, so they travel over a tokio mpsc channel and are drained
//! by the main loop between renders.

use tokio::sync::mpsc;

/// Events delivered to the listing app between renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The navigation service switched to a new route
    RouteChanged(String),
    /// Status message to display
    Status(String),
    /// Request to redraw without any state change
    Refresh,
    /// Shut the application down
    Quit,
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Helper for sending events, ignoring errors if the receiver is dropped
pub fn send_event(tx: &EventSender, event: AppEvent) {
    let _ = tx.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_event_channel() {
        let (tx, _rx) = create_event_channel();
        assert!(tx.send(AppEvent::Refresh).is_ok());
    }

    #[test]
    fn test_events_arrive_in_order() {
        let (tx, mut rx) = create_event_channel();
        send_event(&tx, AppEvent::RouteChanged("Home".to_string()));
        send_event(&tx, AppEvent::Quit);

        assert_eq!(
            rx.try_recv().unwrap(),
            AppEvent::RouteChanged("Home".to_string())
        );
        assert_eq!(rx.try_recv().unwrap(), AppEvent::Quit);
    }

    #[test]
    fn test_send_event_ignores_closed_receiver() {
        let (tx, rx) = create_event_channel();
        drop(rx);

        // Should not panic
        send_event(&tx, AppEvent::Refresh);
    }

    #[test]
    fn test_event_debug() {
        let event = AppEvent::Status("saved".to_string());
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("Status"));
        assert!(debug_str.contains("saved"));
    }
}
