// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Error types for Pawhaven
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Pawhaven operations
#[derive(Error, Debug)]
pub enum PawhavenError {
    /// Catalog construction or lookup errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal UI errors
    #[error("TUI error: {0}")]
    Tui(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Pawhaven operations
pub type Result<T> = std::result::Result<T, PawhavenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = PawhavenError::Catalog("duplicate id 2".to_string());
        assert!(err.to_string().contains("Catalog error"));
        assert!(err.to_string().contains("duplicate id 2"));
    }

    #[test]
    fn test_config_error_display() {
        let err = PawhavenError::Config("bad theme".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_tui_error_display() {
        let err = PawhavenError::Tui("terminal too small".to_string());
        assert!(err.to_string().contains("TUI error"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PawhavenError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PawhavenError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let err = PawhavenError::Tui("test".to_string());
        assert!(format!("{:?}", err).contains("Tui"));
    }

    #[test]
    fn test_result_alias() {
        fn ok_fn() -> Result<u32> {
            Ok(7)
        }
        assert_eq!(ok_fn().unwrap(), 7);
    }
}
