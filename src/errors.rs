//! Defines application-specific error types.
//!
//! This module provides the `AppError` enum, which categorizes the errors
//! that can occur during a run, offering more context than generic I/O or
//! `anyhow` errors.

use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors used throughout `srcbundle`.
#[derive(Error, Debug)]
pub enum AppError {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Resolution Errors ---
    /// No candidate root/variant combination exists for a reference.
    ///
    /// The message enumerates every absolute path that was attempted, in the
    /// order it was tried, to aid diagnosis of root/variant misconfiguration.
    #[error("Could not locate source entry '{reference}'. Tried:\n - {}", display_attempted(.attempted))]
    ResolutionFailure {
        /// The reference that failed to resolve.
        reference: String,
        /// Every absolute path tried, in search order.
        attempted: Vec<PathBuf>,
    },

    // --- Configuration Errors ---
    /// Generic error related to invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Helper function to create an `AppError::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

fn display_attempted(attempted: &[PathBuf]) -> String {
    attempted
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join("\n - ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = io_error_with_path(source_error, &path);

        match app_error {
            AppError::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io"),
        }
    }

    #[test]
    fn test_resolution_failure_lists_every_attempt() {
        let error = AppError::ResolutionFailure {
            reference: "Lib/missing.rs".to_string(),
            attempted: vec![
                PathBuf::from("/repo/Lib/missing.rs"),
                PathBuf::from("/repo/Lib/Lib/missing.rs"),
                PathBuf::from("/Lib/missing.rs"),
            ],
        };

        let message = error.to_string();
        assert!(message.contains("Could not locate source entry 'Lib/missing.rs'"));
        assert!(message.contains("Tried:\n - /repo/Lib/missing.rs"));
        assert!(message.contains("\n - /repo/Lib/Lib/missing.rs"));
        assert!(message.contains("\n - /Lib/missing.rs"));
    }

    #[test]
    fn test_resolution_failure_message_order_matches_attempt_order() {
        let error = AppError::ResolutionFailure {
            reference: "x".to_string(),
            attempted: vec![PathBuf::from("/first"), PathBuf::from("/second")],
        };
        let message = error.to_string();
        let first = message.find("/first").expect("first path missing");
        let second = message.find("/second").expect("second path missing");
        assert!(first < second);
    }
}
