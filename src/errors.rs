/*!
 * Error types for the srtlint application.
 *
 * This module contains custom error types for host-level faults, using the
 * thiserror crate for ergonomic error definitions. Timing violations found
 * in subtitle files are data, not faults: they are returned as values from
 * `timing::validate` and never appear here.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error loading or validating configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Input path does not exist or is not checkable
    #[error("Invalid input path: {0}")]
    InvalidPath(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
