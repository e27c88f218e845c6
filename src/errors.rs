//! Defines application-specific error types.
//!
//! Only failures that abort a whole run are represented here. Per-file
//! problems met while scanning (unreadable files, truncated headers,
//! inaccessible directories) are absorbed where they happen and show up as
//! missing values in the report instead.

use thiserror::Error;

/// Application-specific errors used throughout `picstat`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring while creating or writing the report destination.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error writing the report to an already opened destination.
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias used by the library API.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
