//! Error types for the HR console.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Lookup misses (an unknown employee or leave request id) are never errors:
//! the store absorbs them as no-ops. What remains are configuration, storage
//! and report emission failures.

use thiserror::Error;

/// The main error type for the HR console.
///
/// # Example
///
/// ```
/// use hr_console::error::ConsoleError;
///
/// let error = ConsoleError::ConfigNotFound {
///     path: "/missing/console.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/console.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A persisted key could not be read from storage.
    #[error("Failed to read storage key '{key}': {message}")]
    StorageRead {
        /// The storage key.
        key: String,
        /// A description of the failure.
        message: String,
    },

    /// A collection could not be written to storage.
    #[error("Failed to write storage key '{key}': {message}")]
    StorageWrite {
        /// The storage key.
        key: String,
        /// A description of the failure.
        message: String,
    },

    /// A persisted value was present but did not decode.
    #[error("Stored value under '{key}' is malformed: {message}")]
    StorageParse {
        /// The storage key.
        key: String,
        /// A description of the decode error.
        message: String,
    },

    /// The seed dataset could not be parsed.
    #[error("Failed to parse seed dataset '{source_name}': {message}")]
    SeedParse {
        /// Where the seed came from (a path, or "built-in").
        source_name: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rendered report could not be written out.
    #[error("Failed to write report '{path}': {message}")]
    ReportWrite {
        /// The destination path.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
