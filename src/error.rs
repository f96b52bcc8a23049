//! Error types for the leave lookup engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a leave lookup.

use thiserror::Error;

/// The main error type for the leave lookup engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/sources.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/sources.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The search term was empty or whitespace-only.
    ///
    /// Surfaced before any source retrieval is attempted.
    #[error("Please enter an employee number or surname")]
    EmptySearchTerm,

    /// One report source failed to fetch or returned a non-success status.
    ///
    /// Non-fatal during a search: the failed source is logged and skipped,
    /// and the remaining sources still contribute records.
    #[error("Failed to fetch source '{source_id}': {message}")]
    SourceFetch {
        /// The id of the source that failed.
        ///
        /// Named `source_id` rather than `source`: thiserror reserves the
        /// `source` field name for an underlying `std::error::Error`.
        source_id: String,
        /// A description of the fetch failure.
        message: String,
    },

    /// Every source failed to fetch, or none contained an extractable record.
    ///
    /// Distinct from a query that simply matches zero records, which is a
    /// normal empty result.
    #[error("No valid report sources found or all sources are empty")]
    NoData,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
