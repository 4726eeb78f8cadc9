//! Error types for the Rota Generation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule generation.
//!
//! Missing configuration (no thresholds, no shift rules, no matching job
//! role) and staffing shortfalls are deliberately *not* errors: the engine
//! recovers from them locally and reports them as `tracing` diagnostics.
//! Errors are reserved for malformed input and configuration files that
//! cannot be read.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Rota Generation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use rota_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/scheduler.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/scheduler.yaml");
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

    /// A time string could not be parsed as `HH:MM`.
    ///
    /// The source system silently coerced unparseable times to a zero-length
    /// shift; that behaviour hid data-quality problems and is replaced here
    /// with a fast failure naming the offending record.
    #[error("Invalid time '{value}' in {context}")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
        /// Which record the string came from (e.g. a shift-rule id).
        context: String,
    },

    /// The forecast revenue for a date was negative.
    #[error("Invalid revenue forecast for {date}: {value}")]
    InvalidRevenue {
        /// The date carrying the bad figure.
        date: NaiveDate,
        /// The offending value.
        value: String,
    },

    /// The schedule request itself was inconsistent.
    #[error("Invalid schedule request: {message}")]
    InvalidRequest {
        /// A description of what made the request invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
