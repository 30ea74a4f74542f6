//! Error types for the Shift Wage Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can report: input validation,
//! configuration loading, history store access and export.

use thiserror::Error;

/// The main error type for the Shift Wage Engine.
///
/// Input validation errors are raised before any computation takes place.
/// Invalid input is never silently defaulted or clamped.
///
/// # Example
///
/// ```
/// use shift_wage_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     field: "start_time".to_string(),
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format for 'start_time': 25:00");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A start, end, break or date field could not be parsed.
    #[error("Invalid time format for '{field}': {value}")]
    InvalidTimeFormat {
        /// The name of the offending field.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The break is negative or longer than the shift itself.
    #[error("Negative duration: {message}")]
    NegativeDuration {
        /// A description of the offending durations.
        message: String,
    },

    /// The hourly rate is negative or not a decimal number.
    #[error("Invalid hourly rate: {rate}")]
    InvalidRate {
        /// The rejected rate, as supplied.
        rate: String,
    },

    /// No rate was supplied and none is remembered for the worker.
    #[error("No hourly rate remembered for worker '{worker_name}'")]
    RateNotRemembered {
        /// The worker whose rate was requested.
        worker_name: String,
    },

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

    /// A history index did not refer to a stored entry.
    #[error("History index {index} out of range (history has {len} entries)")]
    HistoryIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of stored entries.
        len: usize,
    },

    /// Rendering records to an export format failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
