//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only configuration loading is fallible; the calculation core resolves
//! missing or empty inputs to zero-valued or least-restrictive results
//! instead of signaling a fault, so a batch run never stops over one row's
//! optional data.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration not found: /missing/settings");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration directory or file was not found at the specified path.
    #[error("Configuration not found: {path}")]
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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
