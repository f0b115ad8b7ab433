//! Error types for the PAYE calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate tables or
//! running a calculation.

use thiserror::Error;

/// The main error type for the PAYE calculation engine.
///
/// Configuration variants are raised while loading the scheme and rate
/// tables; `InvalidInput` is the only error a calculation itself can
/// produce, and it is always mutually exclusive with a result.
///
/// # Example
///
/// ```
/// use paye_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A loaded rate table violated a structural invariant.
    #[error("Invalid rate table for year '{year}': {message}")]
    InvalidRateTable {
        /// The year key of the offending table.
        year: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// A monetary input failed validation.
    ///
    /// Raised eagerly, before any computation; the engine never produces
    /// a partial result alongside this error.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A human-readable description of the invalid input.
        message: String,
    },
}

impl EngineError {
    /// Creates the aggregate validation error for the monetary text fields.
    pub fn invalid_amounts() -> Self {
        EngineError::InvalidInput {
            message: "gross income, allowances and tax relief must be valid non-negative amounts"
                .to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
