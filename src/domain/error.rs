//! Error types for octoseek.
//!
//! This module defines the centralized error type [`OctoseekError`] and a type
//! alias [`Result`] for convenient error handling throughout the application.
//! All errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! API-level failures (rate limits, server errors, transport problems) are
//! deliberately *not* part of this enum: they are classified into
//! [`ApiError`](crate::gateway::ApiError) values at the gateway boundary and
//! surfaced as display strings in the UI rather than propagated as crate
//! errors.

use thiserror::Error;

/// The main error type for octoseek operations.
///
/// This enum consolidates the error conditions that can abort the application,
/// from configuration problems to terminal I/O failures. Variants wrapping
/// underlying errors from external crates use `#[from]` for automatic
/// conversion.
#[derive(Debug, Error)]
pub enum OctoseekError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed or a configured value
    /// is malformed. The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations and crossterm
    /// terminal control. Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed.
    ///
    /// Occurs during startup when the reqwest client builder fails, typically
    /// because of an invalid authorization token value.
    #[error("Gateway error: {0}")]
    Gateway(String),
}

/// A specialized `Result` type for octoseek operations.
///
/// This is a type alias for `std::result::Result<T, OctoseekError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, OctoseekError>;
