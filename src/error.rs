//! Error types for fibery-client operations.
//!
//! This module defines [`FiberyError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every error surfaces to the immediate caller; nothing is caught or
//!   retried internally
//! - Local validation errors are raised before any network call is made
//! - Non-200 responses map to `RemoteRequest` with the raw body attached,
//!   with no transient/permanent distinction
//! - Use `anyhow::Error` (via `FiberyError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for fibery-client operations.
#[derive(Debug, Error)]
pub enum FiberyError {
    /// Local validation failed before any request was sent.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// The endpoint answered with a non-200 status.
    #[error("Remote request failed with HTTP {status}: {body}")]
    RemoteRequest { status: u16, body: String },

    /// Schema lookup by name found no matching type.
    #[error("Type '{name}' not found in the schema")]
    TypeNotFound { name: String },

    /// The remote service reported failure for an entity creation.
    #[error("Failed to create entity of type '{type_name}': {diagnostic}")]
    EntityCreation {
        type_name: String,
        diagnostic: String,
    },

    /// A 200 response whose body does not match the command-result shape.
    #[error("Unexpected response shape: {message}")]
    UnexpectedResponse { message: String },

    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fibery-client operations.
pub type Result<T> = std::result::Result<T, FiberyError>;
