//! Error types for clubsite.
//!
//! This module defines all error types used throughout the clubsite crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for clubsite operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Content Errors ===
    /// A fixture file could not be read.
    #[error("failed to read fixture {path}: {source}")]
    FixtureRead {
        /// Path to the fixture file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A fixture file is not valid JSON for its record type.
    #[error("failed to parse fixture {path}: {source}")]
    FixtureParse {
        /// Path to the fixture file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A record addressed by id does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up.
        kind: &'static str,
        /// The id that did not resolve.
        id: String,
    },

    /// A record id cannot be used as a directory name in an export.
    #[error("{kind} id {id:?} cannot be used as a path segment")]
    UnsafePathSegment {
        /// Kind of record the id belongs to.
        kind: &'static str,
        /// The offending id.
        id: String,
    },

    // === Join Form Errors ===
    /// A join application failed validation.
    #[error("invalid {field}: {message}")]
    InvalidApplication {
        /// Name of the offending form field.
        field: &'static str,
        /// Description of the problem.
        message: String,
    },

    /// A submission was attempted while another is still pending.
    #[error("a submission is already in progress")]
    SubmissionInProgress,

    /// The submitter rejected the application.
    #[error("submission failed: {0}")]
    Submission(String),

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to bind the HTTP listener.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// The address that was requested.
        address: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for clubsite operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for the given record kind.
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create an invalid application error for a form field.
    #[must_use]
    pub fn invalid_application(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidApplication {
            field,
            message: message.into(),
        }
    }

    /// Create a new submission error.
    #[must_use]
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission(message.into())
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error means the requested record does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a join form validation failure.
    #[must_use]
    pub fn is_invalid_application(&self) -> bool {
        matches!(self, Self::InvalidApplication { .. })
    }
}
