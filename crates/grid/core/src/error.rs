//! Common error infrastructure for grid-core.
//!
//! Domain-specific errors live next to the code that raises them:
//! [`ConfigError`] in [`crate::config`] and [`PathError`] in [`crate::search`].
//! This module provides the shared classification trait and the crate-level
//! [`CoreError`] that session-facing APIs return.
//!
//! # Design Principles
//!
//! - **Fail fast on configuration**: malformed matrices and unknown algorithm
//!   names abort session construction.
//! - **Defects stay loud**: an endpoint that reaches the search layer while not
//!   walkable is an internal error and is always propagated.
//! - **Unreachable is not an error**: it is represented as an empty path.

use crate::config::ConfigError;
use crate::search::PathError;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown algorithm name sent by a toolbar.
    Validation,

    /// Unexpected state inconsistency that indicates a bug.
    ///
    /// Examples: a blocked tile handed to a search strategy as an endpoint.
    Internal,

    /// Unrecoverable error, the session cannot be built.
    ///
    /// Examples: jagged or non-square obstacle matrix.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all grid-core errors.
///
/// Provides a uniform interface for error classification across the crate so
/// frontends can decide between aborting, logging, and ignoring.
pub trait GridError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Crate-level error returned by the adapter, projection, and session APIs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Path(#[from] PathError),
}

impl GridError for CoreError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(err) => err.severity(),
            Self::Path(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.error_code(),
            Self::Path(err) => err.error_code(),
        }
    }
}

pub type Result<T> = core::result::Result<T, CoreError>;
