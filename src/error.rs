//! Error types for Commitly operations.
//!
//! This module defines [`CommitlyError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CommitlyError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CommitlyError::Other`) for unexpected errors
//! - Configuration load failures are non-fatal at the facade layer: the
//!   facade logs them and degrades to an empty configuration
//! - Lint results are strings (empty = valid), never errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Commitly operations.
#[derive(Debug, Error)]
pub enum CommitlyError {
    /// No commitlint configuration file found in the working directory.
    #[error("Cannot find module: no commitlint configuration in {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// An interactive prompt was requested in a non-interactive session.
    #[error("Cannot prompt in a non-interactive session: {prompt}")]
    NotInteractive { prompt: String },

    /// The user aborted an interactive prompt.
    #[error("Aborted")]
    Aborted,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CommitlyError {
    /// Whether this error represents a missing (as opposed to broken)
    /// configuration. The facade logs the two differently.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CommitlyError::ConfigNotFound { .. })
    }
}

/// Result type alias for Commitly operations.
pub type Result<T> = std::result::Result<T, CommitlyError>;
