//! Top-level error types for the bundler CLI.
//!
//! Library consumers usually work with [`crate::bundler::Error`] directly;
//! this wrapper exists so the CLI can surface argument and option-file
//! problems alongside bundling failures.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bundling errors
    #[error("{0}")]
    Bundle(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// The framework options file could not be read or parsed
    #[error("Failed to read framework options from {path:?}: {reason}")]
    OptionsFile {
        /// File that was supplied
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}
