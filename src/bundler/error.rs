//! Error types for bundling operations.
//!
//! One variant per way a bundle run can fail: loading the components entry
//! module, preparing the destination, copying a standard bundle, running the
//! framework's own bundling step, and moving the generated components bundle
//! into place.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all bundling operations
#[derive(Error, Debug)]
pub enum Error {
    /// Components entry module missing, unreadable, or failed to load
    #[error("failed to load components module {path:?}: {reason}")]
    ModuleLoad {
        /// Resolved path of the entry module
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },

    /// Destination directory could not be created
    #[error("failed to create destination directory {path:?}: {source}")]
    DirectoryCreate {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// A standard bundle could not be copied to its destination
    #[error("failed to copy {name} from {from:?} to {to:?}: {source}")]
    FileCopy {
        /// Logical bundle name
        name: String,
        /// Source path of the copy
        from: PathBuf,
        /// Destination path of the copy
        to: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The framework's asset initialization failed
    #[error("framework bundling failed: {reason}")]
    FrameworkInit {
        /// Reason reported by the framework driver
        reason: String,
    },

    /// The generated components bundle could not be moved into place
    #[error("failed to move {name} from {from:?} to {to:?}: {source}")]
    FileRename {
        /// Logical bundle name
        name: String,
        /// Path the framework generated the file at
        from: PathBuf,
        /// Destination path of the move
        to: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// No node executable found to drive the framework bundler
    #[error("node executable not found in PATH")]
    NodeNotFound,

    /// Generic errors
    #[error("{0}")]
    GenericError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Extension trait adding a short context message to `Option`s and foreign
/// `Result`s, turning them into bundling results.
pub trait Context<T> {
    /// Attaches `msg` to the error side of `self`
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Returns early with a [`GenericError`](Error::GenericError) built from
/// format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::error::Error::GenericError(format!($($arg)*)))
    };
}
