//! File system utilities for bundling.
//!
//! Thin wrappers over `tokio::fs` with the checks the bundling flow relies
//! on. Errors stay as `io::Error` so callers can wrap them with the bundle
//! name and paths involved.

use std::io;
use std::path::Path;

use tokio::fs;

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist. Returns the
/// number of bytes copied.
pub async fn copy_file(from: &Path, to: &Path) -> io::Result<u64> {
    let metadata = fs::metadata(from).await?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{from:?} is not a file"),
        ));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).await?;
    }
    fs::copy(from, to).await
}
