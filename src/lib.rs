//! Ahead-of-time asset bundler for AdminJS admin panels.
//!
//! AdminJS normally bundles its frontend JavaScript on server startup. This
//! library performs that bundling as a separate build step instead: it
//! triggers the framework's own bundler once, collects the four resulting
//! bundle files into a destination directory, and returns metadata about
//! each file so the caller can serve the directory statically or upload it
//! to a CDN.
//!
//! It can be used both as a CLI tool and as a library dependency.
//!
//! Servers consuming the pre-built assets should set
//! `ADMIN_JS_SKIP_BUNDLE=true` so the framework doesn't bundle again at
//! startup.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use bundler::{
    AdminFramework, BundleConfig, BundleConfigBuilder, BundleFile, Bundler, FilePlan,
    FrameworkOptions, NodeFramework, NodeFrameworkConfig,
};
pub use error::{BundlerError, CliError, Result};
