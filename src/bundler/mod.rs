//! Bundle orchestration for AdminJS frontend assets.
//!
//! AdminJS normally bundles its frontend JavaScript on server startup. The
//! types in this module perform that bundling as a standalone step instead:
//! one [`Bundler::bundle`] call registers the caller's custom components,
//! triggers the framework's own bundling through an injected
//! [`AdminFramework`], and collects the four resulting bundle files into a
//! destination directory.
//!
//! # Example
//!
//! ```no_run
//! use adminjs_bundler::bundler::{BundleConfigBuilder, Bundler, NodeFramework};
//!
//! # async fn example() -> adminjs_bundler::bundler::Result<()> {
//! let config = BundleConfigBuilder::new()
//!     .destination_dir("src/public")
//!     .components_entry_file("src/components/index.mjs")
//!     .build()?;
//!
//! let files = Bundler::new(config, NodeFramework::new()?).bundle().await?;
//! assert_eq!(files.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`config`] - [`BundleConfig`] and its builder
//! - [`plan`] - the fixed four-file plan and [`BundleFile`] records
//! - [`framework`] - the [`AdminFramework`] seam and the node-backed driver
//! - [`orchestrator`] - the [`Bundler`] itself
//! - [`utils`] - shared file system helpers
//! - [`error`] - error types for bundling operations

pub mod config;
pub mod error;
pub mod framework;
pub mod orchestrator;
pub mod plan;
pub mod utils;

pub use config::{BundleConfig, BundleConfigBuilder};
pub use error::{Error, Result};
pub use framework::{AdminFramework, FrameworkOptions, NodeFramework, NodeFrameworkConfig};
pub use orchestrator::Bundler;
pub use plan::{BundleFile, FilePlan};
