//! The admin framework collaborator seam.
//!
//! The framework is consumed through exactly two opaque calls: load the
//! caller's components module so custom components get registered, and run
//! the framework's own asset initialization, which generates the components
//! bundle on disk. [`NodeFramework`] drives the real framework through a
//! node subprocess; tests substitute an implementation that writes a stub
//! file instead.

mod node;

pub use node::{NodeFramework, NodeFrameworkConfig};

use std::path::Path;

use async_trait::async_trait;

use super::error::Result;

/// Options bag passed through opaquely to the framework constructor.
///
/// The bundler never inspects its contents.
pub type FrameworkOptions = serde_json::Map<String, serde_json::Value>;

/// External collaborator performing the actual JavaScript bundling.
///
/// Implementations must satisfy one contract: after a successful
/// [`initialize_and_bundle`](AdminFramework::initialize_and_bundle), the
/// components bundle exists at the `output` path it was given.
#[async_trait]
pub trait AdminFramework {
    /// Makes the framework load `entry`, whose only job is registering
    /// custom components. Called exactly once per run, before any file is
    /// copied. `entry` is always absolute.
    ///
    /// # Errors
    ///
    /// Load problems surface as
    /// [`Error::ModuleLoad`](crate::bundler::Error::ModuleLoad).
    async fn register_components(&self, entry: &Path) -> Result<()>;

    /// Constructs the framework with `options` and runs its asset
    /// initialization, leaving the components bundle at `output`.
    ///
    /// # Errors
    ///
    /// Failures surface as
    /// [`Error::FrameworkInit`](crate::bundler::Error::FrameworkInit).
    async fn initialize_and_bundle(
        &self,
        options: &FrameworkOptions,
        output: &Path,
    ) -> Result<()>;
}
