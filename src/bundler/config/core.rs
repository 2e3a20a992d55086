//! Core configuration structure for bundle runs.

use std::path::{Path, PathBuf};

use crate::bundler::framework::FrameworkOptions;

/// Directory where the framework writes its generated entry files and the
/// custom components bundle.
pub const DEFAULT_LOCAL_DIR: &str = ".adminjs";

/// Directory holding the framework's prebuilt app and global bundles.
pub const DEFAULT_ASSETS_DIR: &str = "node_modules/adminjs/lib/frontend/assets/scripts";

/// Directory holding the design system's prebuilt bundle.
pub const DEFAULT_DESIGN_SYSTEM_DIR: &str = "node_modules/@adminjs/design-system";

/// Configuration for one bundle run.
///
/// Constructed via
/// [`BundleConfigBuilder`](crate::bundler::BundleConfigBuilder). Relative
/// paths are resolved against the process working directory when
/// [`Bundler::bundle`](crate::bundler::Bundler::bundle) runs; absolute paths
/// are used as given.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use adminjs_bundler::bundler::BundleConfigBuilder;
///
/// # fn example() -> adminjs_bundler::bundler::Result<()> {
/// let config = BundleConfigBuilder::new()
///     .destination_dir("src/public")
///     .components_entry_file("src/components/index.mjs")
///     .build()?;
///
/// assert_eq!(config.local_dir(), Path::new(".adminjs"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Directory the bundled files are written into.
    destination_dir: PathBuf,

    /// Module whose load registers custom components with the framework.
    components_entry_file: PathBuf,

    /// Framework scratch directory; the components bundle is generated here.
    local_dir: PathBuf,

    /// Location of the standard app and global bundles.
    assets_dir: PathBuf,

    /// Location of the design system bundle.
    design_system_dir: PathBuf,

    /// Options bag passed through opaquely to the framework constructor.
    framework_options: FrameworkOptions,
}

impl BundleConfig {
    pub(super) fn new(
        destination_dir: PathBuf,
        components_entry_file: PathBuf,
        local_dir: PathBuf,
        assets_dir: PathBuf,
        design_system_dir: PathBuf,
        framework_options: FrameworkOptions,
    ) -> Self {
        Self {
            destination_dir,
            components_entry_file,
            local_dir,
            assets_dir,
            design_system_dir,
            framework_options,
        }
    }

    /// Directory the bundled files are written into
    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }

    /// Module that registers custom components when loaded
    pub fn components_entry_file(&self) -> &Path {
        &self.components_entry_file
    }

    /// Framework scratch directory holding the generated components bundle
    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }

    /// Directory holding the standard app and global bundles
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Directory holding the design system bundle
    pub fn design_system_dir(&self) -> &Path {
        &self.design_system_dir
    }

    /// Options bag handed to the framework constructor
    pub fn framework_options(&self) -> &FrameworkOptions {
        &self.framework_options
    }
}
