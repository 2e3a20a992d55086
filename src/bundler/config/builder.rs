//! Builder for constructing bundle configurations.

use std::path::{Path, PathBuf};

use super::core::{
    BundleConfig, DEFAULT_ASSETS_DIR, DEFAULT_DESIGN_SYSTEM_DIR, DEFAULT_LOCAL_DIR,
};
use crate::bundler::error::{Context, Result};
use crate::bundler::framework::FrameworkOptions;

/// Builder for [`BundleConfig`].
///
/// Two fields are required: the destination directory and the components
/// entry file. Everything else defaults to the layout of a standard
/// framework installation under `node_modules`.
///
/// # Examples
///
/// ```
/// use adminjs_bundler::bundler::BundleConfigBuilder;
///
/// # fn example() -> adminjs_bundler::bundler::Result<()> {
/// let config = BundleConfigBuilder::new()
///     .destination_dir("src/public")
///     .components_entry_file("src/components/index.mjs")
///     .assets_dir("vendor/adminjs/scripts")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct BundleConfigBuilder {
    destination_dir: Option<PathBuf>,
    components_entry_file: Option<PathBuf>,
    local_dir: Option<PathBuf>,
    assets_dir: Option<PathBuf>,
    design_system_dir: Option<PathBuf>,
    framework_options: FrameworkOptions,
}

impl BundleConfigBuilder {
    /// Creates a new builder with no fields set
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory the bundled files are written into.
    ///
    /// # Required
    pub fn destination_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.destination_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the module that registers custom components when loaded.
    ///
    /// # Required
    pub fn components_entry_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.components_entry_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the framework scratch directory.
    ///
    /// Defaults to `.adminjs`. Set this only if you know what you're doing.
    pub fn local_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.local_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the directory holding the standard app and global bundles.
    ///
    /// Defaults to `node_modules/adminjs/lib/frontend/assets/scripts`.
    pub fn assets_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.assets_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the directory holding the design system bundle.
    ///
    /// Defaults to `node_modules/@adminjs/design-system`.
    pub fn design_system_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.design_system_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the options bag handed to the framework constructor.
    ///
    /// Defaults to an empty object.
    pub fn framework_options(mut self, options: FrameworkOptions) -> Self {
        self.framework_options = options;
        self
    }

    /// Builds the final [`BundleConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `destination_dir` or `components_entry_file` was
    /// not set.
    pub fn build(self) -> Result<BundleConfig> {
        Ok(BundleConfig::new(
            self.destination_dir.context("destination_dir is required")?,
            self.components_entry_file
                .context("components_entry_file is required")?,
            self.local_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCAL_DIR)),
            self.assets_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
            self.design_system_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DESIGN_SYSTEM_DIR)),
            self.framework_options,
        ))
    }
}
