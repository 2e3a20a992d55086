//! The fixed four-file plan of a bundle run.
//!
//! Every run produces the same four logical files in the same order: the
//! custom components bundle generated by the framework, then the three
//! standard bundles shipped inside the framework packages.

use std::io;
use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};

use super::config::BundleConfig;
use super::error::Result;

/// Name of the generated custom components bundle.
pub const COMPONENTS_BUNDLE: &str = "components.bundle.js";

/// Name of the standard application bundle.
pub const APP_BUNDLE: &str = "app.bundle.js";

/// Name of the standard global dependencies bundle.
pub const GLOBAL_BUNDLE: &str = "global.bundle.js";

/// Name of the design system bundle.
pub const DESIGN_SYSTEM_BUNDLE: &str = "design-system.bundle.js";

// Source file names inside their configured directories.
const COMPONENTS_SOURCE: &str = "bundle.js";
const APP_SOURCE: &str = "app-bundle.production.js";
const GLOBAL_SOURCE: &str = "global-bundle.production.js";
const DESIGN_SYSTEM_SOURCE: &str = "bundle.production.js";

/// One produced bundle file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleFile {
    /// Logical file name, one of the four fixed bundle names
    pub name: String,
    /// Absolute path the file was produced at before landing in the
    /// destination
    pub source_path: PathBuf,
    /// Absolute path the file resides at after a successful run
    pub destination_path: PathBuf,
}

/// The ordered four-entry plan for one bundle run.
///
/// Order is fixed regardless of configuration: components, app, global,
/// design-system.
#[derive(Debug, Clone)]
pub struct FilePlan {
    files: [BundleFile; 4],
}

impl FilePlan {
    /// Builds the plan from the configured directories, resolving every
    /// relative path against `cwd`.
    pub fn new(config: &BundleConfig, cwd: &Path) -> Result<Self> {
        let destination = resolve(cwd, config.destination_dir())?;
        let local_dir = resolve(cwd, config.local_dir())?;
        let assets_dir = resolve(cwd, config.assets_dir())?;
        let design_system_dir = resolve(cwd, config.design_system_dir())?;

        let entry = |name: &str, source: PathBuf| BundleFile {
            name: name.to_string(),
            source_path: source,
            destination_path: destination.join(name),
        };

        Ok(Self {
            files: [
                entry(COMPONENTS_BUNDLE, local_dir.join(COMPONENTS_SOURCE)),
                entry(APP_BUNDLE, assets_dir.join(APP_SOURCE)),
                entry(GLOBAL_BUNDLE, assets_dir.join(GLOBAL_SOURCE)),
                entry(
                    DESIGN_SYSTEM_BUNDLE,
                    design_system_dir.join(DESIGN_SYSTEM_SOURCE),
                ),
            ],
        })
    }

    /// The components bundle entry, generated by the framework step
    pub fn components(&self) -> &BundleFile {
        &self.files[0]
    }

    /// The three standard bundle entries, in plan order
    pub fn standard(&self) -> &[BundleFile] {
        &self.files[1..]
    }

    /// All four entries in plan order
    pub fn files(&self) -> &[BundleFile; 4] {
        &self.files
    }

    /// Consumes the plan, yielding the ordered file list
    pub fn into_files(self) -> Vec<BundleFile> {
        self.files.into()
    }
}

/// Resolves `path` against `cwd`, leaving absolute paths untouched.
pub(crate) fn resolve(cwd: &Path, path: &Path) -> io::Result<PathBuf> {
    Ok(path.absolutize_from(cwd)?.into_owned())
}
