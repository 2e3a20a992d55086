//! Main bundling orchestration.
//!
//! [`Bundler`] coordinates one bundle run: registering custom components,
//! preparing the destination, copying the standard framework bundles,
//! triggering the framework's own bundling step and moving the generated
//! components bundle into place.

use std::io;

use crate::bundler::config::BundleConfig;
use crate::bundler::error::{Context, Error, Result};
use crate::bundler::framework::AdminFramework;
use crate::bundler::plan::{self, BundleFile, FilePlan};
use crate::bundler::utils;

/// Main bundler orchestrator.
///
/// Runs the bundle flow against an injected [`AdminFramework`]
/// implementation and returns the produced [`BundleFile`] records in their
/// fixed order.
///
/// Two runs must not execute concurrently in the same process: component
/// registration and the framework's bundling step share framework state and
/// the scratch directory.
///
/// # Examples
///
/// ```no_run
/// use adminjs_bundler::bundler::{BundleConfigBuilder, Bundler, NodeFramework};
///
/// # async fn example() -> adminjs_bundler::bundler::Result<()> {
/// let config = BundleConfigBuilder::new()
///     .destination_dir("src/public")
///     .components_entry_file("src/components/index.mjs")
///     .build()?;
///
/// let bundler = Bundler::new(config, NodeFramework::new()?);
/// let files = bundler.bundle().await?;
///
/// for file in &files {
///     println!("{} -> {}", file.name, file.destination_path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Bundler<F> {
    config: BundleConfig,
    framework: F,
}

impl<F: AdminFramework> Bundler<F> {
    /// Creates a bundler from a configuration and a framework collaborator
    pub fn new(config: BundleConfig, framework: F) -> Self {
        Self { config, framework }
    }

    /// The configuration this bundler runs with
    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// The framework collaborator this bundler drives
    pub fn framework(&self) -> &F {
        &self.framework
    }

    /// Executes one bundle run.
    ///
    /// Steps, strictly in order: load the components entry module through
    /// the framework, create the destination directory, copy the three
    /// standard bundles concurrently, run the framework's asset
    /// initialization, move the generated components bundle into the
    /// destination.
    ///
    /// Returns the four produced files, always ordered components, app,
    /// global, design-system.
    ///
    /// # Errors
    ///
    /// The first failing step aborts the run; files copied before the
    /// failure are left in place.
    pub async fn bundle(&self) -> Result<Vec<BundleFile>> {
        let cwd = std::env::current_dir().context("failed to resolve working directory")?;

        log::info!(
            "bundling AdminJS frontend assets into {:?}",
            self.config.destination_dir()
        );

        // 1. Register custom components. The entry module must exist before
        //    anything touches the destination.
        let entry = plan::resolve(&cwd, self.config.components_entry_file())?;
        match tokio::fs::metadata(&entry).await {
            Ok(m) if m.is_file() => {}
            Ok(_) => {
                return Err(Error::ModuleLoad {
                    path: entry,
                    reason: "not a regular file".to_string(),
                });
            }
            Err(e) => {
                return Err(Error::ModuleLoad {
                    path: entry,
                    reason: e.to_string(),
                });
            }
        }
        log::debug!("registering custom components from {entry:?}");
        self.framework.register_components(&entry).await?;

        // 2. Create the destination directory. Existing directories and
        //    files are fine; later steps overwrite.
        let destination = plan::resolve(&cwd, self.config.destination_dir())?;
        tokio::fs::create_dir_all(&destination)
            .await
            .map_err(|source| Error::DirectoryCreate {
                path: destination.clone(),
                source,
            })?;

        // 3. Build the fixed four-entry plan.
        let file_plan = FilePlan::new(&self.config, &cwd)?;

        // 4. Copy the standard bundles. They are independent of each other;
        //    the first failure aborts the run.
        let [_, app, global, design_system] = file_plan.files();
        tokio::try_join!(
            copy_standard(app),
            copy_standard(global),
            copy_standard(design_system),
        )?;

        // 5. The framework generates the components bundle at the plan's
        //    source path.
        let components = file_plan.components();
        log::debug!("triggering framework bundling for {}", components.name);
        self.framework
            .initialize_and_bundle(self.config.framework_options(), &components.source_path)
            .await?;

        // 6. Move the generated bundle into the destination.
        finalize_components(components).await?;

        log::info!("successfully built 4 AdminJS bundle files");
        Ok(file_plan.into_files())
    }
}

/// Copies one standard bundle to its destination.
async fn copy_standard(file: &BundleFile) -> Result<()> {
    let bytes = utils::fs::copy_file(&file.source_path, &file.destination_path)
        .await
        .map_err(|source| Error::FileCopy {
            name: file.name.clone(),
            from: file.source_path.clone(),
            to: file.destination_path.clone(),
            source,
        })?;
    log::debug!("copied {} ({bytes} bytes)", file.name);
    Ok(())
}

/// Moves the generated components bundle out of the framework scratch
/// directory into its destination.
async fn finalize_components(file: &BundleFile) -> Result<()> {
    if let Err(e) = tokio::fs::metadata(&file.source_path).await {
        let source = if e.kind() == io::ErrorKind::NotFound {
            io::Error::new(
                io::ErrorKind::NotFound,
                "framework reported success but did not produce the components bundle",
            )
        } else {
            e
        };
        return Err(Error::FileRename {
            name: file.name.clone(),
            from: file.source_path.clone(),
            to: file.destination_path.clone(),
            source,
        });
    }

    tokio::fs::rename(&file.source_path, &file.destination_path)
        .await
        .map_err(|source| Error::FileRename {
            name: file.name.clone(),
            from: file.source_path.clone(),
            to: file.destination_path.clone(),
            source,
        })?;
    log::debug!("moved {} into place", file.name);
    Ok(())
}
