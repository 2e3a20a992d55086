//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Ahead-of-time bundler for AdminJS frontend assets
#[derive(Parser, Debug)]
#[command(
    name = "adminjs-bundler",
    version,
    about = "Bundles AdminJS frontend assets ahead of server startup",
    long_about = "Bundles AdminJS frontend assets ahead of server startup.

Runs the framework's own bundling step once, then collects the four bundle
files (components, app, global, design-system) into the destination
directory so they can be served statically or uploaded to a CDN. Servers
consuming the output should set ADMIN_JS_SKIP_BUNDLE=true.

Usage:
  adminjs-bundler --destination src/public --components src/components/index.mjs
  adminjs-bundler -d public/admin -c src/components/index.mjs --json
  adminjs-bundler -d public/admin -c src/components/index.ts --node-arg=--loader --node-arg=ts-node/esm

Exit code 0 = all four bundle files exist in the destination directory."
)]
pub struct Args {
    /// Directory the bundled files are written into
    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        env = "ADMINJS_BUNDLER_DESTINATION"
    )]
    pub destination: PathBuf,

    /// Module that registers custom components when loaded
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        env = "ADMINJS_BUNDLER_COMPONENTS"
    )]
    pub components: PathBuf,

    /// Framework scratch directory holding the generated components bundle
    ///
    /// Defaults to `.adminjs`. Set this only if you know what you're doing.
    #[arg(long, value_name = "DIR")]
    pub local_dir: Option<PathBuf>,

    /// Directory holding the standard app and global bundles
    ///
    /// Defaults to `node_modules/adminjs/lib/frontend/assets/scripts`.
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Directory holding the design system bundle
    ///
    /// Defaults to `node_modules/@adminjs/design-system`.
    #[arg(long, value_name = "DIR")]
    pub design_system_dir: Option<PathBuf>,

    /// JSON file with options passed to the framework constructor
    #[arg(long, value_name = "FILE")]
    pub framework_options: Option<PathBuf>,

    /// Extra argument placed before the driver script when spawning node
    ///
    /// Repeat for multiple arguments, e.g.
    /// `--node-arg=--loader --node-arg=ts-node/esm`.
    #[arg(long = "node-arg", value_name = "ARG")]
    pub node_args: Vec<String>,

    /// Print the produced file list as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.destination.as_os_str().is_empty() {
            return Err("Destination directory cannot be empty".to_string());
        }

        if self.components.as_os_str().is_empty() {
            return Err("Components entry file cannot be empty".to_string());
        }

        Ok(())
    }
}
