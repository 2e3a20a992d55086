//! Command line interface for the bundler.
//!
//! Wires parsed arguments into a [`BundleConfig`](crate::bundler::BundleConfig),
//! runs one bundle operation against the node-backed framework driver, and
//! prints the produced file list.

mod args;

pub use args::Args;

use std::path::Path;

use crate::bundler::{
    BundleConfigBuilder, Bundler, FrameworkOptions, NodeFramework, NodeFrameworkConfig,
};
use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    // Read the options file before touching node so a bad path fails fast.
    let framework_options = match &args.framework_options {
        Some(path) => load_framework_options(path)?,
        None => FrameworkOptions::default(),
    };

    let mut builder = BundleConfigBuilder::new()
        .destination_dir(&args.destination)
        .components_entry_file(&args.components)
        .framework_options(framework_options);
    if let Some(dir) = &args.local_dir {
        builder = builder.local_dir(dir);
    }
    if let Some(dir) = &args.assets_dir {
        builder = builder.assets_dir(dir);
    }
    if let Some(dir) = &args.design_system_dir {
        builder = builder.design_system_dir(dir);
    }
    let config = builder.build()?;

    let framework = NodeFramework::with_config(NodeFrameworkConfig {
        extra_args: args.node_args.clone(),
        ..NodeFrameworkConfig::default()
    })?;

    let files = Bundler::new(config, framework).bundle().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        println!("✨ Successfully built AdminJS bundle files! ✨");
        for file in &files {
            println!("  {} -> {}", file.name, file.destination_path.display());
        }
    }

    Ok(0)
}

/// Reads the framework options bag from a JSON file.
fn load_framework_options(path: &Path) -> Result<FrameworkOptions> {
    let raw = std::fs::read_to_string(path).map_err(|e| CliError::OptionsFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let options = serde_json::from_str(&raw).map_err(|e| CliError::OptionsFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(options)
}
