//! Configuration for bundle runs.
//!
//! [`BundleConfig`] carries everything one run needs: where the bundled
//! files go, which module registers custom components, where the framework
//! packages keep their prebuilt bundles, and the options bag handed to the
//! framework constructor.

mod builder;
mod core;

pub use builder::BundleConfigBuilder;
pub use core::{
    BundleConfig, DEFAULT_ASSETS_DIR, DEFAULT_DESIGN_SYSTEM_DIR, DEFAULT_LOCAL_DIR,
};
