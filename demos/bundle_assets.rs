//! Bundles the AdminJS frontend assets of the project in the current
//! directory.
//!
//! Run from a project with `adminjs` installed under `node_modules`:
//!
//! ```sh
//! cargo run --example bundle_assets -- src/public src/components/index.mjs
//! ```

use adminjs_bundler::bundler::{BundleConfigBuilder, Bundler, NodeFramework};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let destination = args.next().unwrap_or_else(|| "src/public".to_string());
    let entry = args
        .next()
        .unwrap_or_else(|| "src/components/index.mjs".to_string());

    let config = BundleConfigBuilder::new()
        .destination_dir(&destination)
        .components_entry_file(&entry)
        .build()?;

    let files = Bundler::new(config, NodeFramework::new()?).bundle().await?;

    println!("✨ Successfully built AdminJS bundle files! ✨");
    for file in &files {
        println!("  {} -> {}", file.name, file.destination_path.display());
    }

    Ok(())
}
