//! adminjs-bundler - bundles AdminJS frontend assets ahead of server startup.
//!
//! Runs the framework's own bundling step once and collects the four bundle
//! files into a destination directory, ready for static serving or a CDN
//! upload.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match adminjs_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
