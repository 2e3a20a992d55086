//! Node-backed driver for the real framework bundler.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::Mutex;
use which::which;

use super::{AdminFramework, FrameworkOptions};
use crate::bail;
use crate::bundler::error::{Error, Result};

/// ESM driver executed by node. Imports the recorded entry module, then
/// constructs the framework and awaits its initialization.
const DRIVER_SCRIPT: &str = include_str!("driver.mjs");

const DRIVER_FILE_NAME: &str = "adminjs-bundler-driver.mjs";

// Exit code the driver reserves for failures inside the entry module.
const ENTRY_LOAD_EXIT_CODE: i32 = 3;

/// Invocation knobs for the node-driven bundling step.
///
/// The two environment values are set on the child process only; the
/// bundler never mutates its own environment.
#[derive(Debug, Clone)]
pub struct NodeFrameworkConfig {
    /// Value for `NODE_ENV` in the child process.
    pub node_env: String,

    /// Value for `ADMIN_JS_SKIP_BUNDLE` in the child process. Kept `false`
    /// so the framework performs a fresh bundle instead of skipping it.
    pub skip_bundle: bool,

    /// Extra arguments placed before the driver script, e.g.
    /// `["--loader", "ts-node/esm"]` for TypeScript entry modules.
    pub extra_args: Vec<String>,
}

impl Default for NodeFrameworkConfig {
    fn default() -> Self {
        Self {
            node_env: "production".to_string(),
            skip_bundle: false,
            extra_args: Vec::new(),
        }
    }
}

/// [`AdminFramework`] implementation spawning the real framework in node.
///
/// One node process per run: the driver imports the components entry module
/// recorded by
/// [`register_components`](AdminFramework::register_components) and then
/// awaits the framework's initialization, the same sequence a server
/// process performs at startup. The driver file is staged inside the
/// framework scratch directory so the bare framework import resolves
/// against the target project's `node_modules`, and removed afterwards.
///
/// Failures inside the entry module surface as
/// [`Error::ModuleLoad`]; everything else the subprocess reports surfaces
/// as [`Error::FrameworkInit`].
pub struct NodeFramework {
    /// Path to the node executable.
    node_path: PathBuf,

    /// Invocation configuration.
    config: NodeFrameworkConfig,

    /// Entry module recorded at registration time.
    entry: Mutex<Option<PathBuf>>,
}

impl NodeFramework {
    /// Creates a framework driver by locating node on PATH.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if node is not installed or not in
    /// PATH.
    pub fn new() -> Result<Self> {
        Self::with_config(NodeFrameworkConfig::default())
    }

    /// Creates a framework driver with a specific configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if node is not installed or not in
    /// PATH.
    pub fn with_config(config: NodeFrameworkConfig) -> Result<Self> {
        let node_path = which("node").map_err(|_| Error::NodeNotFound)?;
        Ok(Self {
            node_path,
            config,
            entry: Mutex::new(None),
        })
    }

    /// Creates a framework driver with an explicit node path.
    ///
    /// Useful for testing or when node is not in PATH.
    pub fn with_node_path(node_path: PathBuf) -> Self {
        Self {
            node_path,
            config: NodeFrameworkConfig::default(),
            entry: Mutex::new(None),
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &NodeFrameworkConfig {
        &self.config
    }
}

#[async_trait]
impl AdminFramework for NodeFramework {
    async fn register_components(&self, entry: &Path) -> Result<()> {
        // Recorded, not loaded here: the driver imports the module inside
        // the same node process that bundles, so registration state survives
        // into the framework's initialization.
        *self.entry.lock().await = Some(entry.to_path_buf());
        Ok(())
    }

    async fn initialize_and_bundle(
        &self,
        options: &FrameworkOptions,
        output: &Path,
    ) -> Result<()> {
        let Some(entry) = self.entry.lock().await.take() else {
            bail!("initialize_and_bundle called before register_components");
        };

        let scratch_dir = output.parent().ok_or_else(|| Error::FrameworkInit {
            reason: format!("output path {output:?} has no parent directory"),
        })?;

        // The driver must live inside the project tree: node resolves the
        // bare framework import relative to the driver's own location.
        tokio::fs::create_dir_all(scratch_dir)
            .await
            .map_err(|e| Error::FrameworkInit {
                reason: format!("failed to prepare {scratch_dir:?}: {e}"),
            })?;
        let driver_path = scratch_dir.join(DRIVER_FILE_NAME);
        tokio::fs::write(&driver_path, DRIVER_SCRIPT)
            .await
            .map_err(|e| Error::FrameworkInit {
                reason: format!("failed to stage driver script at {driver_path:?}: {e}"),
            })?;

        let options_json = serde_json::to_string(options).map_err(|e| Error::FrameworkInit {
            reason: format!("framework options are not serializable: {e}"),
        })?;

        log::debug!("spawning {:?} for framework bundling", self.node_path);
        let result = Command::new(&self.node_path)
            .args(&self.config.extra_args)
            .arg(&driver_path)
            .arg(&entry)
            .arg(options_json)
            .env("NODE_ENV", &self.config.node_env)
            .env(
                "ADMIN_JS_SKIP_BUNDLE",
                if self.config.skip_bundle { "true" } else { "false" },
            )
            .output()
            .await;

        // Best-effort cleanup; the scratch directory itself belongs to the
        // framework.
        let _ = tokio::fs::remove_file(&driver_path).await;

        let out = result.map_err(|e| Error::FrameworkInit {
            reason: format!("failed to execute node: {e}"),
        })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("node exited without error output ({})", out.status)
            } else {
                stderr
            };
            if out.status.code() == Some(ENTRY_LOAD_EXIT_CODE) {
                return Err(Error::ModuleLoad {
                    path: entry,
                    reason,
                });
            }
            return Err(Error::FrameworkInit { reason });
        }

        if !out.stdout.is_empty() {
            log::debug!(
                "framework output: {}",
                String::from_utf8_lossy(&out.stdout).trim()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_production() {
        let config = NodeFrameworkConfig::default();
        assert_eq!(config.node_env, "production");
        assert!(!config.skip_bundle);
        assert!(config.extra_args.is_empty());
    }

    #[tokio::test]
    async fn initialize_fails_when_node_is_missing() {
        let framework = NodeFramework::with_node_path(PathBuf::from("/nonexistent/node"));
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("index.mjs");
        tokio::fs::write(&entry, "export default {};\n").await.unwrap();

        framework.register_components(&entry).await.unwrap();
        let result = framework
            .initialize_and_bundle(
                &FrameworkOptions::default(),
                &dir.path().join(".adminjs/bundle.js"),
            )
            .await;

        assert!(matches!(result, Err(Error::FrameworkInit { .. })));
    }

    #[tokio::test]
    async fn failure_without_stderr_reports_the_exit_status() {
        // `false` exits non-zero without printing anything.
        let framework = NodeFramework::with_node_path(which("false").unwrap());
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("index.mjs");
        tokio::fs::write(&entry, "export default {};\n").await.unwrap();

        framework.register_components(&entry).await.unwrap();
        let err = framework
            .initialize_and_bundle(
                &FrameworkOptions::default(),
                &dir.path().join(".adminjs/bundle.js"),
            )
            .await
            .unwrap_err();

        match err {
            Error::FrameworkInit { reason } => {
                assert!(reason.contains("exit"), "reason: {reason:?}")
            }
            other => panic!("expected FrameworkInit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn initialize_requires_prior_registration() {
        let framework = NodeFramework::with_node_path(PathBuf::from("/nonexistent/node"));
        let dir = tempfile::tempdir().unwrap();

        let result = framework
            .initialize_and_bundle(&FrameworkOptions::default(), &dir.path().join("bundle.js"))
            .await;

        assert!(matches!(result, Err(Error::GenericError(_))));
    }

    #[tokio::test]
    async fn registration_records_the_entry_module() {
        let framework = NodeFramework::with_node_path(PathBuf::from("/nonexistent/node"));

        framework
            .register_components(Path::new("/srv/app/src/components/index.mjs"))
            .await
            .unwrap();

        assert_eq!(
            framework.entry.lock().await.as_deref(),
            Some(Path::new("/srv/app/src/components/index.mjs"))
        );
    }
}
