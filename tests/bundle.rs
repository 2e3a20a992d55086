//! End-to-end bundle runs against a stub framework implementation.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use adminjs_bundler::bundler::{
    AdminFramework, BundleConfig, BundleConfigBuilder, Bundler, Error, FrameworkOptions, Result,
};
use async_trait::async_trait;
use tempfile::TempDir;

const STUB_COMPONENTS: &[u8] = b"// components bundle\n";

/// Framework stand-in. Records the calls it receives and writes a stub
/// components bundle where the real framework would.
#[derive(Default)]
struct StubFramework {
    fail_reason: Option<String>,
    skip_output: bool,
    registered: Arc<AtomicBool>,
    initialized: Arc<AtomicBool>,
    received_options: Arc<Mutex<Option<FrameworkOptions>>>,
}

#[async_trait]
impl AdminFramework for StubFramework {
    async fn register_components(&self, entry: &Path) -> Result<()> {
        assert!(entry.is_absolute(), "entry must be resolved: {entry:?}");
        self.registered.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn initialize_and_bundle(
        &self,
        options: &FrameworkOptions,
        output: &Path,
    ) -> Result<()> {
        self.initialized.store(true, Ordering::SeqCst);
        *self.received_options.lock().unwrap() = Some(options.clone());

        if let Some(reason) = &self.fail_reason {
            return Err(Error::FrameworkInit {
                reason: reason.clone(),
            });
        }
        if !self.skip_output {
            if let Some(parent) = output.parent() {
                tokio::fs::create_dir_all(parent).await.unwrap();
            }
            tokio::fs::write(output, STUB_COMPONENTS).await.unwrap();
        }
        Ok(())
    }
}

/// Lays out a fake project tree: the components entry module plus the three
/// standard bundle sources the framework packages would ship.
struct Project {
    root: TempDir,
}

impl Project {
    fn new() -> Self {
        let project = Self {
            root: tempfile::tempdir().unwrap(),
        };
        project.write("src/components/index.mjs", b"export default {};\n");
        project.write("assets/app-bundle.production.js", b"app code\n");
        project.write("assets/global-bundle.production.js", b"global code\n");
        project.write("design-system/bundle.production.js", b"design code\n");
        project
    }

    fn write(&self, rel: &str, contents: &[u8]) {
        let path = self.path(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    fn config_builder(&self) -> BundleConfigBuilder {
        BundleConfigBuilder::new()
            .destination_dir(self.path("public"))
            .components_entry_file(self.path("src/components/index.mjs"))
            .local_dir(self.path(".adminjs"))
            .assets_dir(self.path("assets"))
            .design_system_dir(self.path("design-system"))
    }

    fn config(&self) -> BundleConfig {
        self.config_builder().build().unwrap()
    }
}

#[tokio::test]
async fn produces_four_files_in_fixed_order() {
    let project = Project::new();

    let files = Bundler::new(project.config(), StubFramework::default())
        .bundle()
        .await
        .unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "components.bundle.js",
            "app.bundle.js",
            "global.bundle.js",
            "design-system.bundle.js"
        ]
    );
    for file in &files {
        assert!(file.destination_path.starts_with(project.path("public")));
        assert!(file.destination_path.is_file(), "{} missing", file.name);
    }
}

#[tokio::test]
async fn copies_standard_bundle_contents() {
    let project = Project::new();

    Bundler::new(project.config(), StubFramework::default())
        .bundle()
        .await
        .unwrap();

    assert_eq!(
        std::fs::read(project.path("public/app.bundle.js")).unwrap(),
        b"app code\n"
    );
    assert_eq!(
        std::fs::read(project.path("public/global.bundle.js")).unwrap(),
        b"global code\n"
    );
    assert_eq!(
        std::fs::read(project.path("public/design-system.bundle.js")).unwrap(),
        b"design code\n"
    );
}

#[tokio::test]
async fn moves_the_generated_components_bundle() {
    let project = Project::new();

    Bundler::new(project.config(), StubFramework::default())
        .bundle()
        .await
        .unwrap();

    assert_eq!(
        std::fs::read(project.path("public/components.bundle.js")).unwrap(),
        STUB_COMPONENTS
    );
    // Renamed, not copied: the scratch file is gone afterwards.
    assert!(!project.path(".adminjs/bundle.js").exists());
}

#[tokio::test]
async fn creates_nested_destination_directories() {
    let project = Project::new();
    let config = project
        .config_builder()
        .destination_dir(project.path("public/nested/admin"))
        .build()
        .unwrap();

    Bundler::new(config, StubFramework::default())
        .bundle()
        .await
        .unwrap();

    assert!(project.path("public/nested/admin/app.bundle.js").is_file());
}

#[tokio::test]
async fn second_run_overwrites_previous_output() {
    let project = Project::new();
    Bundler::new(project.config(), StubFramework::default())
        .bundle()
        .await
        .unwrap();

    project.write("assets/app-bundle.production.js", b"app v2\n");
    Bundler::new(project.config(), StubFramework::default())
        .bundle()
        .await
        .unwrap();

    assert_eq!(
        std::fs::read(project.path("public/app.bundle.js")).unwrap(),
        b"app v2\n"
    );
}

#[tokio::test]
async fn framework_options_pass_through_untouched() {
    let project = Project::new();
    let mut options = FrameworkOptions::new();
    options.insert("rootPath".to_string(), serde_json::json!("/admin"));
    options.insert("branding".to_string(), serde_json::json!({"companyName": "Acme"}));
    let config = project
        .config_builder()
        .framework_options(options.clone())
        .build()
        .unwrap();

    let stub = StubFramework::default();
    let received = stub.received_options.clone();
    Bundler::new(config, stub).bundle().await.unwrap();

    assert_eq!(received.lock().unwrap().as_ref(), Some(&options));
}

#[tokio::test]
async fn missing_entry_module_stops_the_run_before_any_work() {
    let project = Project::new();
    let config = project
        .config_builder()
        .components_entry_file(project.path("src/missing.mjs"))
        .build()
        .unwrap();

    let stub = StubFramework::default();
    let registered = stub.registered.clone();
    let initialized = stub.initialized.clone();
    let err = Bundler::new(config, stub).bundle().await.unwrap_err();

    assert!(matches!(err, Error::ModuleLoad { .. }), "got {err:?}");
    assert!(!registered.load(Ordering::SeqCst));
    assert!(!initialized.load(Ordering::SeqCst));
    // Nothing was copied; the destination was not even created.
    assert!(!project.path("public").exists());
}

#[tokio::test]
async fn blocked_destination_is_a_directory_create_error() {
    let project = Project::new();
    // Occupy the destination path with a regular file.
    project.write("public", b"not a directory\n");

    let stub = StubFramework::default();
    let registered = stub.registered.clone();
    let initialized = stub.initialized.clone();
    let err = Bundler::new(project.config(), stub).bundle().await.unwrap_err();

    assert!(matches!(err, Error::DirectoryCreate { .. }), "got {err:?}");
    // Registration runs before the directory step; framework init does not.
    assert!(registered.load(Ordering::SeqCst));
    assert!(!initialized.load(Ordering::SeqCst));
    // The blocking file is untouched and no bundle was produced anywhere.
    assert_eq!(
        std::fs::read(project.path("public")).unwrap(),
        b"not a directory\n"
    );
    assert!(!project.path(".adminjs/bundle.js").exists());
}

#[tokio::test]
async fn missing_standard_source_stops_the_run_before_framework_init() {
    let project = Project::new();
    std::fs::remove_file(project.path("assets/global-bundle.production.js")).unwrap();

    let stub = StubFramework::default();
    let initialized = stub.initialized.clone();
    let err = Bundler::new(project.config(), stub)
        .bundle()
        .await
        .unwrap_err();

    match err {
        Error::FileCopy { name, .. } => assert_eq!(name, "global.bundle.js"),
        other => panic!("expected FileCopy, got {other:?}"),
    }
    assert!(!initialized.load(Ordering::SeqCst));
    assert!(!project.path("public/components.bundle.js").exists());
}

#[tokio::test]
async fn framework_failure_propagates_with_its_reason() {
    let project = Project::new();
    let stub = StubFramework {
        fail_reason: Some("webpack exploded".to_string()),
        ..Default::default()
    };

    let err = Bundler::new(project.config(), stub)
        .bundle()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::FrameworkInit { .. }), "got {err:?}");
    assert!(err.to_string().contains("webpack exploded"));
    // The standard copies had already happened; they are left in place.
    assert!(project.path("public/app.bundle.js").is_file());
    assert!(!project.path("public/components.bundle.js").exists());
}

#[tokio::test]
async fn missing_generated_bundle_is_a_rename_error() {
    let project = Project::new();
    let stub = StubFramework {
        skip_output: true,
        ..Default::default()
    };

    let err = Bundler::new(project.config(), stub)
        .bundle()
        .await
        .unwrap_err();

    match err {
        Error::FileRename { name, .. } => assert_eq!(name, "components.bundle.js"),
        other => panic!("expected FileRename, got {other:?}"),
    }
}

#[tokio::test]
async fn names_do_not_depend_on_directory_layout() {
    let project = Project::new();
    project.write("vendor/scripts/app-bundle.production.js", b"app\n");
    project.write("vendor/scripts/global-bundle.production.js", b"global\n");
    project.write("vendor/ds/bundle.production.js", b"ds\n");
    let config = project
        .config_builder()
        .assets_dir(project.path("vendor/scripts"))
        .design_system_dir(project.path("vendor/ds"))
        .build()
        .unwrap();

    let files = Bundler::new(config, StubFramework::default())
        .bundle()
        .await
        .unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "components.bundle.js",
            "app.bundle.js",
            "global.bundle.js",
            "design-system.bundle.js"
        ]
    );
}
