//! End-to-end pipeline tests over a local registry fixture.
//!
//! These compose the same stages the commands run, in the same order,
//! against a catalog served from a local directory.

use std::path::Path;

use tempfile::TempDir;

use loom_core::project::{
    ensure_project, ensure_project_dirs, global_stylesheet_path, install_component, install_config,
    merge_style_fragment, StyleMerge,
};
use loom_core::registry::{Catalog, CatalogFetcher};
use loom_core::workspace::ScratchWorkspace;
use loom_core::Error;

const BUTTON_FRAGMENT: &str = ".button { padding: 0.5rem 1rem; }\n";
const GLOBALS_TEMPLATE: &str = "* { box-sizing: border-box; }\nbody { margin: 0; }\n";

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A registry tree shaped like the real one: two components, shared
/// styles, framework configs, and non-component clutter.
fn fixture_registry() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        &root.join("package.json"),
        r#"{"name":"registry","version":"0.1.0"}"#,
    );
    write(&root.join("styles/globals.css"), GLOBALS_TEMPLATE);
    write(
        &root.join("tailwind.config.js"),
        "module.exports = {\n  content: [\"./app/**/*.{js,ts,jsx,tsx}\"],\n};\n",
    );
    write(
        &root.join("postcss.config.js"),
        "module.exports = { plugins: { tailwindcss: {}, autoprefixer: {} } };\n",
    );

    write(
        &root.join("button/button.tsx"),
        "export const Button = () => null;\n",
    );
    write(&root.join("button/types.ts"), "export type ButtonProps = {};\n");
    write(&root.join("button/styles.css"), BUTTON_FRAGMENT);
    write(&root.join("card/card.tsx"), "export const Card = () => null;\n");

    // Clutter that must never be offered or installed.
    write(&root.join("node_modules/left-pad/index.js"), "");
    write(&root.join(".github/workflows/ci.yml"), "");

    dir
}

fn fixture_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("package.json"),
        r#"{"name":"consumer","version":"1.0.0"}"#,
    );
    dir
}

async fn fetch_into(registry: &TempDir, workspace: &ScratchWorkspace) -> Catalog {
    let fetcher = CatalogFetcher::from_local(registry.path().to_path_buf());
    fetcher.fetch(workspace.path()).await.unwrap();
    Catalog::new(workspace.path())
}

#[tokio::test]
async fn init_places_styles_config_and_dev_dependencies() {
    let registry = fixture_registry();
    let project = fixture_project();
    let target = project.path();

    ensure_project(target).unwrap();
    ensure_project_dirs(target).await.unwrap();

    let workspace = ScratchWorkspace::create().unwrap();
    let catalog = fetch_into(&registry, &workspace).await;
    install_config(&catalog, target).await.unwrap();
    let scratch = workspace.path().to_path_buf();
    assert!(workspace.cleanup().is_none());

    // Scratch is gone; the project gained the shared artifacts.
    assert!(!scratch.exists());
    assert_eq!(
        std::fs::read_to_string(target.join("styles/globals.css")).unwrap(),
        GLOBALS_TEMPLATE
    );
    assert!(target.join("postcss.config.js").is_file());
    let tailwind = std::fs::read_to_string(target.join("tailwind.config.js")).unwrap();
    assert!(tailwind.contains("\"./src/**/*.{js,ts,jsx,tsx}\""));

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(target.join("package.json")).unwrap())
            .unwrap();
    let deps = manifest["devDependencies"].as_object().unwrap();
    assert_eq!(deps.len(), 3);
    assert_eq!(deps["tailwindcss"], "^3.4.0");
    assert_eq!(deps["postcss"], "^8.4.0");
    assert_eq!(deps["autoprefixer"], "^10.4.0");
    assert_eq!(manifest["name"], "consumer");
    assert_eq!(manifest["version"], "1.0.0");
}

#[tokio::test]
async fn add_installs_the_component_and_merges_styles_once() {
    let registry = fixture_registry();
    let project = fixture_project();
    let target = project.path();

    ensure_project(target).unwrap();
    ensure_project_dirs(target).await.unwrap();

    let workspace = ScratchWorkspace::create().unwrap();
    let catalog = fetch_into(&registry, &workspace).await;

    // Twice, to exercise the idempotence guard and last-write-wins copy.
    for _ in 0..2 {
        let component = catalog.component("button").unwrap();
        install_component(&catalog, "button", target).await.unwrap();
        merge_style_fragment(
            &component.style_fragment(),
            &global_stylesheet_path(target),
        )
        .await
        .unwrap();
    }
    workspace.cleanup();

    assert_eq!(
        std::fs::read(target.join("components/button/button.tsx")).unwrap(),
        std::fs::read(registry.path().join("button/button.tsx")).unwrap()
    );
    assert!(target.join("components/button/types.ts").is_file());

    let globals = std::fs::read_to_string(global_stylesheet_path(target)).unwrap();
    assert_eq!(globals.matches(BUTTON_FRAGMENT).count(), 1);
}

#[tokio::test]
async fn add_unknown_component_fails_without_touching_the_project() {
    let registry = fixture_registry();
    let project = fixture_project();
    let target = project.path();

    ensure_project(target).unwrap();
    ensure_project_dirs(target).await.unwrap();

    let workspace = ScratchWorkspace::create().unwrap();
    let catalog = fetch_into(&registry, &workspace).await;

    let err = install_component(&catalog, "tooltip", target).await.unwrap_err();
    assert!(matches!(err, Error::ComponentNotFound { .. }));

    let entries: Vec<_> = std::fs::read_dir(target.join("components"))
        .unwrap()
        .collect();
    assert!(entries.is_empty());
    workspace.cleanup();
}

#[tokio::test]
async fn missing_manifest_stops_the_pipeline_before_any_write() {
    let bare = TempDir::new().unwrap();

    let err = ensure_project(bare.path()).unwrap_err();
    assert!(matches!(err, Error::NotAProject { .. }));

    // The failed validation wrote nothing.
    assert_eq!(std::fs::read_dir(bare.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn list_flow_installs_only_the_selected_component() {
    let registry = fixture_registry();
    let project = fixture_project();
    let target = project.path();

    let workspace = ScratchWorkspace::create().unwrap();
    let catalog = fetch_into(&registry, &workspace).await;

    let mut names = catalog.component_names().await.unwrap();
    names.sort();
    assert_eq!(names, vec!["button", "card"]);

    // Selection picks button; card stays untouched.
    let selected = "button";
    ensure_project_dirs(target).await.unwrap();
    install_component(&catalog, selected, target).await.unwrap();
    let component = catalog.component(selected).unwrap();
    let merge = merge_style_fragment(
        &component.style_fragment(),
        &global_stylesheet_path(target),
    )
    .await
    .unwrap();
    workspace.cleanup();

    assert_eq!(merge, StyleMerge::Appended);
    assert!(target.join("components/button/button.tsx").is_file());
    assert!(!target.join("components/card").exists());
    let globals = std::fs::read_to_string(global_stylesheet_path(target)).unwrap();
    assert_eq!(globals.matches(BUTTON_FRAGMENT).count(), 1);
}

#[tokio::test]
async fn scratch_workspace_is_gone_after_a_failed_pipeline() {
    let project = fixture_project();
    let target = project.path();
    ensure_project(target).unwrap();
    ensure_project_dirs(target).await.unwrap();

    let workspace = ScratchWorkspace::create().unwrap();
    let scratch = workspace.path().to_path_buf();

    // Fetch fails: the registry directory does not exist.
    let fetcher = CatalogFetcher::from_local(scratch.join("no-such-registry"));
    let err = fetcher.fetch(workspace.path()).await;
    assert!(err.is_err());

    assert!(workspace.cleanup().is_none());
    assert!(!scratch.exists());
}

#[tokio::test]
async fn components_without_fragments_skip_the_style_merge() {
    let registry = fixture_registry();
    let project = fixture_project();
    let target = project.path();

    let workspace = ScratchWorkspace::create().unwrap();
    let catalog = fetch_into(&registry, &workspace).await;

    ensure_project_dirs(target).await.unwrap();
    install_component(&catalog, "card", target).await.unwrap();
    let component = catalog.component("card").unwrap();
    let merge = merge_style_fragment(
        &component.style_fragment(),
        &global_stylesheet_path(target),
    )
    .await
    .unwrap();
    workspace.cleanup();

    assert_eq!(merge, StyleMerge::NoFragment);
    assert!(!global_stylesheet_path(target).exists());
}
