//! Shared config installation and package manifest updates

use std::path::Path;

use serde_json::{Map, Value};
use tokio::fs;

use crate::error::{Error, Result};
use crate::registry::catalog::{
    Catalog, GLOBAL_STYLESHEET, MANIFEST_FILE, POSTCSS_CONFIG, STYLES_DIR, TAILWIND_CONFIG,
};

/// Dev-time packages every configured project needs, with their pinned ranges.
pub const REQUIRED_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("tailwindcss", "^3.4.0"),
    ("postcss", "^8.4.0"),
    ("autoprefixer", "^10.4.0"),
];

/// Glob prefix the registry's content config ships with.
const REGISTRY_CONTENT_PREFIX: &str = "./app/";

/// Glob prefix installed projects scan instead.
const PROJECT_CONTENT_PREFIX: &str = "./src/";

/// Install the shared style and framework config files into `target`.
///
/// Copies the global stylesheet template and both framework configs out
/// of the fetched catalog, retargets the content globs at the project's
/// source directory, and merges the required dev dependencies into the
/// project manifest. Enclosing directories are created as needed.
pub async fn install_config(catalog: &Catalog, target: &Path) -> Result<()> {
    let styles_dir = target.join(STYLES_DIR);
    fs::create_dir_all(&styles_dir)
        .await
        .map_err(|e| Error::io(&styles_dir, e))?;
    copy_required(
        &catalog.globals_template(),
        &styles_dir.join(GLOBAL_STYLESHEET),
    )
    .await?;

    // The pipeline config is copied verbatim.
    copy_required(&catalog.postcss_config(), &target.join(POSTCSS_CONFIG)).await?;

    // The content-path config is the one file rewritten on the way in.
    let content_config = read_required(&catalog.tailwind_config()).await?;
    let dest = target.join(TAILWIND_CONFIG);
    fs::write(&dest, retarget_content_glob(&content_config))
        .await
        .map_err(|e| Error::io(&dest, e))?;

    merge_dev_dependencies(&target.join(MANIFEST_FILE)).await
}

/// Point the content globs at the project's source directory.
///
/// The registry config scans the registry's own `app` tree; installed
/// projects keep their sources under `src`. This is a plain text
/// substitution of the glob prefix and is a no-op on text that does not
/// contain it.
pub fn retarget_content_glob(config: &str) -> String {
    config.replace(REGISTRY_CONTENT_PREFIX, PROJECT_CONTENT_PREFIX)
}

/// Merge the required dev dependencies into the project manifest.
///
/// All other manifest fields pass through untouched. An existing entry
/// for one of the required packages is overwritten with the pinned
/// range.
pub async fn merge_dev_dependencies(manifest_path: &Path) -> Result<()> {
    let content = fs::read_to_string(manifest_path)
        .await
        .map_err(|e| Error::io(manifest_path, e))?;
    let mut manifest: Map<String, Value> =
        serde_json::from_str(&content).map_err(|e| Error::ManifestParse {
            path: manifest_path.to_path_buf(),
            source: e,
        })?;

    let deps = manifest
        .entry("devDependencies".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !deps.is_object() {
        *deps = Value::Object(Map::new());
    }
    if let Value::Object(deps) = deps {
        for (name, range) in REQUIRED_DEV_DEPENDENCIES {
            deps.insert((*name).to_string(), Value::String((*range).to_string()));
        }
    }

    let mut output = serde_json::to_string_pretty(&manifest).map_err(|e| Error::ManifestParse {
        path: manifest_path.to_path_buf(),
        source: e,
    })?;
    output.push('\n');
    fs::write(manifest_path, output)
        .await
        .map_err(|e| Error::io(manifest_path, e))
}

async fn copy_required(src: &Path, dest: &Path) -> Result<()> {
    if !src.is_file() {
        return Err(Error::MissingSourceFile {
            path: src.to_path_buf(),
        });
    }
    fs::copy(src, dest).await.map_err(|e| Error::io(src, e))?;
    Ok(())
}

async fn read_required(src: &Path) -> Result<String> {
    if !src.is_file() {
        return Err(Error::MissingSourceFile {
            path: src.to_path_buf(),
        });
    }
    fs::read_to_string(src).await.map_err(|e| Error::io(src, e))
}
