//! Catalog enumeration and component lookup
//!
//! The fetched registry is a plain directory tree: one subdirectory per
//! component, plus shared entries (the styles directory, the registry
//! manifest, dependency caches) that are never offered for install.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{Error, Result};

/// Name of the package manifest file, in the registry and in projects.
pub const MANIFEST_FILE: &str = "package.json";

/// Shared stylesheet directory, in the registry and in projects.
pub const STYLES_DIR: &str = "styles";

/// Global stylesheet file name.
pub const GLOBAL_STYLESHEET: &str = "globals.css";

/// Content-path config file name.
pub const TAILWIND_CONFIG: &str = "tailwind.config.js";

/// Style-pipeline config file name.
pub const POSTCSS_CONFIG: &str = "postcss.config.js";

/// Per-component style fragment file name.
pub const STYLE_FRAGMENT: &str = "styles.css";

/// Per-component type-descriptor file name.
pub const TYPES_DESCRIPTOR: &str = "types.ts";

/// Registry entries that are never components.
const EXCLUDED_ENTRIES: &[&str] = &[STYLES_DIR, "node_modules", MANIFEST_FILE];

/// View over a fetched registry tree.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    /// Open a catalog at the root of a fetched registry.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Catalog root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate installable component names.
    ///
    /// Immediate subdirectories of the catalog root, minus hidden
    /// entries and the known non-component entries. Names come back in
    /// directory-enumeration order; no sort is applied.
    pub async fn component_names(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| Error::io(&self.root, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io(&self.root, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::io(entry.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || EXCLUDED_ENTRIES.contains(&name.as_str()) {
                continue;
            }
            names.push(name);
        }

        Ok(names)
    }

    /// Look up a component by name.
    pub fn component(&self, name: &str) -> Result<Component> {
        let root = self.root.join(name);
        if !root.is_dir() {
            return Err(Error::ComponentNotFound {
                name: name.to_string(),
            });
        }
        Ok(Component {
            name: name.to_string(),
            root,
        })
    }

    /// Path of the global stylesheet template.
    pub fn globals_template(&self) -> PathBuf {
        self.root.join(STYLES_DIR).join(GLOBAL_STYLESHEET)
    }

    /// Path of the content-path config.
    pub fn tailwind_config(&self) -> PathBuf {
        self.root.join(TAILWIND_CONFIG)
    }

    /// Path of the style-pipeline config.
    pub fn postcss_config(&self) -> PathBuf {
        self.root.join(POSTCSS_CONFIG)
    }

    /// Path of the registry manifest.
    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }
}

/// One named component inside the catalog.
#[derive(Debug, Clone)]
pub struct Component {
    name: String,
    root: PathBuf,
}

impl Component {
    /// Component name (its catalog directory name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root of the component's source tree.
    pub fn dir(&self) -> &Path {
        &self.root
    }

    /// Path of the optional style fragment.
    pub fn style_fragment(&self) -> PathBuf {
        self.root.join(STYLE_FRAGMENT)
    }

    /// Path of the optional type descriptor.
    pub fn types_descriptor(&self) -> PathBuf {
        self.root.join(TYPES_DESCRIPTOR)
    }
}

/// Resolves the components a component needs installed alongside it.
pub trait DependencyResolver {
    /// Names of components required by `component`.
    fn required_components(&self, component: &Component) -> Vec<String>;
}

/// Resolver that declares no dependencies.
///
/// Components carry a type descriptor that could name the components
/// they build on, but nothing reads it yet.
// TODO: parse import lines out of the type descriptor and return the
// referenced component names.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDependencies;

impl DependencyResolver for NoDependencies {
    fn required_components(&self, _component: &Component) -> Vec<String> {
        Vec::new()
    }
}
