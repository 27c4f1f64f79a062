//! Registry fetching from the remote repository or a local directory
//!
//! Remote registries are fetched with a shallow (depth-1) `git clone`
//! into the scratch workspace; local registries are copied in. Both
//! paths empty the destination first and leave the same tree shape, so
//! every later stage is source-agnostic.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::process::Command;
use url::Url;

use crate::error::{Error, Result};
use crate::fsops;
use crate::product::RegistryConfig;

/// Registry source - either remote repository or local directory
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Remote(Url),
    Local(PathBuf),
}

impl CatalogSource {
    /// Create a remote registry source from a product config
    pub fn from_config<C: RegistryConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.registry_url_env())
            .unwrap_or_else(|_| config.default_registry_url().to_string());
        let url = Url::parse(&url_str).map_err(|e| Error::InvalidRegistryUrl {
            url: url_str.clone(),
            source: e,
        })?;
        Ok(Self::Remote(url))
    }

    /// Create a local registry source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Registry fetcher - materializes the catalog into a destination directory
pub struct CatalogFetcher {
    source: CatalogSource,
}

impl CatalogFetcher {
    /// Create a fetcher over an explicit source
    pub fn new(source: CatalogSource) -> Self {
        Self { source }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: RegistryConfig>(config: &C) -> Result<Self> {
        Ok(Self::new(CatalogSource::from_config(config)?))
    }

    /// Create a fetcher for a local registry directory
    pub fn from_local(path: PathBuf) -> Self {
        Self::new(CatalogSource::local(path))
    }

    /// Get the registry source
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Fetch the registry into `dest`.
    ///
    /// The destination is emptied first, so a stale tree left behind by
    /// an interrupted run cannot leak into the new fetch. All writes are
    /// scoped to `dest`.
    pub async fn fetch(&self, dest: &Path) -> Result<()> {
        reset_dir(dest).await?;
        match &self.source {
            CatalogSource::Remote(url) => clone_shallow(url, dest).await,
            CatalogSource::Local(path) => {
                if !path.is_dir() {
                    return Err(Error::MissingSourceFile {
                        path: path.clone(),
                    });
                }
                fsops::copy_tree(path, dest).await.map(|_| ())
            }
        }
    }
}

/// Remove and recreate a directory so the fetch starts from empty.
async fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .await
            .map_err(|e| Error::io(dir, e))?;
    }
    fs::create_dir_all(dir).await.map_err(|e| Error::io(dir, e))
}

/// Shallow-clone `url` into `dest` with the system git.
async fn clone_shallow(url: &Url, dest: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("clone")
        .arg("--depth")
        .arg("1")
        .arg(url.as_str())
        .arg(dest)
        .output()
        .await
        .map_err(|e| Error::GitUnavailable { source: e })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr
            .lines()
            .last()
            .unwrap_or("git exited with an error")
            .to_string();
        return Err(Error::CloneFailed {
            url: url.to_string(),
            detail,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn local_registry() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("button")).unwrap();
        std::fs::write(dir.path().join("button/button.tsx"), "export {};\n").unwrap();
        std::fs::write(dir.path().join("package.json"), "{}\n").unwrap();
        dir
    }

    #[tokio::test]
    async fn local_fetch_copies_the_registry_tree() {
        let registry = local_registry();
        let dest = TempDir::new().unwrap();
        let scratch = dest.path().join("catalog");

        let fetcher = CatalogFetcher::from_local(registry.path().to_path_buf());
        fetcher.fetch(&scratch).await.unwrap();

        assert!(scratch.join("button/button.tsx").is_file());
        assert!(scratch.join("package.json").is_file());
    }

    #[tokio::test]
    async fn fetch_empties_a_dirty_destination_first() {
        let registry = local_registry();
        let dest = TempDir::new().unwrap();
        let scratch = dest.path().join("catalog");

        // Simulate debris from a prior killed run.
        std::fs::create_dir_all(scratch.join("half-cloned")).unwrap();
        std::fs::write(scratch.join("half-cloned/file"), "stale").unwrap();

        let fetcher = CatalogFetcher::from_local(registry.path().to_path_buf());
        fetcher.fetch(&scratch).await.unwrap();

        assert!(!scratch.join("half-cloned").exists());
        assert!(scratch.join("button/button.tsx").is_file());
    }

    #[tokio::test]
    async fn missing_local_registry_is_an_error() {
        let dest = TempDir::new().unwrap();
        let fetcher = CatalogFetcher::from_local(PathBuf::from("/nonexistent/registry"));
        let err = fetcher.fetch(&dest.path().join("catalog")).await.unwrap_err();
        assert!(matches!(err, Error::MissingSourceFile { .. }));
    }

    #[test]
    fn remote_source_rejects_invalid_urls() {
        #[derive(Clone)]
        struct BadConfig;
        impl RegistryConfig for BadConfig {
            fn name(&self) -> &'static str {
                "bad"
            }
            fn display_name(&self) -> &'static str {
                "bad"
            }
            fn default_registry_url(&self) -> &'static str {
                "not a url"
            }
            fn registry_url_env(&self) -> &'static str {
                "LOOM_TEST_UNSET_REGISTRY_URL"
            }
            fn docs_url(&self) -> &'static str {
                ""
            }
            fn cli_description(&self) -> &'static str {
                ""
            }
            fn upgrade_command(&self) -> &'static str {
                ""
            }
            fn next_steps(&self, _dir: &Path) -> Vec<String> {
                Vec::new()
            }
        }

        let err = CatalogSource::from_config(&BadConfig).unwrap_err();
        assert!(matches!(err, Error::InvalidRegistryUrl { .. }));
    }
}
