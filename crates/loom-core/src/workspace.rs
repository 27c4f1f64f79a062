//! Per-invocation scratch workspace for the fetched registry.

use std::path::Path;

use tempfile::TempDir;

use crate::error::{Error, Result};

/// Ephemeral directory holding one invocation's copy of the registry.
///
/// Created at the start of a command and released at the end of it,
/// success or failure. The value owns the directory: dropping it removes
/// the tree, so an early return cannot leak it. [`ScratchWorkspace::cleanup`]
/// is the explicit variant that reports removal failures instead of
/// swallowing them.
///
/// Every invocation gets a unique path, so two concurrent runs never
/// contend for the same scratch directory.
#[derive(Debug)]
pub struct ScratchWorkspace {
    dir: TempDir,
}

impl ScratchWorkspace {
    /// Create a fresh workspace under the system temp directory.
    pub fn create() -> Result<Self> {
        let dir = TempDir::with_prefix("loom-").map_err(|e| Error::io(std::env::temp_dir(), e))?;
        Ok(Self { dir })
    }

    /// Path of the workspace root; the registry is fetched here.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the workspace, returning a warning message on failure.
    ///
    /// A failed removal never aborts the command; callers log the
    /// returned message and move on.
    pub fn cleanup(self) -> Option<String> {
        let path = self.dir.path().to_path_buf();
        match self.dir.close() {
            Ok(()) => None,
            Err(e) => Some(format!("could not remove {}: {}", path.display(), e)),
        }
    }
}
