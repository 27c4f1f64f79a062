//! Target project validation

use std::path::Path;

use crate::error::{Error, Result};
use crate::registry::catalog::MANIFEST_FILE;

/// Confirm `target` is a project root before any mutation.
///
/// The only requirement is a package manifest at the top level. The
/// check is read-only and runs before network access or filesystem
/// writes in the mutating commands.
pub fn ensure_project(target: &Path) -> Result<()> {
    if target.join(MANIFEST_FILE).is_file() {
        Ok(())
    } else {
        Err(Error::NotAProject {
            path: target.to_path_buf(),
        })
    }
}
