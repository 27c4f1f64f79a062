//! Shared filesystem helpers.

use std::path::Path;

use tokio::fs;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Recursively copy `src` into `dest`, returning the relative paths of
/// every file copied. Existing destination files are overwritten.
pub(crate) async fn copy_tree(src: &Path, dest: &Path) -> Result<Vec<String>> {
    let mut copied = Vec::new();

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| src.to_path_buf());
            Error::io(path, e.into())
        })?;

        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            // the root itself
            continue;
        }

        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .await
                .map_err(|e| Error::io(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::io(parent, e))?;
            }
            fs::copy(entry.path(), &target)
                .await
                .map_err(|e| Error::io(entry.path(), e))?;
            copied.push(rel.to_string_lossy().into_owned());
        }
    }

    Ok(copied)
}
