//! Style fragment merging into the global stylesheet

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{Error, Result};
use crate::registry::catalog::{GLOBAL_STYLESHEET, STYLES_DIR};

/// Outcome of a style merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMerge {
    /// The component ships no style fragment.
    NoFragment,
    /// The fragment text was already present in the global stylesheet.
    AlreadyPresent,
    /// The fragment was appended to the global stylesheet.
    Appended,
}

/// Path of the project's global stylesheet.
pub fn global_stylesheet_path(target: &Path) -> PathBuf {
    target.join(STYLES_DIR).join(GLOBAL_STYLESHEET)
}

/// Merge a component's style fragment into the global stylesheet.
///
/// Merging is append-only and idempotent on exact text: if the fragment
/// already occurs as a literal substring of the stylesheet it is left
/// alone, otherwise it is appended preceded by a newline. The duplicate
/// check is deliberately that coarse; a fragment that was reformatted or
/// reordered since it was first merged will be appended again.
pub async fn merge_style_fragment(fragment: &Path, global: &Path) -> Result<StyleMerge> {
    if !fragment.is_file() {
        return Ok(StyleMerge::NoFragment);
    }

    let fragment_text = fs::read_to_string(fragment)
        .await
        .map_err(|e| Error::io(fragment, e))?;
    let global_text = match fs::read_to_string(global).await {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(Error::io(global, e)),
    };

    if global_text.contains(&fragment_text) {
        return Ok(StyleMerge::AlreadyPresent);
    }

    let merged = format!("{global_text}\n{fragment_text}");
    fs::write(global, merged)
        .await
        .map_err(|e| Error::io(global, e))?;
    Ok(StyleMerge::Appended)
}
