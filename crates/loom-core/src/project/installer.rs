//! Component installation into the target project

use std::path::Path;

use tokio::fs;

use crate::error::{Error, Result};
use crate::fsops;
use crate::registry::catalog::{Catalog, STYLES_DIR};

/// Directory components are installed under, relative to the project root.
pub const COMPONENTS_DIR: &str = "components";

/// Create the directory skeleton the install stages rely on.
pub async fn ensure_project_dirs(target: &Path) -> Result<()> {
    for dir in [COMPONENTS_DIR, STYLES_DIR] {
        let path = target.join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;
    }
    Ok(())
}

/// Copy one component's tree into the target project.
///
/// The whole component directory lands under `components/<name>`,
/// parents created as needed. Existing files at the destination are
/// overwritten; last write wins. Returns the relative paths of the
/// files that were copied.
pub async fn install_component(
    catalog: &Catalog,
    name: &str,
    target: &Path,
) -> Result<Vec<String>> {
    let component = catalog.component(name)?;
    let dest = target.join(COMPONENTS_DIR).join(component.name());
    fsops::copy_tree(component.dir(), &dest).await
}
