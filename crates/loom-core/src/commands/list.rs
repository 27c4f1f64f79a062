//! `list` - browse the catalog and optionally install a component

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use super::{
    fetch_registry, install_with_styles, release_workspace, report_failure, setup_fetcher,
    CommandArgs, CommandOutcome,
};
use crate::error::Error;
use crate::product::RegistryConfig;
use crate::project::ensure_project_dirs;
use crate::registry::CatalogFetcher;
use crate::workspace::ScratchWorkspace;

/// Browse the catalog interactively; install the picked component.
pub async fn list<C: RegistryConfig>(config: &C, args: &CommandArgs) -> Result<CommandOutcome> {
    cliclack::intro(config.display_name())?;

    let target = std::env::current_dir().context("failed to resolve the working directory")?;

    let fetcher = match setup_fetcher(config, args) {
        Ok(fetcher) => fetcher,
        Err(e) => return Ok(report_failure(&e)?),
    };
    let workspace = match ScratchWorkspace::create() {
        Ok(workspace) => workspace,
        Err(e) => return Ok(report_failure(&e)?),
    };

    let result = browse_catalog(&fetcher, &workspace, &target).await;
    release_workspace(workspace)?;

    match result {
        Ok(Some(name)) => {
            cliclack::outro(format!("{name} is ready"))?;
            Ok(CommandOutcome::Completed)
        }
        Ok(None) => {
            cliclack::outro("Nothing installed")?;
            Ok(CommandOutcome::Completed)
        }
        Err(e) => Ok(report_failure(&e)?),
    }
}

/// The list pipeline: fetch, enumerate, prompt, optionally install.
///
/// Returns the installed component's name, or `None` when the catalog
/// is empty or the prompt was abandoned - neither is an error.
async fn browse_catalog(
    fetcher: &CatalogFetcher,
    workspace: &ScratchWorkspace,
    target: &Path,
) -> crate::error::Result<Option<String>> {
    let catalog = fetch_registry(fetcher, workspace).await?;

    let names = catalog.component_names().await?;
    if names.is_empty() {
        cliclack::log::info("No components available")?;
        return Ok(None);
    }

    let mut select = cliclack::select(format!("Select a component ({} available)", names.len()));
    for name in &names {
        select = select.item(name.clone(), name, "");
    }

    let choice: String = match select.interact() {
        Ok(choice) => choice,
        // ESC or Ctrl+C: an abandoned browse is not an error.
        Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(None),
        Err(e) => return Err(Error::Terminal(e)),
    };

    ensure_project_dirs(target).await?;
    install_with_styles(&catalog, &choice, target).await?;
    Ok(Some(choice))
}
