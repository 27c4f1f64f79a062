//! `add` - install one named component into the project

use std::path::Path;

use anyhow::{Context, Result};

use super::{
    fetch_registry, install_with_styles, release_workspace, report_failure, setup_fetcher,
    warn_on_version_mismatch, CommandArgs, CommandOutcome,
};
use crate::product::RegistryConfig;
use crate::project::{ensure_project, ensure_project_dirs};
use crate::registry::{CatalogFetcher, DependencyResolver, NoDependencies};
use crate::workspace::ScratchWorkspace;

/// Install the named component and merge its styles.
pub async fn add<C: RegistryConfig>(
    config: &C,
    cli_version: &str,
    args: &CommandArgs,
    component: &str,
) -> Result<CommandOutcome> {
    cliclack::intro(config.display_name())?;

    let target = std::env::current_dir().context("failed to resolve the working directory")?;

    // Validation runs before any mutation or network access.
    if let Err(e) = ensure_project(&target) {
        return Ok(report_failure(&e)?);
    }
    if let Err(e) = ensure_project_dirs(&target).await {
        return Ok(report_failure(&e)?);
    }

    let fetcher = match setup_fetcher(config, args) {
        Ok(fetcher) => fetcher,
        Err(e) => return Ok(report_failure(&e)?),
    };
    let workspace = match ScratchWorkspace::create() {
        Ok(workspace) => workspace,
        Err(e) => return Ok(report_failure(&e)?),
    };

    let result = add_component(config, cli_version, &fetcher, &workspace, &target, component).await;
    release_workspace(workspace)?;

    match result {
        Ok(()) => {
            cliclack::outro(format!("{component} is ready"))?;
            Ok(CommandOutcome::Completed)
        }
        Err(e) => Ok(report_failure(&e)?),
    }
}

/// The add pipeline: fetch, resolve dependencies, install, merge styles.
async fn add_component<C: RegistryConfig>(
    config: &C,
    cli_version: &str,
    fetcher: &CatalogFetcher,
    workspace: &ScratchWorkspace,
    target: &Path,
    name: &str,
) -> crate::error::Result<()> {
    let catalog = fetch_registry(fetcher, workspace).await?;
    warn_on_version_mismatch(config, cli_version, &catalog)?;

    let component = catalog.component(name)?;

    // Dependency stage: the resolver is a no-op today, but the stage is
    // part of the pipeline so a real resolver can slot in.
    let required = NoDependencies.required_components(&component);
    if !required.is_empty() {
        cliclack::log::info(format!("Also requires: {}", required.join(", ")))?;
    }

    install_with_styles(&catalog, name, target).await
}
