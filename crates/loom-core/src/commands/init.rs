//! `init` - install the shared styles and framework config

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    fetch_registry, release_workspace, report_failure, setup_fetcher, warn_on_version_mismatch,
    CommandArgs, CommandOutcome,
};
use crate::product::RegistryConfig;
use crate::project::{ensure_project, ensure_project_dirs, install_config};
use crate::registry::CatalogFetcher;
use crate::workspace::ScratchWorkspace;

/// Set up the current project: global stylesheet, framework configs,
/// and the pinned dev dependencies.
pub async fn init<C: RegistryConfig>(
    config: &C,
    cli_version: &str,
    args: &CommandArgs,
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

    let result = configure_project(config, cli_version, &fetcher, &workspace, &target).await;
    release_workspace(workspace)?;

    match result {
        Ok(()) => {
            print_next_steps(config, &target)?;
            Ok(CommandOutcome::Completed)
        }
        Err(e) => Ok(report_failure(&e)?),
    }
}

/// The init pipeline: fetch the registry, then place styles and config.
async fn configure_project<C: RegistryConfig>(
    config: &C,
    cli_version: &str,
    fetcher: &CatalogFetcher,
    workspace: &ScratchWorkspace,
    target: &Path,
) -> crate::error::Result<()> {
    let catalog = fetch_registry(fetcher, workspace).await?;
    warn_on_version_mismatch(config, cli_version, &catalog)?;

    let spinner = cliclack::spinner();
    spinner.start("Installing styles and config...");
    if let Err(e) = install_config(&catalog, target).await {
        spinner.error("Could not install the project config");
        return Err(e);
    }
    spinner.stop("Styles and config installed");

    Ok(())
}

/// Show the post-init checklist.
fn print_next_steps<C: RegistryConfig>(config: &C, target: &Path) -> std::io::Result<()> {
    let steps = config.next_steps(target);

    println!();
    println!("  {}", "Next steps".cyan().bold());
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy building!")
}
