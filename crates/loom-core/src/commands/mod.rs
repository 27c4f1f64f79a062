//! Command pipelines behind the cliclack prompts
//!
//! Each command is a linear pipeline over the same typed stages:
//! validate, fetch into a scratch workspace, install, merge. A stage
//! failure is caught at the command boundary, reported on the status
//! indicator, and always followed by scratch cleanup before the command
//! returns. Commands never panic on a stage error and never leave the
//! scratch directory behind.

mod add;
mod init;
mod list;

pub use add::add;
pub use init::init;
pub use list::list;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::product::RegistryConfig;
use crate::project::{installer, styles, StyleMerge};
use crate::registry::{version, Catalog, CatalogFetcher};
use crate::workspace::ScratchWorkspace;

/// How a command run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The pipeline ran to completion (including clean no-ops).
    Completed,
    /// A stage failed and was reported.
    Failed,
}

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    /// Local directory to use as the registry instead of cloning the remote.
    pub registry_dir: Option<PathBuf>,
}

/// Pick the registry source for this invocation.
fn setup_fetcher<C: RegistryConfig>(config: &C, args: &CommandArgs) -> Result<CatalogFetcher> {
    match &args.registry_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local registry from {}", path.display()))?;
            Ok(CatalogFetcher::from_local(path.clone()))
        }
        None => CatalogFetcher::from_config(config),
    }
}

/// Fetch the registry into the scratch workspace under a spinner.
async fn fetch_registry(fetcher: &CatalogFetcher, workspace: &ScratchWorkspace) -> Result<Catalog> {
    let spinner = cliclack::spinner();
    spinner.start("Fetching registry...");
    match fetcher.fetch(workspace.path()).await {
        Ok(()) => {
            spinner.stop("Registry fetched");
            Ok(Catalog::new(workspace.path()))
        }
        Err(e) => {
            spinner.error("Could not fetch the registry");
            Err(e)
        }
    }
}

/// Warn (never fail) when the registry expects a newer CLI.
fn warn_on_version_mismatch<C: RegistryConfig>(
    config: &C,
    cli_version: &str,
    catalog: &Catalog,
) -> Result<()> {
    if let Some(remote) = version::registry_version(&catalog.manifest()) {
        if let Some(warning) =
            version::check_compatibility(cli_version, &remote, config.upgrade_command())
        {
            cliclack::log::warning(warning.lines().next().unwrap_or(&warning).to_string())?;
        }
    }
    Ok(())
}

/// Install a component and merge its style fragment, under one spinner.
///
/// Shared by `add` and the interactive pick in `list`.
async fn install_with_styles(catalog: &Catalog, name: &str, target: &Path) -> Result<()> {
    let component = catalog.component(name)?;

    let spinner = cliclack::spinner();
    spinner.start(format!("Adding {name}..."));

    let copied = match installer::install_component(catalog, name, target).await {
        Ok(copied) => copied,
        Err(e) => {
            spinner.error(format!("Could not add {name}"));
            return Err(e);
        }
    };

    let style = match styles::merge_style_fragment(
        &component.style_fragment(),
        &styles::global_stylesheet_path(target),
    )
    .await
    {
        Ok(style) => style,
        Err(e) => {
            spinner.error(format!("Could not merge styles for {name}"));
            return Err(e);
        }
    };

    spinner.stop(format!("Added {name} ({} files)", copied.len()));

    match style {
        StyleMerge::Appended => cliclack::log::info("Updated styles/globals.css")?,
        StyleMerge::AlreadyPresent => {
            cliclack::log::info("Styles already present in styles/globals.css")?;
        }
        StyleMerge::NoFragment => {}
    }

    Ok(())
}

/// Report a stage failure and close out the command.
///
/// Every stage error funnels through here, so failure presentation is
/// uniform no matter where the pipeline stopped.
fn report_failure(err: &Error) -> std::io::Result<CommandOutcome> {
    cliclack::log::error(err.to_string())?;
    cliclack::outro_cancel("Operation failed")?;
    Ok(CommandOutcome::Failed)
}

/// Release the scratch workspace; removal trouble is logged, never fatal.
fn release_workspace(workspace: ScratchWorkspace) -> std::io::Result<()> {
    if let Some(warning) = workspace.cleanup() {
        cliclack::log::warning(format!("Scratch cleanup failed: {warning}"))?;
    }
    Ok(())
}
