//! loom CLI - copy-paste UI components for your project

use anyhow::Result;
use clap::{Parser, Subcommand};
use loom_core::commands::{self, CommandArgs, CommandOutcome};
use loom_core::RegistryConfig;
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// loom product configuration
#[derive(Clone)]
pub struct LoomConfig;

impl RegistryConfig for LoomConfig {
    fn name(&self) -> &'static str {
        "loom"
    }

    fn display_name(&self) -> &'static str {
        "loom"
    }

    fn default_registry_url(&self) -> &'static str {
        "https://github.com/loom-ui/loom"
    }

    fn registry_url_env(&self) -> &'static str {
        "LOOM_REGISTRY_URL"
    }

    fn docs_url(&self) -> &'static str {
        "https://loom-ui.dev/docs"
    }

    fn cli_description(&self) -> &'static str {
        "Install copy-paste UI components into your project"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install loom-cli --force"
    }

    fn next_steps(&self, _dir: &Path) -> Vec<String> {
        vec![
            "Import styles/globals.css in your app entry point".to_string(),
            "Run `loom list` to browse the component catalog".to_string(),
            "Run `loom add <component>` to install a component".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "loom")]
#[command(about = "Install copy-paste UI components into your project")]
#[command(version)]
pub struct Args {
    /// Local directory to use as the registry instead of cloning the remote (for development use)
    #[arg(long = "registry-dir", global = true)]
    pub registry_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install the global stylesheet and framework config into this project
    Init,
    /// Add a component to this project
    Add {
        /// Name of the component to install
        component: String,
    },
    /// Browse the component catalog and optionally install one
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = LoomConfig;
    let common = CommandArgs {
        registry_dir: args.registry_dir,
    };

    let outcome = match args.command {
        Command::Init => commands::init(&config, CLI_VERSION, &common).await,
        Command::Add { component } => {
            commands::add(&config, CLI_VERSION, &common, &component).await
        }
        Command::List => commands::list(&config, &common).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match outcome? {
        CommandOutcome::Completed => Ok(()),
        CommandOutcome::Failed => std::process::exit(1),
    }
}
