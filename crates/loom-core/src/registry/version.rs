//! Version comparison between the CLI and the fetched registry

use std::path::Path;

use semver::Version;
use serde::Deserialize;

/// Subset of the registry manifest the version check reads.
#[derive(Debug, Deserialize)]
struct RegistryManifest {
    version: Option<String>,
}

/// Read the registry manifest's version, if present and readable.
///
/// Any read or parse failure yields `None`; the version check is
/// informational and never blocks a command.
pub fn registry_version(manifest_path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(manifest_path).ok()?;
    let manifest: RegistryManifest = serde_json::from_str(&content).ok()?;
    manifest.version
}

/// Compare the CLI version against the registry version
/// Returns a warning message if the CLI is older than the registry expects
pub fn check_compatibility(
    cli_version: &str,
    registry_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = match Version::parse(cli_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let registry_ver = match Version::parse(registry_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    if cli_ver < registry_ver {
        Some(format!(
            "Warning: the registry expects CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            registry_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}
