//! Product configuration trait for registry-backed CLI binaries.

use std::path::Path;

/// Configuration trait for a component-registry product.
///
/// The binary implements this to define:
/// - Product identity (name, display name)
/// - Registry repository location and its override env var
/// - Documentation links
/// - Post-setup instructions
pub trait RegistryConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default URL of the component registry repository
    fn default_registry_url(&self) -> &'static str;

    /// Environment variable name for overriding the registry URL
    fn registry_url_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Generate the "next steps" instructions after `init`
    fn next_steps(&self, dir: &Path) -> Vec<String>;
}
