//! Target project validation and mutation
//!
//! Everything that touches the consumer's project tree lives here:
//! - Project validation (package manifest presence)
//! - Component installation (recursive copy into the components directory)
//! - Style fragment merging into the global stylesheet
//! - Shared config installation and package manifest updates

pub mod config;
pub mod installer;
pub mod styles;
pub mod validate;

pub use config::{install_config, REQUIRED_DEV_DEPENDENCIES};
pub use installer::{ensure_project_dirs, install_component, COMPONENTS_DIR};
pub use styles::{global_stylesheet_path, merge_style_fragment, StyleMerge};
pub use validate::ensure_project;
