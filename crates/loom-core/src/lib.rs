//! Loom Core - fetch-and-place engine for copy-paste UI components
//!
//! This library implements the whole workflow behind the `loom` binary:
//! fetching the component registry into an ephemeral scratch workspace,
//! validating the target project, installing component trees, merging
//! style fragments into the project's global stylesheet, and placing the
//! shared framework configs.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pipeline Stages** - Typed, independently testable stages
//!   for validation, fetching, cataloging, installation, and merging
//! - **Layer 2: Product Binding** - the [`RegistryConfig`] trait ties a
//!   binary to its registry URL, docs, and post-install instructions
//! - **Layer 3: Command Pipelines** - cliclack-based `init`/`add`/`list`
//!   dispatchers (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based command module

pub mod error;
pub mod product;
pub mod project;
pub mod registry;
pub mod workspace;

mod fsops;

#[cfg(feature = "tui")]
pub mod commands;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use product::RegistryConfig;
pub use registry::{Catalog, CatalogFetcher, CatalogSource, Component};
pub use workspace::ScratchWorkspace;
