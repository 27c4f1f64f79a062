//! Registry fetching, cataloging, and version checks
//!
//! This module provides:
//! - Catalog source selection (remote repository or local directory)
//! - Shallow fetching of the registry into a scratch workspace
//! - Catalog enumeration and component lookup
//! - Informational CLI/registry version comparison

pub mod catalog;
pub mod fetcher;
pub mod version;

pub use catalog::{Catalog, Component, DependencyResolver, NoDependencies};
pub use fetcher::{CatalogFetcher, CatalogSource};
pub use version::{check_compatibility, registry_version};
