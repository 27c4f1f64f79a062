//! Error types shared by every pipeline stage.

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error as ThisError;

/// Result type for loom operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors raised by the fetch/install/merge pipeline.
///
/// Commands catch these at their boundary, report them on the
/// in-progress status indicator, and run scratch cleanup regardless;
/// a stage error never escapes as a panic or an unformatted abort.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The target directory is not a project (no package manifest).
    #[error("no package.json found in {path}; run this inside a project root")]
    NotAProject {
        /// Directory that was checked.
        path: PathBuf,
    },

    /// The registry URL override could not be parsed.
    #[error("invalid registry URL '{url}': {source}")]
    InvalidRegistryUrl {
        /// The offending URL string.
        url: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The git executable could not be started.
    #[error("failed to run git: {source}")]
    GitUnavailable {
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// The shallow clone of the registry failed.
    #[error("failed to clone {url}: {detail}")]
    CloneFailed {
        /// Repository that was being cloned.
        url: String,
        /// Last line of git's stderr.
        detail: String,
    },

    /// The requested component does not exist in the fetched catalog.
    #[error("component '{name}' is not in the registry")]
    ComponentNotFound {
        /// Name that was requested.
        name: String,
    },

    /// A template or config file expected in the fetched catalog is absent.
    #[error("expected source file is missing: {path}")]
    MissingSourceFile {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// The package manifest could not be parsed or rewritten.
    #[error("invalid manifest {path}: {source}")]
    ManifestParse {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An underlying filesystem operation failed.
    #[error("{path}: {source}")]
    Io {
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// Writing to the terminal failed.
    #[error("terminal write failed: {0}")]
    Terminal(#[from] io::Error),
}

impl Error {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
