//! Error types for sink operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while opening or writing a sink.
///
/// Only `Open` reaches library users (through logger initialization); append
/// and rotation failures are swallowed and traced one layer up.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log file or its directory could not be created/opened.
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        /// Path being opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Appending to the active file failed.
    #[error("failed to append to {}: {source}", path.display())]
    Append {
        /// Path being appended to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Renaming the active file during rotation failed.
    #[error("failed to rotate {}: {source}", path.display())]
    Rotation {
        /// Path being rotated.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    /// Path the failed operation was acting on.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Append { path, .. } | Self::Rotation { path, .. } => {
                path
            }
        }
    }

    /// Splits the error into its path and I/O cause.
    #[must_use]
    pub fn into_parts(self) -> (PathBuf, std::io::Error) {
        match self {
            Self::Open { path, source }
            | Self::Append { path, source }
            | Self::Rotation { path, source } => (path, source),
        }
    }
}
