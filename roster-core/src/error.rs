//! Error types for roster-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from mapping loader operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured repository root does not exist or is not a directory.
    #[error("repository root is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// Convenience constructor for [`RosterError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RosterError {
    RosterError::Io {
        path: path.into(),
        source,
    }
}
