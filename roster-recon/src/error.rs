//! Error types for roster-recon.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from reconcile, diff, and write operations.
///
/// The two structural variants abort a whole run: a cell that passed the
/// coarse bracket check but fails the strict link grammar indicates a
/// hand-edit the tool cannot safely interpret.
#[derive(Debug, Error)]
pub enum ReconError {
    /// First cell looked link-shaped but is not a valid `[label](path)` token.
    #[error("unrecognized agent cell format: {cell:?}")]
    MalformedAgentCell { cell: String },

    /// Agent link does not reference a markdown file.
    #[error("agent link does not reference a markdown file: {path:?}")]
    NotMarkdownRef { path: String },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`ReconError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ReconError {
    ReconError::Io {
        path: path.into(),
        source,
    }
}
