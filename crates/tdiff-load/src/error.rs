//! Error types for the loader crate.

use std::path::PathBuf;

use crate::format::SourceFormat;

/// Errors that can occur while loading a source document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be read (missing, permission denied, ...).
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content does not decode into a tree document.
    #[error("malformed {format} in {}: {reason}", path.display())]
    Format {
        path: PathBuf,
        format: SourceFormat,
        reason: String,
    },
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;
