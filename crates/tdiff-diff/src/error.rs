//! Error types for the diff crate.

use tdiff_types::Path;

/// Errors that can occur during a comparison.
///
/// Disagreements between the documents are not errors; they are reported as
/// [`Divergence`](crate::Divergence) records.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The documents nest deeper than the configured limit.
    #[error("nesting at {path} exceeds maximum depth {max_depth}")]
    DepthExceeded { path: Path, max_depth: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
