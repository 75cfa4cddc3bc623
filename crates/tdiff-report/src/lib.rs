//! Diagnostics reporter for tdiff.
//!
//! Renders the records of a comparison as text lines (truncated to a limit,
//! with an omitted-count line and a total line) or as a JSON document.
//!
//! # Key Types
//!
//! - [`Reporter`] -- Holds the display limit and renders a [`tdiff_diff::DivergenceSet`]
//! - [`ReportLine`] -- One rendered line
//! - [`JsonReport`] -- Machine-readable report

pub mod error;
pub mod json;
pub mod reporter;

pub use error::{ReportError, ReportResult};
pub use json::JsonReport;
pub use reporter::{ReportLine, Reporter, DEFAULT_LIMIT};
