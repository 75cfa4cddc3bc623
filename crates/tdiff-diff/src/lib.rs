//! Structural diff engine for tdiff.
//!
//! Compares two value trees and reports every point where they disagree:
//! type mismatches, keys present on one side only, sequence length
//! mismatches, and leaf value mismatches. Each record carries the exact path
//! of the disagreement. Divergence is the expected output of a comparison,
//! never an error.
//!
//! # Key Types
//!
//! - [`compare`] / [`compare_with`] -- Run a comparison
//! - [`Divergence`] / [`DivergenceKind`] -- One reported disagreement
//! - [`DivergenceSet`] -- All records of one comparison, in traversal order
//! - [`DiffOptions`] -- Depth limit, preview widths, side labels

pub mod compare;
pub mod divergence;
pub mod error;
pub mod options;

pub use compare::{compare, compare_with};
pub use divergence::{Divergence, DivergenceCounts, DivergenceKind, DivergenceSet};
pub use error::{DiffError, DiffResult};
pub use options::{DiffOptions, SideLabels};
