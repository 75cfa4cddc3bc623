//! Foundation types for tdiff.
//!
//! This crate provides the document model shared by the loader, the
//! comparator, and the reporter. Every other tdiff crate depends on
//! `tdiff-types`.
//!
//! # Key Types
//!
//! - [`Value`] -- A materialized tree document (null, bool, number, string, sequence, mapping)
//! - [`ValueKind`] -- The variant tag of a [`Value`]
//! - [`Path`] / [`PathSegment`] -- Address of a node, rendered as `root.a[2].b`

pub mod path;
pub mod value;

pub use path::{Path, PathSegment, ROOT_LABEL};
pub use value::{truncate_chars, Value, ValueKind};
