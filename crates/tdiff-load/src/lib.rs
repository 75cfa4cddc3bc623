//! Value loader for tdiff.
//!
//! Reads a document from the file system and decodes it into a
//! [`tdiff_types::Value`]. A source that cannot be read or decoded produces
//! an error and no value; there are no partial results.
//!
//! # Key Types
//!
//! - [`SourceFormat`] -- Document encoding (JSON or TOML), detected from the file extension
//! - [`load_value`] / [`load_value_as`] -- Read and decode a file
//! - [`LoadError`] -- Unreadable source or malformed content

pub mod error;
pub mod format;
pub mod loader;

pub use error::{LoadError, LoadResult};
pub use format::SourceFormat;
pub use loader::{load_value, load_value_as, parse_slice};
