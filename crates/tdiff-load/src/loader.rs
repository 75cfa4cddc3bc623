//! Reading and decoding source documents.

use std::path::Path;

use tdiff_types::Value;
use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::format::SourceFormat;

/// Load a document, choosing the format from the file extension.
pub fn load_value(path: &Path) -> LoadResult<Value> {
    load_value_as(path, SourceFormat::from_path(path))
}

/// Load a document in an explicit format.
pub fn load_value_as(path: &Path, format: SourceFormat) -> LoadResult<Value> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), %format, "read source");
    parse_slice(&bytes, format, path)
}

/// Decode raw bytes. `origin` only labels errors.
pub fn parse_slice(bytes: &[u8], format: SourceFormat, origin: &Path) -> LoadResult<Value> {
    let malformed = |reason: String| LoadError::Format {
        path: origin.to_path_buf(),
        format,
        reason,
    };

    match format {
        SourceFormat::Json => serde_json::from_slice::<serde_json::Value>(bytes)
            .map(Value::from)
            .map_err(|e| malformed(e.to_string())),
        SourceFormat::Toml => {
            let text = std::str::from_utf8(bytes).map_err(|e| malformed(e.to_string()))?;
            toml::from_str::<toml::Table>(text)
                .map(|table| Value::from(toml::Value::Table(table)))
                .map_err(|e| malformed(e.message().to_owned()))
        }
    }
}
