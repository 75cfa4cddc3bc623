use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tdiff_diff::{DiffOptions, SideLabels};
use tdiff_report::DEFAULT_LIMIT;

/// Settings for one run. Read from an optional TOML file, then overridden
/// by command-line flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Divergence lines printed before the omitted-count line.
    pub max_diffs: usize,
    /// Traversal depth limit; unbounded when absent.
    pub max_depth: Option<usize>,
    pub key_preview_width: usize,
    pub value_preview_width: usize,
    pub label_a: String,
    pub label_b: String,
    pub color: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        let options = DiffOptions::default();
        Self {
            max_diffs: DEFAULT_LIMIT,
            max_depth: options.max_depth,
            key_preview_width: options.key_preview_width,
            value_preview_width: options.value_preview_width,
            label_a: options.labels.a,
            label_b: options.labels.b,
            color: false,
        }
    }
}

impl DiffConfig {
    /// Read settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.message().to_owned(),
        })
    }

    /// Comparator options derived from these settings.
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            max_depth: self.max_depth,
            key_preview_width: self.key_preview_width,
            value_preview_width: self.value_preview_width,
            labels: SideLabels::new(self.label_a.clone(), self.label_b.clone()),
        }
    }
}

/// Errors from reading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
