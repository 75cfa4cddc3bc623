/// Preview width for values reported under a one-sided key.
pub const DEFAULT_KEY_PREVIEW_WIDTH: usize = 80;

/// Preview width for each side of a leaf value mismatch.
pub const DEFAULT_VALUE_PREVIEW_WIDTH: usize = 60;

/// Names used for the two documents in divergence messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideLabels {
    pub a: String,
    pub b: String,
}

impl SideLabels {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Default for SideLabels {
    fn default() -> Self {
        Self::new("a", "b")
    }
}

/// Configuration for a comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    /// Deepest path (in segments) the traversal may descend to. `None`
    /// means unbounded.
    pub max_depth: Option<usize>,
    /// Characters of compact JSON shown for a value under a one-sided key.
    pub key_preview_width: usize,
    /// Characters of compact JSON shown per side of a value mismatch.
    pub value_preview_width: usize,
    pub labels: SideLabels,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            key_preview_width: DEFAULT_KEY_PREVIEW_WIDTH,
            value_preview_width: DEFAULT_VALUE_PREVIEW_WIDTH,
            labels: SideLabels::default(),
        }
    }
}

impl DiffOptions {
    /// Bound the traversal depth, for documents from untrusted producers.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..self
        }
    }

    /// Name the two documents in messages.
    pub fn with_labels(self, labels: SideLabels) -> Self {
        Self { labels, ..self }
    }
}
