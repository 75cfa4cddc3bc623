//! Divergence records and the ordered set a comparison produces.

use serde::Serialize;
use tdiff_types::{Path, ValueKind};

/// Classification of a disagreement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DivergenceKind {
    /// The two nodes have different variants. Nothing below is compared.
    TypeMismatch { a: ValueKind, b: ValueKind },
    /// The key exists in the first document only.
    OnlyInA,
    /// The key exists in the second document only.
    OnlyInB,
    /// Both sequences exist but their lengths differ.
    LengthMismatch { a: usize, b: usize },
    /// Two leaves of the same kind hold different values.
    ValueMismatch,
}

/// One reported disagreement between the two documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Divergence {
    pub path: Path,
    pub kind: DivergenceKind,
    /// Rendered diagnostic line, including the path.
    pub message: String,
}

impl std::fmt::Display for Divergence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// The records of one comparison, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DivergenceSet {
    records: Vec<Divergence>,
}

impl DivergenceSet {
    /// Returns `true` if the documents agree everywhere.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Divergence> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Divergence] {
        &self.records
    }

    /// Number of type mismatches.
    pub fn type_mismatches(&self) -> usize {
        self.count(|k| matches!(k, DivergenceKind::TypeMismatch { .. }))
    }

    /// Number of keys present on one side only.
    pub fn missing_keys(&self) -> usize {
        self.count(|k| matches!(k, DivergenceKind::OnlyInA | DivergenceKind::OnlyInB))
    }

    /// Number of sequence length mismatches.
    pub fn length_mismatches(&self) -> usize {
        self.count(|k| matches!(k, DivergenceKind::LengthMismatch { .. }))
    }

    /// Number of leaf value mismatches.
    pub fn value_mismatches(&self) -> usize {
        self.count(|k| matches!(k, DivergenceKind::ValueMismatch))
    }

    /// All per-kind counters at once.
    pub fn counts(&self) -> DivergenceCounts {
        DivergenceCounts {
            type_mismatches: self.type_mismatches(),
            missing_keys: self.missing_keys(),
            length_mismatches: self.length_mismatches(),
            value_mismatches: self.value_mismatches(),
        }
    }

    fn count(&self, pred: impl Fn(&DivergenceKind) -> bool) -> usize {
        self.records.iter().filter(|d| pred(&d.kind)).count()
    }
}

impl From<Vec<Divergence>> for DivergenceSet {
    fn from(records: Vec<Divergence>) -> Self {
        Self { records }
    }
}

impl IntoIterator for DivergenceSet {
    type Item = Divergence;
    type IntoIter = std::vec::IntoIter<Divergence>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a DivergenceSet {
    type Item = &'a Divergence;
    type IntoIter = std::slice::Iter<'a, Divergence>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Per-kind record counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DivergenceCounts {
    pub type_mismatches: usize,
    pub missing_keys: usize,
    pub length_mismatches: usize,
    pub value_mismatches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(path: Path, kind: DivergenceKind) -> Divergence {
        Divergence {
            message: format!("{path}: test"),
            path,
            kind,
        }
    }

    #[test]
    fn empty_set() {
        let set = DivergenceSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.counts(), DivergenceCounts::default());
    }

    #[test]
    fn counts_by_kind() {
        let root = Path::root();
        let set = DivergenceSet::from(vec![
            record(root.child_field("a"), DivergenceKind::OnlyInA),
            record(root.child_field("b"), DivergenceKind::OnlyInB),
            record(root.child_field("c"), DivergenceKind::LengthMismatch { a: 1, b: 2 }),
            record(
                root.child_field("d"),
                DivergenceKind::TypeMismatch {
                    a: ValueKind::Null,
                    b: ValueKind::Bool,
                },
            ),
            record(root.child_field("e"), DivergenceKind::ValueMismatch),
            record(root.child_field("f"), DivergenceKind::ValueMismatch),
        ]);
        assert_eq!(set.len(), 6);
        assert_eq!(
            set.counts(),
            DivergenceCounts {
                type_mismatches: 1,
                missing_keys: 2,
                length_mismatches: 1,
                value_mismatches: 2,
            }
        );
    }

    #[test]
    fn iteration_keeps_order() {
        let set = DivergenceSet::from(vec![
            record(Path::root().child_field("z"), DivergenceKind::ValueMismatch),
            record(Path::root().child_field("a"), DivergenceKind::ValueMismatch),
        ]);
        let paths: Vec<String> = set.iter().map(|d| d.path.to_string()).collect();
        assert_eq!(paths, ["root.z", "root.a"]);
    }

    #[test]
    fn serializes_kind_with_tag() {
        let d = record(
            Path::root().child_field("v"),
            DivergenceKind::TypeMismatch {
                a: ValueKind::Mapping,
                b: ValueKind::Number,
            },
        );
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            json!({
                "path": "root.v",
                "kind": {"type": "type_mismatch", "a": "mapping", "b": "number"},
                "message": "root.v: test",
            })
        );
    }
}
