//! Structural comparison of two value trees.
//!
//! The traversal is depth-first pre-order: a node's own records come first,
//! then its children in sorted-key or index order. It runs on an explicit
//! work stack, so document nesting never grows the call stack.

use std::cmp::Ordering;
use std::collections::btree_map;
use std::iter::Peekable;

use tdiff_types::{Path, Value};
use tracing::debug;

use crate::divergence::{Divergence, DivergenceKind, DivergenceSet};
use crate::error::{DiffError, DiffResult};
use crate::options::DiffOptions;

/// Compare two documents with default options.
///
/// Returns every divergence in traversal order; an empty set means the
/// documents are structurally and value-equal.
pub fn compare(a: &Value, b: &Value) -> DivergenceSet {
    // No depth limit by default, so this never fails.
    compare_with(a, b, &DiffOptions::default()).unwrap_or_default()
}

/// Compare two documents.
///
/// Fails with [`DiffError::DepthExceeded`] (and no records) if the traversal
/// has to descend below `options.max_depth`.
pub fn compare_with(a: &Value, b: &Value, options: &DiffOptions) -> DiffResult<DivergenceSet> {
    let mut records = Vec::new();
    let mut stack = vec![Task::Compare {
        a,
        b,
        path: Path::root(),
    }];
    let mut visited = 0usize;

    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(record) => records.push(record),
            Task::Compare { a, b, path } => {
                if let Some(max_depth) = options.max_depth {
                    if path.depth() > max_depth {
                        return Err(DiffError::DepthExceeded { path, max_depth });
                    }
                }
                visited += 1;
                compare_node(a, b, path, options, &mut records, &mut stack);
            }
        }
    }

    debug!(nodes = visited, divergences = records.len(), "comparison finished");
    Ok(DivergenceSet::from(records))
}

/// Pending work. `Emit` keeps one-sided key records in key order relative to
/// the subtrees compared alongside them.
enum Task<'v> {
    Compare {
        a: &'v Value,
        b: &'v Value,
        path: Path,
    },
    Emit(Divergence),
}

fn compare_node<'v>(
    a: &'v Value,
    b: &'v Value,
    path: Path,
    options: &DiffOptions,
    records: &mut Vec<Divergence>,
    stack: &mut Vec<Task<'v>>,
) {
    match (a, b) {
        (Value::Null, Value::Null) => {}
        (Value::Bool(x), Value::Bool(y)) if x == y => {}
        (Value::Number(x), Value::Number(y)) if x == y => {}
        (Value::String(x), Value::String(y)) if x == y => {}
        (Value::Bool(_), Value::Bool(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::String(_), Value::String(_)) => {
            let width = options.value_preview_width;
            records.push(Divergence {
                message: format!("{path}: {} vs {}", a.preview(width), b.preview(width)),
                path,
                kind: DivergenceKind::ValueMismatch,
            });
        }
        (Value::Sequence(xs), Value::Sequence(ys)) => {
            if xs.len() != ys.len() {
                records.push(Divergence {
                    message: format!("{path}: list len {} vs {}", xs.len(), ys.len()),
                    path: path.clone(),
                    kind: DivergenceKind::LengthMismatch {
                        a: xs.len(),
                        b: ys.len(),
                    },
                });
            }
            // Only the common prefix is compared.
            let children = xs.iter().zip(ys).enumerate().rev();
            stack.extend(children.map(|(i, (a, b))| Task::Compare {
                a,
                b,
                path: path.child_index(i),
            }));
        }
        (Value::Mapping(ma), Value::Mapping(mb)) => {
            let labels = &options.labels;
            let width = options.key_preview_width;
            let mut pending = Vec::new();
            for entry in MergedKeys::new(ma, mb) {
                pending.push(match entry {
                    KeyPresence::Both(key, a, b) => Task::Compare {
                        a,
                        b,
                        path: path.child_field(key),
                    },
                    KeyPresence::OnlyA(key, value) => {
                        let path = path.child_field(key);
                        Task::Emit(Divergence {
                            message: format!(
                                "{path}: MISSING in {} ({} = {})",
                                labels.b,
                                labels.a,
                                value.preview(width)
                            ),
                            path,
                            kind: DivergenceKind::OnlyInA,
                        })
                    }
                    KeyPresence::OnlyB(key, value) => {
                        let path = path.child_field(key);
                        Task::Emit(Divergence {
                            message: format!(
                                "{path}: MISSING in {} ({} = {})",
                                labels.a,
                                labels.b,
                                value.preview(width)
                            ),
                            path,
                            kind: DivergenceKind::OnlyInB,
                        })
                    }
                });
            }
            stack.extend(pending.into_iter().rev());
        }
        // Listing every variant of `a` keeps this match exhaustive without a
        // wildcard: a new variant fails to compile until handled above.
        (
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Sequence(_)
            | Value::Mapping(_),
            _,
        ) => {
            records.push(Divergence {
                message: format!("{path}: type {} vs {}", a.kind(), b.kind()),
                path,
                kind: DivergenceKind::TypeMismatch {
                    a: a.kind(),
                    b: b.kind(),
                },
            });
        }
    }
}

/// Where a key of the union of two mappings lives.
enum KeyPresence<'v> {
    Both(&'v str, &'v Value, &'v Value),
    OnlyA(&'v str, &'v Value),
    OnlyB(&'v str, &'v Value),
}

/// Sorted union of the keys of two mappings, merged in one pass.
struct MergedKeys<'v> {
    a: Peekable<btree_map::Iter<'v, String, Value>>,
    b: Peekable<btree_map::Iter<'v, String, Value>>,
}

impl<'v> MergedKeys<'v> {
    fn new(
        a: &'v std::collections::BTreeMap<String, Value>,
        b: &'v std::collections::BTreeMap<String, Value>,
    ) -> Self {
        Self {
            a: a.iter().peekable(),
            b: b.iter().peekable(),
        }
    }
}

impl<'v> Iterator for MergedKeys<'v> {
    type Item = KeyPresence<'v>;

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.a.peek(), self.b.peek()) {
            (Some((ka, _)), Some((kb, _))) => ka.cmp(kb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => return None,
        };
        match order {
            Ordering::Less => {
                let (key, value) = self.a.next()?;
                Some(KeyPresence::OnlyA(key, value))
            }
            Ordering::Greater => {
                let (key, value) = self.b.next()?;
                Some(KeyPresence::OnlyB(key, value))
            }
            Ordering::Equal => {
                let (key, va) = self.a.next()?;
                let (_, vb) = self.b.next()?;
                Some(KeyPresence::Both(key, va, vb))
            }
        }
    }
}
