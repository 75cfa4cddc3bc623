use std::fmt;

use serde::{Serialize, Serializer};

/// Label every rendered path starts with.
pub const ROOT_LABEL: &str = "root";

/// One step from a node to one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// A mapping key, rendered as `.name`.
    Field(String),
    /// A sequence position, rendered as `[i]`.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Address of a node inside a document, relative to the root.
///
/// Paths are purely descriptive. Descending into a child builds a new path
/// with one more segment; the parent is left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty path addressing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the mapping entry `name` below this node.
    pub fn child_field(&self, name: &str) -> Self {
        self.child(PathSegment::Field(name.to_owned()))
    }

    /// Path of the sequence element `index` below this node.
    pub fn child_index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The segments from the root downwards.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The final segment, if any.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT_LABEL)?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
