use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Number;

use crate::path::{Path, PathSegment};

/// A fully materialized tree document.
///
/// The variant set is closed: every comparison site matches on it
/// exhaustively. Mapping keys are held in a `BTreeMap` so iteration order is
/// sorted and deterministic regardless of the order in the source document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    /// Numbers keep the integer/float distinction of the source, so `1` and
    /// `1.0` are not equal.
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(BTreeMap<String, Value>),
}

/// The variant tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Lowercase name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// The variant tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
        }
    }

    /// Compact JSON rendering of the whole subtree.
    pub fn to_compact_json(&self) -> String {
        // String keys and finite numbers only, so serialization cannot fail.
        serde_json::to_string(self).expect("Value always serializes to JSON")
    }

    /// Compact JSON rendering cut to the first `width` characters.
    pub fn preview(&self, width: usize) -> String {
        truncate_chars(&self.to_compact_json(), width).to_owned()
    }

    /// Follow `path` from this node. Returns `None` if any segment does not
    /// exist or addresses the wrong kind of container.
    pub fn get_path(&self, path: &Path) -> Option<&Value> {
        let mut node = self;
        for segment in path.segments() {
            node = match (node, segment) {
                (Value::Mapping(map), PathSegment::Field(name)) => map.get(name)?,
                (Value::Sequence(items), PathSegment::Index(i)) => items.get(*i)?,
                _ => return None,
            };
        }
        Some(node)
    }
}

/// The prefix of `s` holding at most `width` characters.
pub fn truncate_chars(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact_json())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Number(Number::from(i)),
            // JSON has no NaN or infinity.
            toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            toml::Value::Table(table) => Value::Mapping(
                table.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_covers_every_variant() {
        let cases = [
            (json!(null), ValueKind::Null),
            (json!(true), ValueKind::Bool),
            (json!(1.5), ValueKind::Number),
            (json!("s"), ValueKind::String),
            (json!([1]), ValueKind::Sequence),
            (json!({"k": 1}), ValueKind::Mapping),
        ];
        for (json, kind) in cases {
            assert_eq!(Value::from(json).kind(), kind);
        }
    }

    #[test]
    fn kind_names_are_lowercase() {
        assert_eq!(ValueKind::Mapping.to_string(), "mapping");
        assert_eq!(ValueKind::Bool.to_string(), "bool");
    }

    #[test]
    fn mapping_keys_are_sorted() {
        let value = Value::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        match value {
            Value::Mapping(map) => {
                let keys: Vec<_> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, ["alpha", "mid", "zeta"]);
            }
            other => panic!("expected Mapping, got {:?}", other),
        }
    }

    #[test]
    fn integer_and_float_are_distinct() {
        assert_ne!(Value::from(json!(1)), Value::from(json!(1.0)));
        assert_eq!(Value::from(json!(1)), Value::from(json!(1)));
    }

    #[test]
    fn compact_json_rendering() {
        let value = Value::from(json!({"b": [1, null, "x"], "a": true}));
        assert_eq!(value.to_compact_json(), r#"{"a":true,"b":[1,null,"x"]}"#);
        assert_eq!(value.to_string(), value.to_compact_json());
    }

    #[test]
    fn preview_truncates_by_characters() {
        let value = Value::String("héllo wörld".into());
        assert_eq!(value.preview(4), "\"hél");
        assert_eq!(value.preview(100), "\"héllo wörld\"");
    }

    #[test]
    fn truncate_chars_handles_short_input() {
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn get_path_follows_segments() {
        let value = Value::from(json!({"a": [{"b": 7}]}));
        let path = Path::root().child_field("a").child_index(0).child_field("b");
        assert_eq!(value.get_path(&path), Some(&Value::from(json!(7))));
        assert_eq!(value.get_path(&Path::root()), Some(&value));
    }

    #[test]
    fn get_path_rejects_wrong_container() {
        let value = Value::from(json!({"a": [1]}));
        assert!(value.get_path(&Path::root().child_index(0)).is_none());
        assert!(value.get_path(&Path::root().child_field("a").child_field("x")).is_none());
        assert!(value.get_path(&Path::root().child_field("a").child_index(5)).is_none());
    }

    #[test]
    fn toml_conversion() {
        let table: toml::Value = toml::from_str(
            "name = \"x\"\ncount = 3\nratio = 0.5\nflag = true\nwhen = 1979-05-27\nitems = [1, 2]\n",
        )
        .unwrap();
        let value = Value::from(table);
        assert_eq!(
            value,
            Value::from(json!({
                "name": "x",
                "count": 3,
                "ratio": 0.5,
                "flag": true,
                "when": "1979-05-27",
                "items": [1, 2],
            }))
        );
    }

    #[test]
    fn non_finite_toml_float_becomes_null() {
        assert_eq!(Value::from(toml::Value::Float(f64::NAN)), Value::Null);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn truncate_never_exceeds_width(s in ".{0,40}", width in 0usize..50) {
                let cut = truncate_chars(&s, width);
                prop_assert!(cut.chars().count() <= width);
                prop_assert!(s.starts_with(cut));
            }
        }
    }
}
