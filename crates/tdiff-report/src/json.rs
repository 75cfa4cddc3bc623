use serde::Serialize;
use tdiff_diff::{Divergence, DivergenceCounts, DivergenceSet};

use crate::reporter::Reporter;

/// Machine-readable form of a report. Carries the same truncation as the
/// text form: only the shown records are listed.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub total: usize,
    pub shown: usize,
    pub omitted: usize,
    pub counts: DivergenceCounts,
    pub divergences: &'a [Divergence],
}

impl<'a> JsonReport<'a> {
    pub fn new(reporter: &Reporter, set: &'a DivergenceSet) -> Self {
        let shown = reporter.shown(set);
        Self {
            total: set.len(),
            shown,
            omitted: reporter.omitted(set),
            counts: set.counts(),
            divergences: &set.as_slice()[..shown],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tdiff_diff::compare;
    use tdiff_types::Value;

    #[test]
    fn report_fields() {
        let a = Value::from(json!({"only_a": 1, "v": {"n": 1}, "list": [1, 2]}));
        let b = Value::from(json!({"only_b": 2, "v": 5, "list": [1, 2, 3]}));
        let set = compare(&a, &b);

        let report = JsonReport::new(&Reporter::new(2), &set);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total"], 4);
        assert_eq!(json["shown"], 2);
        assert_eq!(json["omitted"], 2);
        assert_eq!(
            json["counts"],
            json!({
                "type_mismatches": 1,
                "missing_keys": 2,
                "length_mismatches": 1,
                "value_mismatches": 0,
            })
        );
        assert_eq!(
            json["divergences"],
            json!([
                {
                    "path": "root.list",
                    "kind": {"type": "length_mismatch", "a": 2, "b": 3},
                    "message": "root.list: list len 2 vs 3",
                },
                {
                    "path": "root.only_a",
                    "kind": {"type": "only_in_a"},
                    "message": "root.only_a: MISSING in b (a = 1)",
                },
            ])
        );
    }

    #[test]
    fn written_json_parses_back() {
        let set = compare(&Value::from(json!([1])), &Value::from(json!([2])));
        let mut out = Vec::new();
        Reporter::default().write_json(&set, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["total"], 1);
        assert_eq!(parsed["omitted"], 0);
        assert_eq!(parsed["divergences"][0]["path"], "root[0]");
    }
}
