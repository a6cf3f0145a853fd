//! Sort-specification grammar: a comma-separated list of
//! `<field> [ASC|DESC]` tokens, default ascending.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use quarry_core::prelude::{value_cmp, Value};

static SORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\w+)\b\s*(asc|desc)?\s*(?:,|$)").expect("sort spec regex")
});

static NULL: Value = Value::Null;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// Applies the direction: `Desc` reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

/// One parsed `<field> [direction]` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub dir: Dir,
}

/// Parses a sort spec into its ordered keys.
///
/// Unparseable fragments are skipped; an empty result compiles to a
/// comparator under which everything is equal.
pub fn parse_sort_spec(spec: &str) -> Vec<SortKey> {
    SORT_RE
        .captures_iter(spec)
        .map(|cap| {
            let dir = match cap.get(2) {
                Some(d) if d.as_str().eq_ignore_ascii_case("asc") => Dir::Asc,
                Some(_) => Dir::Desc,
                None => Dir::Asc,
            };
            SortKey {
                field: cap[1].to_string(),
                dir,
            }
        })
        .collect()
}

/// Compiles sort keys into a composite comparator: fields are evaluated
/// in declared order and the first nonzero comparison wins, scaled by the
/// field's direction. Missing fields and non-records compare as null.
pub fn sort_comparator(keys: Vec<SortKey>) -> impl Fn(&Value, &Value) -> Ordering {
    move |a, b| {
        for keyed in &keys {
            let x = a.field(&keyed.field).unwrap_or(&NULL);
            let y = b.field(&keyed.field).unwrap_or(&NULL);
            let ordering = keyed.dir.apply(value_cmp(x, y));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directions_case_insensitively() {
        let keys = parse_sort_spec("name ASC, age desc, id");
        assert_eq!(
            keys,
            vec![
                SortKey {
                    field: "name".into(),
                    dir: Dir::Asc
                },
                SortKey {
                    field: "age".into(),
                    dir: Dir::Desc
                },
                SortKey {
                    field: "id".into(),
                    dir: Dir::Asc
                },
            ]
        );
    }

    #[test]
    fn tolerates_whitespace_and_trailing_comma() {
        let keys = parse_sort_spec("  name  DESC , ");
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].field, "name");
        assert_eq!(keys[0].dir, Dir::Desc);
    }

    #[test]
    fn comparator_applies_keys_in_order() {
        let a = Value::from_json(serde_json::json!({"x": 1, "y": 5}));
        let b = Value::from_json(serde_json::json!({"x": 1, "y": 3}));
        let cmp = sort_comparator(parse_sort_spec("x asc, y desc"));
        assert_eq!(cmp(&a, &b), Ordering::Less);

        let only_x = sort_comparator(parse_sort_spec("x"));
        assert_eq!(only_x(&a, &b), Ordering::Equal);
    }

    #[test]
    fn missing_fields_compare_as_null() {
        let a = Value::from_json(serde_json::json!({"x": 1}));
        let b = Value::from_json(serde_json::json!({}));
        let cmp = sort_comparator(parse_sort_spec("x"));
        assert_eq!(cmp(&b, &a), Ordering::Less);
    }
}
