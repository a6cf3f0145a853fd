//! Projection: one-to-one `select`, one-to-many `select_many`, and the
//! default combination projector `select_star`.

use quarry_core::prelude::{Record, Value};

use crate::sequence::Sequence;

/// The default projector for joins, zips, and expansions: a shallow merge
/// of two record values into a new record, left fields winning on name
/// conflict. Absent or non-record sides contribute no fields.
pub fn select_star(a: Option<&Value>, b: Option<&Value>) -> Value {
    let mut merged = Record::new();
    if let Some(Value::Record(left)) = a {
        merged.merge_absent(left);
    }
    if let Some(Value::Record(right)) = b {
        merged.merge_absent(right);
    }

    Value::Record(merged)
}

/// Expands each element through `apply`, emitting projected rows.
///
/// A `List` result emits one row per sub-element, any other value emits a
/// single row, and `None` emits nothing. With `keep_unmatched`, a `None`
/// emits one `(element, absent)` row instead. Shared by `select_many` and
/// the correlated apply joins, whose only difference is that flag.
pub(crate) fn correlate(
    items: &[Value],
    apply: impl Fn(&Value, usize) -> Option<Value>,
    projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    keep_unmatched: bool,
) -> Vec<Value> {
    let mut results = Vec::new();
    for (i, item) in items.iter().enumerate() {
        match apply(item, i) {
            Some(Value::List(subs)) => {
                for sub in &subs {
                    results.push(projector(Some(item), Some(sub)));
                }
            }
            Some(single) => results.push(projector(Some(item), Some(&single))),
            None => {
                if keep_unmatched {
                    results.push(projector(Some(item), None));
                }
            }
        }
    }

    results
}

impl Sequence {
    /// Maps every element (with its index) through the projector,
    /// preserving order and count.
    pub fn select(&self, projector: impl Fn(&Value, usize) -> Value) -> Sequence {
        Sequence::from_items(
            self.iter()
                .enumerate()
                .map(|(i, item)| projector(item, i))
                .collect(),
        )
    }

    /// Field-list shorthand, e.g. `"id, firstName as name"`.
    pub fn select_fields(&self, spec: &str) -> Sequence {
        self.select(quarry_dsl::field_projector(quarry_dsl::parse_field_list(
            spec,
        )))
    }

    /// Expands each element into zero or more rows via `expander`,
    /// merging element and sub-element with [`select_star`]. Elements the
    /// expander returns `None` for are dropped.
    pub fn select_many(&self, expander: impl Fn(&Value, usize) -> Option<Value>) -> Sequence {
        self.select_many_with(expander, select_star)
    }

    /// [`Sequence::select_many`] with an explicit projector.
    pub fn select_many_with(
        &self,
        expander: impl Fn(&Value, usize) -> Option<Value>,
        projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    ) -> Sequence {
        Sequence::from_items(correlate(self.items(), expander, projector, false))
    }
}
