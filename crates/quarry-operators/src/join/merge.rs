//! Sort-merge equi-join.
//!
//! A fast path for joins whose condition is exact field equality: both
//! sides are sorted ascending by the mapped fields, then walked with two
//! cursors emitting the cross product of each equal-key run. The result
//! is set-equivalent to the nested-loop join for the same mapping
//! (duplicate keys included); only the emission order differs, following
//! the sort. Non-equality conditions have no mapping form and belong to
//! the nested-loop operators.

use std::cmp::Ordering;

use tracing::trace;

use quarry_core::prelude::{seq_cmp, Value};

use crate::project::select_star;
use crate::sequence::Sequence;

impl Sequence {
    /// Equi-join on a `(left_field, right_field)` mapping.
    pub fn join_on(&self, other: impl Into<Sequence>, on: &[(&str, &str)]) -> Sequence {
        self.join_on_with(other, on, select_star)
    }

    /// [`Sequence::join_on`] with an explicit projector.
    pub fn join_on_with(
        &self,
        other: impl Into<Sequence>,
        on: &[(&str, &str)],
        projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    ) -> Sequence {
        let other = other.into();

        let left_fields: Vec<&str> = on.iter().map(|(l, _)| *l).collect();
        let right_fields: Vec<&str> = on.iter().map(|(_, r)| *r).collect();

        // Decorate with the key tuple once, then sort both sides by it.
        let mut left = keyed_rows(self.items(), &left_fields);
        let mut right = keyed_rows(other.items(), &right_fields);
        left.sort_by(|a, b| seq_cmp(&a.0, &b.0));
        right.sort_by(|a, b| seq_cmp(&a.0, &b.0));

        let mut results = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            match seq_cmp(&left[i].0, &right[j].0) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    // Cross product of the equal-key runs; this is what
                    // keeps duplicate keys set-equivalent to nested loop.
                    let i_end = run_end(&left, i);
                    let j_end = run_end(&right, j);
                    trace!(
                        left_run = i_end - i,
                        right_run = j_end - j,
                        "merge join emitting key run"
                    );
                    for (_, a) in &left[i..i_end] {
                        for (_, b) in &right[j..j_end] {
                            results.push(projector(Some(*a), Some(*b)));
                        }
                    }
                    i = i_end;
                    j = j_end;
                }
            }
        }

        Sequence::from_items(results)
    }
}

fn keyed_rows<'a>(items: &'a [Value], fields: &[&str]) -> Vec<(Vec<Value>, &'a Value)> {
    items
        .iter()
        .map(|item| {
            let key = fields
                .iter()
                .map(|f| item.field(f).cloned().unwrap_or(Value::Null))
                .collect();
            (key, item)
        })
        .collect()
}

fn run_end(rows: &[(Vec<Value>, &Value)], start: usize) -> usize {
    let key = &rows[start].0;
    start
        + rows[start..]
            .iter()
            .take_while(|(k, _)| seq_cmp(k, key) == Ordering::Equal)
            .count()
}
