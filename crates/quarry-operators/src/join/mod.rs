//! The join family: nested-loop inner/outer/full joins, cartesian cross
//! join, the sort-merge equi-join, and the correlated apply operators.
//!
//! Nested-loop joins emit in left-then-right encounter order. The merge
//! join's output follows the sort order it imposes, which is an accepted
//! divergence for the same logical result set.

mod apply;
mod merge;

use quarry_core::prelude::Value;

use crate::project::select_star;
use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JoinKind {
    Inner,
    LeftOuter,
    Full,
}

fn loop_join(
    left: &[Value],
    right: &[Value],
    joiner: impl Fn(&Value, &Value) -> bool,
    projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    kind: JoinKind,
) -> Vec<Value> {
    let mut results = Vec::new();
    // Right-side match tracking is only needed for the trailing full-join
    // pass.
    let mut right_matched = vec![false; if kind == JoinKind::Full { right.len() } else { 0 }];

    for a in left {
        let mut matched = false;
        for (j, b) in right.iter().enumerate() {
            if joiner(a, b) {
                matched = true;
                results.push(projector(Some(a), Some(b)));
                if kind == JoinKind::Full {
                    right_matched[j] = true;
                }
            }
        }

        if !matched && kind != JoinKind::Inner {
            results.push(projector(Some(a), None));
        }
    }

    if kind == JoinKind::Full {
        for (j, b) in right.iter().enumerate() {
            if !right_matched[j] {
                results.push(projector(None, Some(b)));
            }
        }
    }

    results
}

impl Sequence {
    /// Inner join: emits a merged row for every left/right pair the
    /// joiner accepts. Unmatched rows on either side contribute nothing.
    pub fn join(
        &self,
        other: impl Into<Sequence>,
        joiner: impl Fn(&Value, &Value) -> bool,
    ) -> Sequence {
        self.join_with(other, joiner, select_star)
    }

    /// [`Sequence::join`] with an explicit projector.
    pub fn join_with(
        &self,
        other: impl Into<Sequence>,
        joiner: impl Fn(&Value, &Value) -> bool,
        projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    ) -> Sequence {
        let other = other.into();
        Sequence::from_items(loop_join(
            self.items(),
            other.items(),
            joiner,
            projector,
            JoinKind::Inner,
        ))
    }

    /// Left-outer join: left rows with no match still emit once, with the
    /// right side absent.
    pub fn outer_join(
        &self,
        other: impl Into<Sequence>,
        joiner: impl Fn(&Value, &Value) -> bool,
    ) -> Sequence {
        self.outer_join_with(other, joiner, select_star)
    }

    /// [`Sequence::outer_join`] with an explicit projector.
    pub fn outer_join_with(
        &self,
        other: impl Into<Sequence>,
        joiner: impl Fn(&Value, &Value) -> bool,
        projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    ) -> Sequence {
        let other = other.into();
        Sequence::from_items(loop_join(
            self.items(),
            other.items(),
            joiner,
            projector,
            JoinKind::LeftOuter,
        ))
    }

    /// Full join: unmatched rows from both sides are kept. Unmatched left
    /// rows emit inline; never-matched right rows are appended after the
    /// main pass.
    pub fn full_join(
        &self,
        other: impl Into<Sequence>,
        joiner: impl Fn(&Value, &Value) -> bool,
    ) -> Sequence {
        self.full_join_with(other, joiner, select_star)
    }

    /// [`Sequence::full_join`] with an explicit projector.
    pub fn full_join_with(
        &self,
        other: impl Into<Sequence>,
        joiner: impl Fn(&Value, &Value) -> bool,
        projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    ) -> Sequence {
        let other = other.into();
        Sequence::from_items(loop_join(
            self.items(),
            other.items(),
            joiner,
            projector,
            JoinKind::Full,
        ))
    }

    /// Cartesian product: every left row paired with every right row.
    pub fn cross_join(&self, other: impl Into<Sequence>) -> Sequence {
        self.cross_join_with(other, select_star)
    }

    /// [`Sequence::cross_join`] with an explicit projector.
    pub fn cross_join_with(
        &self,
        other: impl Into<Sequence>,
        projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    ) -> Sequence {
        let other = other.into();
        let mut results = Vec::with_capacity(self.len() * other.len());
        for a in self.iter() {
            for b in other.iter() {
                results.push(projector(Some(a), Some(b)));
            }
        }

        Sequence::from_items(results)
    }
}
