//! Set algebra over sequences: distinct, union, intersect, except,
//! concat, and positional zip. Every operator is pluggable through the
//! `Equivalence` capability; the plain forms use structural equality.

use quarry_core::prelude::{Equivalence, Structural, Value};

use crate::project::select_star;
use crate::sequence::Sequence;

impl Sequence {
    /// Keeps the first occurrence of each equivalence class, preserving
    /// relative order.
    pub fn distinct(&self) -> Sequence {
        self.distinct_by(&Structural)
    }

    /// [`Sequence::distinct`] under a caller-supplied comparer.
    pub fn distinct_by(&self, comparer: &dyn Equivalence) -> Sequence {
        let mut results: Vec<Value> = Vec::new();
        for item in self.iter() {
            if !results.iter().any(|seen| comparer.equivalent(seen, item)) {
                results.push(item.clone());
            }
        }

        Sequence::from_items(results)
    }

    /// Both sequences appended, then deduplicated.
    pub fn union(&self, other: impl Into<Sequence>) -> Sequence {
        self.union_by(other, &Structural)
    }

    pub fn union_by(&self, other: impl Into<Sequence>, comparer: &dyn Equivalence) -> Sequence {
        self.concat(other).distinct_by(comparer)
    }

    /// Elements of `self` with at least one equivalent in `other`,
    /// deduplicated.
    pub fn intersect(&self, other: impl Into<Sequence>) -> Sequence {
        self.intersect_by(other, &Structural)
    }

    pub fn intersect_by(
        &self,
        other: impl Into<Sequence>,
        comparer: &dyn Equivalence,
    ) -> Sequence {
        let other = other.into();
        self.filter(|item, _| other.contains_by(item, comparer))
            .distinct_by(comparer)
    }

    /// Elements of `self` with no equivalent in `other`, deduplicated.
    pub fn except(&self, other: impl Into<Sequence>) -> Sequence {
        self.except_by(other, &Structural)
    }

    pub fn except_by(&self, other: impl Into<Sequence>, comparer: &dyn Equivalence) -> Sequence {
        let other = other.into();
        self.filter(|item, _| !other.contains_by(item, comparer))
            .distinct_by(comparer)
    }

    /// Order-preserving append, no deduplication.
    pub fn concat(&self, other: impl Into<Sequence>) -> Sequence {
        let mut items = self.to_vec();
        items.extend(other.into().into_vec());
        Sequence::from_items(items)
    }

    /// Pairs elements positionally up to the shorter side, merging each
    /// pair with [`select_star`]. Excess elements are dropped.
    pub fn zip(&self, other: impl Into<Sequence>) -> Sequence {
        self.zip_with(other, |a, b| select_star(Some(a), Some(b)))
    }

    /// [`Sequence::zip`] with an explicit pair projector.
    pub fn zip_with(
        &self,
        other: impl Into<Sequence>,
        projector: impl Fn(&Value, &Value) -> Value,
    ) -> Sequence {
        let other = other.into();
        Sequence::from_items(
            self.iter()
                .zip(other.iter())
                .map(|(a, b)| projector(a, b))
                .collect(),
        )
    }
}
