//! Ordering: comparator and sort-spec sorts, reverse, and shuffle.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use quarry_core::prelude::Value;

use crate::sequence::Sequence;

impl Sequence {
    /// Sorts by an explicit comparator. The sort is stable: elements the
    /// comparator considers equal keep their relative input order. Always
    /// returns a fresh sequence, including for 0- and 1-element inputs.
    pub fn order_by(&self, comparator: impl Fn(&Value, &Value) -> Ordering) -> Sequence {
        let mut items = self.to_vec();
        if items.len() > 1 {
            items.sort_by(|a, b| comparator(a, b));
        }

        Sequence::from_items(items)
    }

    /// Sort-spec shorthand, e.g. `"lastName ASC, age DESC"`.
    pub fn order_by_spec(&self, spec: &str) -> Sequence {
        self.order_by(quarry_dsl::sort_comparator(quarry_dsl::parse_sort_spec(
            spec,
        )))
    }

    /// A new sequence with the elements in reverse order.
    pub fn reverse(&self) -> Sequence {
        let mut items = self.to_vec();
        items.reverse();
        Sequence::from_items(items)
    }

    /// A uniformly random permutation of the elements (Fisher–Yates via
    /// `rand`). The receiver is untouched.
    pub fn shuffle(&self) -> Sequence {
        let mut items = self.to_vec();
        if items.len() > 1 {
            items.shuffle(&mut rand::rng());
        }

        Sequence::from_items(items)
    }

    /// Deterministic shuffle for reproducible runs.
    pub fn shuffle_seeded(&self, seed: u64) -> Sequence {
        let mut items = self.to_vec();
        if items.len() > 1 {
            items.shuffle(&mut StdRng::seed_from_u64(seed));
        }

        Sequence::from_items(items)
    }
}
