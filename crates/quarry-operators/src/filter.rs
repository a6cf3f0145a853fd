//! Predicate filtering.

use quarry_core::prelude::{Record, Value};

use crate::sequence::Sequence;

impl Sequence {
    /// Keeps the elements satisfying the predicate, preserving relative
    /// order.
    pub fn filter(&self, predicate: impl Fn(&Value, usize) -> bool) -> Sequence {
        Sequence::from_items(
            self.iter()
                .enumerate()
                .filter(|(i, item)| predicate(item, *i))
                .map(|(_, item)| item.clone())
                .collect(),
        )
    }

    /// Field-map shorthand: keeps elements whose fields equal every value
    /// listed in `spec`.
    pub fn filter_matching(&self, spec: &Record) -> Sequence {
        self.filter(quarry_dsl::matcher(spec.clone()))
    }
}
