//! Quantifiers: any / all / contains.

use quarry_core::prelude::{Equivalence, Structural, Value};

use crate::sequence::Sequence;

impl Sequence {
    /// True when the sequence holds at least one element.
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// True when at least one element satisfies the predicate.
    pub fn any_where(&self, predicate: impl Fn(&Value, usize) -> bool) -> bool {
        self.iter().enumerate().any(|(i, item)| predicate(item, i))
    }

    /// True when every element satisfies the predicate; vacuously true on
    /// an empty sequence.
    pub fn all(&self, predicate: impl Fn(&Value, usize) -> bool) -> bool {
        self.iter().enumerate().all(|(i, item)| predicate(item, i))
    }

    /// True when some element structurally equals `item`.
    pub fn contains(&self, item: &Value) -> bool {
        self.contains_by(item, &Structural)
    }

    /// [`Sequence::contains`] under a caller-supplied comparer.
    pub fn contains_by(&self, item: &Value, comparer: &dyn Equivalence) -> bool {
        self.iter().any(|a| comparer.equivalent(a, item))
    }
}
