//! The mutable counterpart to `Sequence`.
//!
//! Transformation operators never mutate; the builder is the one place
//! that owns a mutable buffer. A single writer owns it, which the borrow
//! rules enforce.

use quarry_core::prelude::Value;

use crate::sequence::Sequence;

/// Accumulates elements for a [`Sequence`].
#[derive(Debug, Clone, Default)]
pub struct SequenceBuilder {
    items: Vec<Value>,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        SequenceBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element.
    pub fn push(&mut self, item: impl Into<Value>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Removes the most recently added element strictly equal to `item`.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, item: &Value) -> bool {
        match self.items.iter().rposition(|existing| existing == item) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drops every element.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Finishes the builder into an immutable sequence.
    pub fn build(self) -> Sequence {
        Sequence::from(self.items)
    }
}

impl From<Sequence> for SequenceBuilder {
    fn from(seq: Sequence) -> Self {
        SequenceBuilder {
            items: seq.into_vec(),
        }
    }
}

impl Extend<Value> for SequenceBuilder {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
