//! The sequence container every operator receives and returns.

use serde::{Deserialize, Serialize};

use quarry_core::prelude::{Equivalence, Structural, Value};

/// An ordered, owned collection of values.
///
/// Construction from borrowed data copies; construction from an owned
/// `Vec` moves. Either way the container never aliases caller storage,
/// so no later operation can observe caller mutation (or vice versa).
/// Transformation operators allocate a new `Sequence` per call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    items: Vec<Value>,
}

impl Sequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Sequence::default()
    }

    pub(crate) fn from_items(items: Vec<Value>) -> Self {
        Sequence { items }
    }

    /// Wraps a single value: a `List` contributes its elements, anything
    /// else becomes a one-element sequence.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::List(items) => Sequence { items },
            other => Sequence { items: vec![other] },
        }
    }

    /// Parses JSON and wraps it via [`Sequence::from_value`].
    pub fn from_json(json: serde_json::Value) -> Self {
        Sequence::from_value(Value::from_json(json))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub(crate) fn items(&self) -> &[Value] {
        &self.items
    }

    /// Copies the elements out.
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Consumes the sequence, yielding its elements.
    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    /// True when both sequences have the same length and structurally
    /// equal elements position by position.
    pub fn sequence_equals(&self, other: impl Into<Sequence>) -> bool {
        self.sequence_equals_by(other, &Structural)
    }

    /// [`Sequence::sequence_equals`] under a caller-supplied comparer.
    pub fn sequence_equals_by(
        &self,
        other: impl Into<Sequence>,
        comparer: &dyn Equivalence,
    ) -> bool {
        let other = other.into();
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| comparer.equivalent(a, b))
    }

    /// Returns a copy of the sequence, or a one-element sequence holding
    /// `default` when this one is empty.
    pub fn default_if_empty(&self, default: impl Into<Value>) -> Sequence {
        if self.is_empty() {
            Sequence {
                items: vec![default.into()],
            }
        } else {
            self.clone()
        }
    }
}

impl std::ops::Index<usize> for Sequence {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(items: Vec<Value>) -> Self {
        Sequence { items }
    }
}

impl From<&[Value]> for Sequence {
    fn from(items: &[Value]) -> Self {
        Sequence {
            items: items.to_vec(),
        }
    }
}

impl From<&Sequence> for Sequence {
    fn from(seq: &Sequence) -> Self {
        seq.clone()
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Sequence {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
