//! Keyed conversions and grouping: `Lookup` (multi-map), `Dictionary`
//! (unique keys), and `group_by` built on top of the lookup.
//!
//! Keys are compared structurally. Buckets are indexed by canonical value
//! digest with an `equals` check on the candidates, so digest collisions
//! cannot merge distinct keys.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use quarry_core::hash::{value_digest, Digest};
use quarry_core::prelude::{equals, Error, Record, Result, Value};

use crate::sequence::Sequence;

/// One grouping bucket: a key and the members that keyed to it, in
/// encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub key: Value,
    pub items: Vec<Value>,
}

impl Group {
    /// The record form `group_by` emits: `{key, items}`.
    pub fn to_value(&self) -> Value {
        let mut r = Record::new();
        r.insert("key", self.key.clone());
        r.insert("items", Value::List(self.items.clone()));
        Value::Record(r)
    }
}

impl From<Group> for Value {
    fn from(group: Group) -> Value {
        group.to_value()
    }
}

/// A one-to-many key→values mapping. Keys keep first-encounter order and
/// buckets keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    entries: Vec<(Value, Vec<Value>)>,
    index: HashMap<Digest, Vec<usize>>,
}

impl Lookup {
    pub fn new() -> Self {
        Lookup::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, digest: Digest, key: &Value) -> Option<usize> {
        self.index
            .get(&digest)?
            .iter()
            .copied()
            .find(|&i| equals(&self.entries[i].0, key))
    }

    /// Appends `value` to the bucket for `key`, creating the bucket on
    /// first encounter.
    pub fn insert(&mut self, key: Value, value: Value) {
        let digest = value_digest(&key);
        match self.position(digest, &key) {
            Some(i) => self.entries[i].1.push(value),
            None => {
                self.index
                    .entry(digest)
                    .or_default()
                    .push(self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    /// The bucket for `key`, if any element keyed to it.
    pub fn get(&self, key: &Value) -> Option<&[Value]> {
        let i = self.position(value_digest(key), key)?;
        Some(&self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &[Value])> {
        self.entries.iter().map(|(k, vs)| (k, vs.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Dissolves the lookup into groups, preserving key order.
    pub fn into_groups(self) -> Vec<Group> {
        self.entries
            .into_iter()
            .map(|(key, items)| Group { key, items })
            .collect()
    }
}

/// A one-to-one key→value mapping. Inserting a key twice is an error,
/// never a silent overwrite.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(Value, Value)>,
    index: HashMap<Digest, Vec<usize>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, digest: Digest, key: &Value) -> Option<usize> {
        self.index
            .get(&digest)?
            .iter()
            .copied()
            .find(|&i| equals(&self.entries[i].0, key))
    }

    pub fn insert(&mut self, key: Value, value: Value) -> Result<()> {
        let digest = value_digest(&key);
        if self.position(digest, &key).is_some() {
            return Err(Error::DuplicateKey(key.to_string()));
        }

        self.index
            .entry(digest)
            .or_default()
            .push(self.entries.len());
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        let i = self.position(value_digest(key), key)?;
        Some(&self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl Sequence {
    /// Builds a [`Lookup`] keyed by `key(element, index)`, bucketing the
    /// raw elements.
    pub fn to_lookup(&self, key: impl Fn(&Value, usize) -> Value) -> Lookup {
        self.to_lookup_with(key, |item, _| item.clone())
    }

    /// Builds a [`Lookup`] bucketing `projector(element, index)` values.
    pub fn to_lookup_with(
        &self,
        key: impl Fn(&Value, usize) -> Value,
        projector: impl Fn(&Value, usize) -> Value,
    ) -> Lookup {
        let mut lookup = Lookup::new();
        for (i, item) in self.iter().enumerate() {
            lookup.insert(key(item, i), projector(item, i));
        }
        debug!(elements = self.len(), buckets = lookup.len(), "built lookup");

        lookup
    }

    /// Builds a [`Dictionary`] keyed by `key(element, index)`.
    ///
    /// Fails with [`Error::DuplicateKey`] when two elements map to the
    /// same key.
    pub fn to_dictionary(&self, key: impl Fn(&Value, usize) -> Value) -> Result<Dictionary> {
        self.to_dictionary_with(key, |item, _| item.clone())
    }

    /// [`Sequence::to_dictionary`] storing projected values.
    pub fn to_dictionary_with(
        &self,
        key: impl Fn(&Value, usize) -> Value,
        projector: impl Fn(&Value, usize) -> Value,
    ) -> Result<Dictionary> {
        let mut dictionary = Dictionary::new();
        for (i, item) in self.iter().enumerate() {
            dictionary.insert(key(item, i), projector(item, i))?;
        }

        Ok(dictionary)
    }

    /// Groups elements by `key(element, index)`, one group per distinct
    /// key in first-encounter order. Each group is emitted as a
    /// `{key, items}` record so the result stays chainable.
    pub fn group_by(&self, key: impl Fn(&Value, usize) -> Value) -> Sequence {
        self.group_by_with(key, |item, _| item.clone())
    }

    /// [`Sequence::group_by`] grouping projected values.
    pub fn group_by_with(
        &self,
        key: impl Fn(&Value, usize) -> Value,
        projector: impl Fn(&Value, usize) -> Value,
    ) -> Sequence {
        self.to_lookup_with(key, projector)
            .into_groups()
            .into_iter()
            .map(Value::from)
            .collect()
    }
}
