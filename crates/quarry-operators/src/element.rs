//! Element operators: positional access, first/last scans, and the
//! exactly-one contract of `single`.
//!
//! Every call shape is its own named method (`first`, `first_or`,
//! `first_where`, `first_where_or`, ...) rather than one method
//! inspecting its arguments at runtime.

use quarry_core::prelude::{Error, Result, Value};

use crate::sequence::Sequence;

impl Sequence {
    /// The element at `index`, or `None` out of range. Never panics.
    pub fn element_at(&self, index: usize) -> Option<&Value> {
        self.get(index)
    }

    /// The element at `index`, or `default` out of range.
    pub fn element_at_or(&self, index: usize, default: impl Into<Value>) -> Value {
        match self.get(index) {
            Some(item) => item.clone(),
            None => default.into(),
        }
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&Value> {
        self.get(0)
    }

    /// The first element satisfying the predicate.
    pub fn first_where(&self, predicate: impl Fn(&Value, usize) -> bool) -> Option<&Value> {
        self.iter()
            .enumerate()
            .find(|(i, item)| predicate(item, *i))
            .map(|(_, item)| item)
    }

    /// The first element, or `default` when empty.
    pub fn first_or(&self, default: impl Into<Value>) -> Value {
        self.first().cloned().unwrap_or_else(|| default.into())
    }

    /// The first element satisfying the predicate, or `default`.
    pub fn first_where_or(
        &self,
        predicate: impl Fn(&Value, usize) -> bool,
        default: impl Into<Value>,
    ) -> Value {
        self.first_where(predicate)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&Value> {
        self.items().last()
    }

    /// The last element satisfying the predicate (backward scan).
    pub fn last_where(&self, predicate: impl Fn(&Value, usize) -> bool) -> Option<&Value> {
        self.iter()
            .enumerate()
            .rev()
            .find(|(i, item)| predicate(item, *i))
            .map(|(_, item)| item)
    }

    /// The last element, or `default` when empty.
    pub fn last_or(&self, default: impl Into<Value>) -> Value {
        self.last().cloned().unwrap_or_else(|| default.into())
    }

    /// The last element satisfying the predicate, or `default`.
    pub fn last_where_or(
        &self,
        predicate: impl Fn(&Value, usize) -> bool,
        default: impl Into<Value>,
    ) -> Value {
        self.last_where(predicate)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    /// The only element of the sequence.
    ///
    /// Fails with [`Error::AmbiguousMatch`] when there is more than one
    /// element and [`Error::NoMatch`] when there is none.
    pub fn single(&self) -> Result<Value> {
        match self.len() {
            0 => Err(Error::NoMatch),
            1 => Ok(self[0].clone()),
            _ => Err(Error::AmbiguousMatch),
        }
    }

    /// The only element, or `default` when the sequence is empty. More
    /// than one element is still ambiguous.
    pub fn single_or(&self, default: impl Into<Value>) -> Result<Value> {
        match self.len() {
            0 => Ok(default.into()),
            1 => Ok(self[0].clone()),
            _ => Err(Error::AmbiguousMatch),
        }
    }

    /// The only element satisfying the predicate.
    ///
    /// The scan stops as soon as a second match is seen.
    pub fn single_where(&self, predicate: impl Fn(&Value, usize) -> bool) -> Result<Value> {
        match self.scan_single(predicate)? {
            Some(item) => Ok(item),
            None => Err(Error::NoMatch),
        }
    }

    /// The only element satisfying the predicate, or `default` when
    /// nothing matches. Two or more matches are still ambiguous.
    pub fn single_where_or(
        &self,
        predicate: impl Fn(&Value, usize) -> bool,
        default: impl Into<Value>,
    ) -> Result<Value> {
        match self.scan_single(predicate)? {
            Some(item) => Ok(item),
            None => Ok(default.into()),
        }
    }

    fn scan_single(&self, predicate: impl Fn(&Value, usize) -> bool) -> Result<Option<Value>> {
        let mut found: Option<&Value> = None;
        for (i, item) in self.iter().enumerate() {
            if predicate(item, i) {
                if found.is_some() {
                    return Err(Error::AmbiguousMatch);
                }
                found = Some(item);
            }
        }

        Ok(found.cloned())
    }
}
