//! Correlated apply operators.
//!
//! Unlike the joins in this family, the right-hand side is computed per
//! left element. The two operators differ only in what happens when the
//! apply function returns nothing: `cross_apply` drops the left element,
//! `outer_apply` keeps it with the right side absent.

use quarry_core::prelude::Value;

use crate::project::{correlate, select_star};
use crate::sequence::Sequence;

impl Sequence {
    /// Expands each element through `apply`, dropping elements the
    /// function returns `None` for. A `List` result emits one row per
    /// sub-element (none for an empty list), any other value emits one.
    pub fn cross_apply(&self, apply: impl Fn(&Value, usize) -> Option<Value>) -> Sequence {
        self.cross_apply_with(apply, select_star)
    }

    /// [`Sequence::cross_apply`] with an explicit projector.
    pub fn cross_apply_with(
        &self,
        apply: impl Fn(&Value, usize) -> Option<Value>,
        projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    ) -> Sequence {
        Sequence::from_items(correlate(self.items(), apply, projector, false))
    }

    /// Like [`Sequence::cross_apply`], but an element whose apply result
    /// is `None` still emits once with the right side absent.
    pub fn outer_apply(&self, apply: impl Fn(&Value, usize) -> Option<Value>) -> Sequence {
        self.outer_apply_with(apply, select_star)
    }

    /// [`Sequence::outer_apply`] with an explicit projector.
    pub fn outer_apply_with(
        &self,
        apply: impl Fn(&Value, usize) -> Option<Value>,
        projector: impl Fn(Option<&Value>, Option<&Value>) -> Value,
    ) -> Sequence {
        Sequence::from_items(correlate(self.items(), apply, projector, true))
    }
}
