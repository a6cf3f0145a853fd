#![forbid(unsafe_code)]
//! quarry: eager, LINQ-flavored query operators over in-memory value
//! sequences.
//!
//! Wrap a collection with [`from`] (or [`from_json`]) and chain
//! operators; every operator materializes a new [`Sequence`], and
//! terminal calls (aggregates, quantifiers, conversions) return plain
//! values.
//!
//! ```
//! use quarry::{from_json, Value};
//!
//! let people = from_json(serde_json::json!([
//!     {"name": "ada", "dept": 31},
//!     {"name": "alan", "dept": 33},
//!     {"name": "grace", "dept": 31},
//! ]));
//!
//! let sales = people
//!     .filter(|p, _| p.field("dept") == Some(&Value::Int(31)))
//!     .order_by_spec("name ASC")
//!     .select_fields("name");
//!
//! assert_eq!(sales.count(), 2);
//! assert_eq!(sales[0].field("name"), Some(&Value::Str("ada".into())));
//! ```

pub use quarry_core::hash::{value_digest, Digest};
pub use quarry_core::{
    comparer, equals, value_cmp, Equivalence, Error, Record, Result, Structural, Value,
};
pub use quarry_dsl::{
    field_projector, joiner, key, matcher, parse_field_list, parse_sort_spec, sort_comparator,
    Dir, FieldMap, SortKey,
};
pub use quarry_operators::{select_star, Dictionary, Group, Lookup, Sequence, SequenceBuilder};

/// Wraps anything sequence-like into a [`Sequence`].
pub fn from(items: impl Into<Sequence>) -> Sequence {
    items.into()
}

/// Wraps parsed JSON: an array contributes its elements, anything else
/// becomes a one-element sequence.
pub fn from_json(json: serde_json::Value) -> Sequence {
    Sequence::from_json(json)
}
