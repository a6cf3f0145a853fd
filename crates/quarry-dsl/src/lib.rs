#![forbid(unsafe_code)]
//! quarry-dsl: the engine's two embedded mini-languages, plus the
//! key/value shorthand forms.
//!
//! Everything here compiles down to a plain closure over `Value`; the
//! operator crate is defined purely in terms of those closures, and this
//! layer is an optional convenience on top:
//!
//! - sort specs: `"name ASC, age DESC"` → a composite comparator
//! - field lists: `"id, firstName as name"` → a record projector
//! - field maps: a record of required field values → a predicate, or a
//!   left-field/right-field mapping → a join condition
//!
//! Both grammars are tolerant: direction keywords are case-insensitive,
//! whitespace and trailing commas are accepted, and tokens that do not
//! parse are skipped rather than rejected.

pub mod fields;
pub mod matcher;
pub mod sort;

pub use fields::{field_projector, parse_field_list, FieldMap};
pub use matcher::{joiner, key, matcher};
pub use sort::{parse_sort_spec, sort_comparator, Dir, SortKey};
