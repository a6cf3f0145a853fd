#![forbid(unsafe_code)]
//! quarry-operators: the `Sequence` container and its operator surface
//! (element/filter/project/aggregate/sort/group/join/set/partition).
//!
//! Design intent:
//! - Every operator is eager and synchronous; each transformation returns
//!   a freshly materialized `Sequence`, never a view of the receiver.
//! - The operator core is defined purely over closures; the string
//!   mini-languages from `quarry-dsl` are thin adapters on top.
//! - Mutation lives only in `SequenceBuilder`; the container itself has
//!   no in-place variants.

pub mod aggregate;
pub mod builder;
pub mod element;
pub mod filter;
pub mod group;
pub mod join;
pub mod partition;
pub mod project;
pub mod quantify;
pub mod sequence;
pub mod set;
pub mod sort;

pub use builder::SequenceBuilder;
pub use group::{Dictionary, Group, Lookup};
pub use project::select_star;
pub use sequence::Sequence;
