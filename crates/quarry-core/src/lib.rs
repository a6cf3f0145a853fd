#![forbid(unsafe_code)]
//! quarry-core: the dynamic value model the query engine operates on.
//!
//! Everything here is pure data plus the two relations the operator crate
//! builds on: structural equality (`compare::equals`) and a total value
//! ordering (`compare::value_cmp`). No I/O, no async, no interior mutability.

pub mod compare;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod value;

pub use compare::{comparer, equals, value_cmp, Equivalence, Structural};
pub use error::{Error, Result};
pub use value::{Record, Value};
