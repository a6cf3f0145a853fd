//! Convenient re-exports for downstream crates.

pub use crate::compare::{comparer, equals, seq_cmp, value_cmp, Equivalence, Structural};
pub use crate::error::{Error, Result};
pub use crate::hash::{value_digest, Digest};
pub use crate::value::{Record, Value};
