use thiserror::Error;

/// Canonical result for the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// The three fatal conditions in the engine. Every other operator is total
/// and reports "not found" through `Option`, empty sequences, or the
/// numeric sentinels the aggregates document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ambiguous match: more than one element satisfied the predicate")]
    AmbiguousMatch,

    #[error("no match: no element satisfied the predicate and no default was supplied")]
    NoMatch,

    #[error("duplicate key: {0}")]
    DuplicateKey(String),
}
