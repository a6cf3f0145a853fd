//! Structural equality and the total value ordering.
//!
//! `equals` is the engine's default comparer: it coerces across the two
//! numeric variants and compares records by key set, not field order.
//! `value_cmp` is the total order used by sorting and merge joins: nulls
//! first, NaN after every other float, mixed variants by a fixed rank.

use std::cmp::Ordering;

use crate::value::{Record, Value};

/// Capability for pluggable equality. Every set/quantifier operator with a
/// `_by` variant takes one of these; wrap a closure with [`comparer`].
pub trait Equivalence {
    fn equivalent(&self, a: &Value, b: &Value) -> bool;
}

/// The default structural comparer, wrapping [`equals`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Structural;

impl Equivalence for Structural {
    fn equivalent(&self, a: &Value, b: &Value) -> bool {
        equals(a, b)
    }
}

/// Adapter turning a plain closure into an [`Equivalence`].
pub struct ComparerFn<F>(F);

impl<F> Equivalence for ComparerFn<F>
where
    F: Fn(&Value, &Value) -> bool,
{
    fn equivalent(&self, a: &Value, b: &Value) -> bool {
        (self.0)(a, b)
    }
}

/// Wraps a closure as an [`Equivalence`] for the `_by` operator variants.
pub fn comparer<F>(f: F) -> ComparerFn<F>
where
    F: Fn(&Value, &Value) -> bool,
{
    ComparerFn(f)
}

/// Structural deep equality.
///
/// `Int` and `Float` compare numerically, lists element-wise, records by
/// key set with per-key recursion (field order is irrelevant). NaN is not
/// equal to anything, including itself.
pub fn equals(a: &Value, b: &Value) -> bool {
    // Strict match settles most comparisons immediately.
    if a == b {
        return true;
    }

    match (a, b) {
        (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => *i as f64 == *f,
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(a, b)| equals(a, b))
        }
        (Value::Record(x), Value::Record(y)) => record_equals(x, y),
        _ => false,
    }
}

fn record_equals(x: &Record, y: &Record) -> bool {
    if x.len() != y.len() {
        return false;
    }

    x.iter().all(|(name, value)| match y.get(name) {
        Some(other) => equals(value, other),
        None => false,
    })
}

/// Total ordering over values.
///
/// Null sorts first. Numbers compare numerically across `Int`/`Float`;
/// NaN compares equal to NaN and greater than every other number. Lists
/// compare element-wise then by length, records field-wise in declaration
/// order. Remaining mixed-variant pairs fall back to a fixed variant rank.
pub fn value_cmp(a: &Value, b: &Value) -> Ordering {
    use Value::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Less,
        (_, Null) => Ordering::Greater,
        (Bool(x), Bool(y)) => x.cmp(y),
        (Int(x), Int(y)) => x.cmp(y),
        (Float(x), Float(y)) => float_cmp(*x, *y),
        (Int(x), Float(y)) => float_cmp(*x as f64, *y),
        (Float(x), Int(y)) => float_cmp(*x, *y as f64),
        (Str(x), Str(y)) => x.cmp(y),
        (List(x), List(y)) => seq_cmp(x, y),
        (Record(x), Record(y)) => record_cmp(x, y),
        _ => variant_rank(a).cmp(&variant_rank(b)),
    }
}

/// Lexicographic comparison of value slices, shorter-is-less on ties.
pub fn seq_cmp(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match value_cmp(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

fn record_cmp(a: &Record, b: &Record) -> Ordering {
    for ((an, av), (bn, bv)) in a.iter().zip(b.iter()) {
        match an.cmp(bn).then_with(|| value_cmp(av, bv)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

fn float_cmp(x: f64, y: f64) -> Ordering {
    if x.is_nan() && y.is_nan() {
        Ordering::Equal
    } else if x.is_nan() {
        Ordering::Greater
    } else if y.is_nan() {
        Ordering::Less
    } else {
        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
    }
}

fn variant_rank(v: &Value) -> u8 {
    use Value::*;
    match v {
        Null => 0,
        Bool(_) => 1,
        Int(_) | Float(_) => 2,
        Str(_) => 3,
        List(_) => 4,
        Record(_) => 5,
    }
}
