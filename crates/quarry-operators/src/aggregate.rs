//! Numeric aggregates.
//!
//! Reductions run over `f64`: `Int`/`Float` coerce, any other element
//! poisons the result with NaN. Degenerate inputs keep the reduction's
//! numeric identities: `avg` of an empty sequence is NaN (0/0) and
//! `max`/`min` of an empty sequence are negative/positive infinity.
//! None of these raise; callers guard.

use quarry_core::prelude::Value;

use crate::sequence::Sequence;

fn numeric(v: &Value) -> f64 {
    v.as_f64().unwrap_or(f64::NAN)
}

// f64::max/min would skip NaN; contamination must stick.
fn nan_max(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.max(x)
    }
}

fn nan_min(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.min(x)
    }
}

impl Sequence {
    /// The number of elements.
    pub fn count(&self) -> usize {
        self.len()
    }

    /// The number of elements satisfying the predicate.
    pub fn count_where(&self, predicate: impl Fn(&Value, usize) -> bool) -> usize {
        self.iter()
            .enumerate()
            .filter(|(i, item)| predicate(item, *i))
            .count()
    }

    /// Sum of the elements.
    pub fn sum(&self) -> f64 {
        self.iter().map(numeric).sum()
    }

    /// Sum of `extractor(element, index)` values.
    pub fn sum_by(&self, extractor: impl Fn(&Value, usize) -> Value) -> f64 {
        self.iter()
            .enumerate()
            .map(|(i, item)| numeric(&extractor(item, i)))
            .sum()
    }

    /// Arithmetic mean; NaN on an empty sequence.
    pub fn avg(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Mean of extracted values; NaN on an empty sequence.
    pub fn avg_by(&self, extractor: impl Fn(&Value, usize) -> Value) -> f64 {
        self.sum_by(extractor) / self.len() as f64
    }

    /// Largest element; negative infinity on an empty sequence.
    pub fn max(&self) -> f64 {
        self.iter().map(numeric).fold(f64::NEG_INFINITY, nan_max)
    }

    /// Largest extracted value; negative infinity on an empty sequence.
    pub fn max_by(&self, extractor: impl Fn(&Value, usize) -> Value) -> f64 {
        self.iter()
            .enumerate()
            .map(|(i, item)| numeric(&extractor(item, i)))
            .fold(f64::NEG_INFINITY, nan_max)
    }

    /// Smallest element; positive infinity on an empty sequence.
    pub fn min(&self) -> f64 {
        self.iter().map(numeric).fold(f64::INFINITY, nan_min)
    }

    /// Smallest extracted value; positive infinity on an empty sequence.
    pub fn min_by(&self, extractor: impl Fn(&Value, usize) -> Value) -> f64 {
        self.iter()
            .enumerate()
            .map(|(i, item)| numeric(&extractor(item, i)))
            .fold(f64::INFINITY, nan_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seq(json: serde_json::Value) -> Sequence {
        Sequence::from_json(json)
    }

    #[test]
    fn sum_and_avg() {
        let s = seq(json!([1, 2, 3]));
        assert_eq!(s.sum(), 6.0);
        assert_eq!(s.avg(), 2.0);
    }

    #[test]
    fn extractors_see_fields() {
        let s = seq(json!([{"n": 2}, {"n": 5}]));
        let n = |v: &Value, _: usize| v.field("n").cloned().unwrap_or(Value::Null);
        assert_eq!(s.sum_by(n), 7.0);
        assert_eq!(s.avg_by(n), 3.5);
        assert_eq!(s.max_by(n), 5.0);
        assert_eq!(s.min_by(n), 2.0);
    }

    #[test]
    fn non_numeric_elements_poison_with_nan() {
        let s = seq(json!([1, "two", 3]));
        assert!(s.sum().is_nan());
        assert!(s.avg().is_nan());
        assert!(s.max().is_nan());
        assert!(s.min().is_nan());
    }

    #[test]
    fn empty_sequences_keep_numeric_identities() {
        let empty = Sequence::new();
        assert_eq!(empty.sum(), 0.0);
        assert!(empty.avg().is_nan());
        assert_eq!(empty.max(), f64::NEG_INFINITY);
        assert_eq!(empty.min(), f64::INFINITY);
    }

    #[test]
    fn count_where_matches_filter_length() {
        let s = seq(json!([1, 2, 3, 4, 5]));
        let odd = |v: &Value, _: usize| matches!(v, Value::Int(i) if i % 2 == 1);
        assert_eq!(s.count(), 5);
        assert_eq!(s.count_where(odd), s.filter(odd).len());
    }
}
