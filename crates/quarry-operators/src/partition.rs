//! Partitioning: take/skip and their predicate-bounded forms.

use quarry_core::prelude::Value;

use crate::sequence::Sequence;

impl Sequence {
    /// The first `count` elements; the whole sequence when shorter.
    pub fn take(&self, count: usize) -> Sequence {
        Sequence::from(&self.items()[..count.min(self.len())])
    }

    /// Everything after the first `count` elements; empty when shorter.
    pub fn skip(&self, count: usize) -> Sequence {
        Sequence::from(&self.items()[count.min(self.len())..])
    }

    /// Leading elements while the predicate holds.
    pub fn take_while(&self, predicate: impl Fn(&Value, usize) -> bool) -> Sequence {
        self.take(self.matching_prefix(predicate))
    }

    /// Everything after the leading run the predicate accepts.
    pub fn skip_while(&self, predicate: impl Fn(&Value, usize) -> bool) -> Sequence {
        self.skip(self.matching_prefix(predicate))
    }

    fn matching_prefix(&self, predicate: impl Fn(&Value, usize) -> bool) -> usize {
        self.iter()
            .enumerate()
            .take_while(|(i, item)| predicate(item, *i))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seq(json: serde_json::Value) -> Sequence {
        Sequence::from_json(json)
    }

    fn ints(seq: &Sequence) -> Vec<i64> {
        seq.iter()
            .filter_map(|v| match v {
                Value::Int(i) => Some(*i),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn take_and_skip_split_the_sequence() {
        let s = seq(json!([1, 2, 3, 4, 5]));
        assert_eq!(ints(&s.take(2)), vec![1, 2]);
        assert_eq!(ints(&s.skip(2)), vec![3, 4, 5]);
        assert!(s.take(2).concat(s.skip(2)).sequence_equals(&s));
    }

    #[test]
    fn counts_clamp_at_the_ends() {
        let s = seq(json!([1, 2]));
        assert_eq!(s.take(10).len(), 2);
        assert!(s.skip(10).is_empty());
        assert!(s.take(0).is_empty());
        assert_eq!(s.skip(0).len(), 2);
    }

    #[test]
    fn while_variants_stop_at_the_first_failure() {
        let s = seq(json!([1, 2, 9, 1]));
        let small = |v: &Value, _: usize| matches!(v, Value::Int(i) if *i < 5);
        assert_eq!(ints(&s.take_while(small)), vec![1, 2]);
        assert_eq!(ints(&s.skip_while(small)), vec![9, 1]);
        assert!(s.take_while(|_, _| true).sequence_equals(&s));
        assert!(s.skip_while(|_, _| true).is_empty());
    }
}
