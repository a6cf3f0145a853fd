//! Field-map shorthands: a record of required values becomes a
//! predicate, a left/right field mapping becomes a join condition, and a
//! field name becomes a key selector.

use quarry_core::prelude::{equals, Record, Value};

/// Compiles a key/value record into a predicate matching elements whose
/// listed fields all equal the given values. An element missing any
/// listed field does not match.
pub fn matcher(spec: Record) -> impl Fn(&Value, usize) -> bool {
    move |element, _| {
        spec.iter().all(|(name, want)| match element.field(name) {
            Some(got) => equals(got, want),
            None => false,
        })
    }
}

/// Compiles a `(left_field, right_field)` mapping into an equi-join
/// condition. Fields absent on both sides count as equal, mirroring the
/// predicate the merge join sorts by.
pub fn joiner(map: Vec<(String, String)>) -> impl Fn(&Value, &Value) -> bool {
    move |a, b| {
        map.iter()
            .all(|(left, right)| match (a.field(left), b.field(right)) {
                (Some(x), Some(y)) => equals(x, y),
                (None, None) => true,
                _ => false,
            })
    }
}

/// Compiles a field name into a key selector; missing fields key as null.
pub fn key(field: &str) -> impl Fn(&Value, usize) -> Value {
    let field = field.to_string();
    move |element, _| element.field(&field).cloned().unwrap_or(Value::Null)
}
