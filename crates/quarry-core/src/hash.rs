//! Canonical value digests for keyed collections.
//!
//! The lookup and dictionary conversions bucket keys by digest and verify
//! candidates with `equals`, so the only requirement here is that values
//! which compare equal under [`crate::compare::equals`] hash identically:
//! numbers are hashed through their `f64` form and record fields in
//! name-sorted order.

use blake3::Hasher;

use crate::value::Value;

/// A 256-bit canonical value digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; 32]);

impl Digest {
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for b in &self.0 {
            use std::fmt::Write as _;
            let _ = write!(&mut s, "{:02x}", b);
        }
        s
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Digests a value canonically.
pub fn value_digest(v: &Value) -> Digest {
    let mut hasher = Hasher::new();
    hash_value(v, &mut hasher);
    Digest(hasher.finalize().into())
}

fn hash_value(v: &Value, hasher: &mut Hasher) {
    // Write a discriminant first so e.g. Str("") and List([]) differ.
    hasher.update(&[discriminant(v)]);

    match v {
        Value::Null => {}
        Value::Bool(b) => {
            hasher.update(&[*b as u8]);
        }
        // Int and Float share a discriminant and hash through f64 bits so
        // that Int(1) and Float(1.0) land in the same bucket. The f64
        // round-trip is lossy past 2^53; collisions there are resolved by
        // the equals check at the bucket.
        Value::Int(i) => {
            hasher.update(&(*i as f64).to_bits().to_le_bytes());
        }
        Value::Float(f) => {
            hasher.update(&f.to_bits().to_le_bytes());
        }
        Value::Str(s) => {
            hasher.update(s.as_bytes());
        }
        Value::List(items) => {
            hasher.update(&(items.len() as u64).to_le_bytes());
            for item in items {
                hash_value(item, hasher);
            }
        }
        Value::Record(r) => {
            // Field order is irrelevant to equality, so hash fields sorted
            // by name.
            let mut fields: Vec<_> = r.iter().collect();
            fields.sort_by(|(a, _), (b, _)| a.cmp(b));
            hasher.update(&(fields.len() as u64).to_le_bytes());
            for (name, value) in fields {
                hasher.update(&(name.len() as u64).to_le_bytes());
                hasher.update(name.as_bytes());
                hash_value(value, hasher);
            }
        }
    }
}

fn discriminant(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Str(_) => 3,
        Value::List(_) => 4,
        Value::Record(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_values_share_digests() {
        assert_eq!(
            value_digest(&Value::Int(4)),
            value_digest(&Value::Float(4.0))
        );

        let a = Value::from_json(json!({"x": 1, "y": [2, 3]}));
        let b = Value::from_json(json!({"y": [2.0, 3], "x": 1.0}));
        assert_eq!(value_digest(&a), value_digest(&b));
    }

    #[test]
    fn distinct_values_diverge() {
        assert_ne!(value_digest(&Value::Null), value_digest(&Value::Int(0)));
        assert_ne!(
            value_digest(&Value::Str("1".into())),
            value_digest(&Value::Int(1))
        );
        assert_ne!(
            value_digest(&Value::from_json(json!([1, 2]))),
            value_digest(&Value::from_json(json!([2, 1])))
        );
    }

    #[test]
    fn digest_renders_as_hex() {
        let hex = value_digest(&Value::Null).to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
