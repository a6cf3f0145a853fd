//! Projection field-list grammar: a comma-separated list of
//! `<field> [[as] <alias>]` tokens.

use std::sync::LazyLock;

use regex::Regex;

use quarry_core::prelude::{Record, Value};

static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\w+)\b(?:\s+(?:as\s+)?(\w+))?\s*(?:,|$)").expect("field list regex")
});

/// One parsed `field [as alias]` entry. The alias defaults to the field
/// name itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    pub field: String,
    pub alias: String,
}

/// Parses a projection field list. The `as` keyword is optional: both
/// `"firstName as name"` and `"firstName name"` alias the field.
pub fn parse_field_list(spec: &str) -> Vec<FieldMap> {
    FIELD_RE
        .captures_iter(spec)
        .map(|cap| FieldMap {
            field: cap[1].to_string(),
            alias: cap
                .get(2)
                .map(|alias| alias.as_str().to_string())
                .unwrap_or_else(|| cap[1].to_string()),
        })
        .collect()
}

/// Compiles a field list into a projector building a new record per
/// element. Fields missing on the source element are left out of the
/// projected record.
pub fn field_projector(maps: Vec<FieldMap>) -> impl Fn(&Value, usize) -> Value {
    move |element, _| {
        let mut out = Record::new();
        for map in &maps {
            if let Some(value) = element.field(&map.field) {
                out.insert(map.alias.clone(), value.clone());
            }
        }

        Value::Record(out)
    }
}
