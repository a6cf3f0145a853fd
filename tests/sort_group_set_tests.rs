//! Behavioral tests for ordering, grouping, and set algebra.

use quarry::{comparer, from_json, key, value_cmp, Sequence, Value};
use serde_json::json;

fn ints(seq: &Sequence) -> Vec<i64> {
    seq.iter()
        .filter_map(|v| match v {
            Value::Int(i) => Some(*i),
            _ => None,
        })
        .collect()
}

#[test]
fn order_by_sorts_plain_values_ascending() {
    let seq = from_json(json!([3, 1, 2]));
    assert_eq!(ints(&seq.order_by(value_cmp)), vec![1, 2, 3]);
}

#[test]
fn the_sort_spec_dsl_drives_multi_key_sorts() {
    let people = from_json(json!([
        {"last": "curie", "first": "marie"},
        {"last": "curie", "first": "pierre"},
        {"last": "bohr", "first": "niels"},
    ]));

    let sorted = people.order_by_spec("last ASC, first DESC");
    assert_eq!(sorted[0].field("first"), Some(&Value::Str("niels".into())));
    assert_eq!(sorted[1].field("first"), Some(&Value::Str("pierre".into())));
    assert_eq!(sorted[2].field("first"), Some(&Value::Str("marie".into())));

    // Case-insensitive keywords, whitespace, and a trailing comma.
    let tolerant = people.order_by_spec("  last desc , ");
    assert_eq!(tolerant[0].field("last"), Some(&Value::Str("curie".into())));
}

#[test]
fn sorting_is_stable_for_equal_keys() {
    let seq = from_json(json!([
        {"k": 1, "pos": 0},
        {"k": 0, "pos": 1},
        {"k": 1, "pos": 2},
        {"k": 0, "pos": 3},
    ]));
    let sorted = seq.order_by_spec("k");
    let positions: Vec<_> = sorted
        .iter()
        .map(|v| v.field("pos").cloned().unwrap())
        .collect();
    assert_eq!(
        positions,
        vec![Value::Int(1), Value::Int(3), Value::Int(0), Value::Int(2)]
    );
}

#[test]
fn sorting_never_returns_the_receiver() {
    let one = from_json(json!([1]));
    let sorted = one.order_by(value_cmp);
    assert!(sorted.sequence_equals(&one));

    let empty = Sequence::new();
    assert!(empty.order_by_spec("anything").is_empty());
}

#[test]
fn reverse_and_shuffle_preserve_the_element_multiset() {
    let seq = from_json(json!([1, 2, 3, 4, 5]));
    assert_eq!(ints(&seq.reverse()), vec![5, 4, 3, 2, 1]);

    let shuffled = seq.shuffle();
    assert_eq!(shuffled.len(), 5);
    for item in seq.iter() {
        assert!(shuffled.contains(item));
    }

    assert!(seq
        .shuffle_seeded(42)
        .sequence_equals(seq.shuffle_seeded(42)));
}

#[test]
fn group_by_state_scenario() {
    let seq = from_json(json!([{"state": "MI"}, {"state": "MI"}, {"state": "GA"}]));
    let groups = seq.group_by(key("state"));

    assert_eq!(groups.count(), 2);
    assert_eq!(groups[0].field("key"), Some(&Value::Str("MI".into())));
    assert_eq!(
        groups[0].field("items").and_then(Value::as_list).map(|l| l.len()),
        Some(2)
    );
    assert_eq!(groups[1].field("key"), Some(&Value::Str("GA".into())));
}

#[test]
fn group_keys_keep_first_encounter_order() {
    let seq = from_json(json!([{"k": "z"}, {"k": "a"}, {"k": "z"}, {"k": "m"}]));
    let keys: Vec<_> = seq
        .group_by(key("k"))
        .iter()
        .map(|g| g.field("key").cloned().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec![
            Value::Str("z".into()),
            Value::Str("a".into()),
            Value::Str("m".into())
        ]
    );
}

#[test]
fn group_by_with_projects_members() {
    let seq = from_json(json!([
        {"state": "MI", "city": "Detroit"},
        {"state": "MI", "city": "Lansing"},
    ]));
    let groups = seq.group_by_with(key("state"), |v, _| {
        v.field("city").cloned().unwrap_or(Value::Null)
    });
    assert_eq!(
        groups[0].field("items"),
        Some(&Value::List(vec![
            Value::Str("Detroit".into()),
            Value::Str("Lansing".into())
        ]))
    );
}

#[test]
fn except_scenario() {
    let seq = from_json(json!([1, 2, 3]));
    assert_eq!(ints(&seq.except(from_json(json!([2, 3, 4])))), vec![1]);
}

#[test]
fn distinct_union_intersect() {
    let seq = from_json(json!([1, 2, 2, 3, 1]));
    assert_eq!(ints(&seq.distinct()), vec![1, 2, 3]);
    assert!(seq.distinct().distinct().sequence_equals(seq.distinct()));

    assert_eq!(ints(&seq.union(from_json(json!([3, 4])))), vec![1, 2, 3, 4]);
    assert_eq!(ints(&seq.intersect(from_json(json!([2, 3, 9])))), vec![2, 3]);
}

#[test]
fn set_operators_use_structural_equality_on_records() {
    let seq = from_json(json!([{"id": 1}, {"id": 1.0}, {"id": 2}]));
    assert_eq!(seq.distinct().len(), 2);

    let others = from_json(json!([{"id": 2.0}]));
    assert_eq!(seq.except(&others).len(), 1);
    assert_eq!(seq.intersect(&others).len(), 1);
}

#[test]
fn custom_comparers_replace_the_default() {
    let seq = from_json(json!(["Ada", "ada", "ALAN"]));
    let fold_case = comparer(|a: &Value, b: &Value| match (a, b) {
        (Value::Str(x), Value::Str(y)) => x.eq_ignore_ascii_case(y),
        _ => false,
    });
    assert_eq!(seq.distinct_by(&fold_case).len(), 2);
    assert_eq!(
        seq.except_by(from_json(json!(["ADA"])), &fold_case).len(),
        1
    );
}

#[test]
fn concat_and_zip() {
    let a = from_json(json!([1, 2]));
    let b = from_json(json!([2, 3]));
    assert_eq!(ints(&a.concat(&b)), vec![1, 2, 2, 3]);

    let names = from_json(json!([{"name": "ada"}, {"name": "alan"}]));
    let depts = from_json(json!([{"dept": 31}, {"dept": 33}, {"dept": 35}]));
    let zipped = names.zip(&depts);
    assert_eq!(zipped.len(), 2);
    assert_eq!(zipped[1].to_json(), json!({"name": "alan", "dept": 33}));
}
