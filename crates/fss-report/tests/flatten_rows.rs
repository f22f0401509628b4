//! Properties of the dotted-path flattening.

use fss_report::flatten::{flatten, format_scalar, lookup};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

fn object_of(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z]{1,6}", inner, 1..4)
        .prop_map(|map| Value::Object(map.into_iter().collect::<Map<_, _>>()))
}

/// Objects up to three levels deep, no arrays, no empty objects.
fn result_object() -> impl Strategy<Value = Value> {
    object_of(leaf().prop_recursive(2, 24, 3, |inner| object_of(inner)))
}

fn leaf_count(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(leaf_count).sum(),
        _ => 1,
    }
}

proptest! {
    #[test]
    fn every_leaf_becomes_one_resolvable_column(value in result_object()) {
        let row = flatten(&value);
        prop_assert_eq!(row.len(), leaf_count(&value));
        for (path, text) in row.iter() {
            let source = lookup(&value, path);
            prop_assert!(source.is_some(), "{} does not resolve", path);
            prop_assert_eq!(format_scalar(source.unwrap()), text);
        }
    }

    #[test]
    fn flattening_twice_gives_identical_rows(value in result_object()) {
        let first = flatten(&value);
        let second = flatten(&value);
        prop_assert_eq!(first.keys().collect::<Vec<_>>(), second.keys().collect::<Vec<_>>());
        prop_assert_eq!(first.values().collect::<Vec<_>>(), second.values().collect::<Vec<_>>());
    }
}

#[test]
fn car_response_flattens_in_source_order() {
    let value: Value = serde_json::from_str(
        r#"{
            "quantidade_entradas": 120,
            "quantidade_processadas": {"injetora": 120, "acabamento": 118},
            "tempo_util_ocioso": {"injetora": {"util": 5290.4, "ocioso": 9.6}},
            "tempo_medio_ciclo": 61.987
        }"#,
    )
    .unwrap();
    let row = flatten(&value);
    assert_eq!(
        row.keys().collect::<Vec<_>>(),
        [
            "quantidade_entradas",
            "quantidade_processadas.injetora",
            "quantidade_processadas.acabamento",
            "tempo_util_ocioso.injetora.util",
            "tempo_util_ocioso.injetora.ocioso",
            "tempo_medio_ciclo",
        ]
    );
    assert_eq!(row.get("tempo_medio_ciclo"), Some("61.99"));
    assert_eq!(row.get("tempo_util_ocioso.injetora.ocioso"), Some("9.60"));
}
