//! Round-trip fidelity across the full option matrix.

use serde_json::json;
use toon_codec::{
    from_str, from_str_with_options, to_string, to_string_with_options, to_value, toon,
    DecodeOptions, Delimiter, EncodeOptions, Value,
};

fn assert_roundtrip(value: &Value) {
    let text = to_string(value).unwrap();
    let back: Value = from_str(&text).unwrap();
    assert_eq!(&back, value, "document was:\n{text}");
}

fn complex_fixture() -> Value {
    to_value(&json!({
        "project": "toon",
        "version": 1.3,
        "active": true,
        "nothing": null,
        "counts": [1, 2, 3],
        "features": ["compact", "readable", "efficient"],
        "metadata": { "author": "Johann", "year": 2025, "nested": { "deep": true } },
        "users": [
            { "id": 1, "name": "Alice", "score": 95.5 },
            { "id": 2, "name": "Bob", "score": 87.25 }
        ],
        "mixed": [1, "two", { "three": 3 }, [4, 5], {}],
        "empty_list": [],
        "empty_map": {},
        "weird strings": ["", " padded ", "true", "42", "a,b", "a:b", "-x", "line\nbreak", "07"]
    }))
    .unwrap()
}

#[test]
fn default_options() {
    assert_roundtrip(&complex_fixture());
}

#[test]
fn every_indent_and_delimiter() {
    let value = complex_fixture();
    for indent in [2, 3, 4, 8] {
        for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
            let options = EncodeOptions::new()
                .with_indent(indent)
                .with_delimiter(delimiter);
            let text = to_string_with_options(&value, options).unwrap();
            let back: Value = from_str(&text).unwrap();
            assert_eq!(back, value, "indent={indent} delimiter={delimiter:?}\n{text}");
        }
    }
}

#[test]
fn reencode_is_idempotent() {
    let value = complex_fixture();
    for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
        let options = EncodeOptions::new().with_delimiter(delimiter);
        let first = to_string_with_options(&value, options.clone()).unwrap();
        let decoded: Value = from_str(&first).unwrap();
        let second = to_string_with_options(&decoded, options).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn key_order_is_preserved() {
    let value = to_value(&json!({ "zulu": 1, "alpha": 2, "mike": { "yankee": 3, "bravo": 4 } }))
        .unwrap();
    let text = to_string(&value).unwrap();
    let back: Value = from_str(&text).unwrap();
    let keys: Vec<String> = back.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
    let inner: Vec<String> = back
        .as_object()
        .unwrap()
        .get("mike")
        .unwrap()
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(inner, vec!["yankee", "bravo"]);
}

#[test]
fn special_strings() {
    let strings = vec![
        "",
        "hello, world",
        "line1\nline2",
        "tab\there",
        "pipe|here",
        " leading space",
        "trailing space ",
        "true",
        "false",
        "null",
        "123",
        "3.5",
        "1e6",
        "07",
        "-",
        "- item",
        "\"quoted\"",
        "back\\slash",
        "a:b",
        "[3]",
        "[3]: 1,2,3",
        "{key}",
        "café ☕",
    ];
    let value = Value::Array(strings.iter().map(|s| Value::from(*s)).collect());
    assert_roundtrip(&value);

    for delimiter in [Delimiter::Tab, Delimiter::Pipe] {
        let options = EncodeOptions::new().with_delimiter(delimiter);
        let text = to_string_with_options(&value, options).unwrap();
        let back: Value = from_str(&text).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn numbers() {
    let value = to_value(&json!({
        "max": i64::MAX,
        "min": i64::MIN,
        "zero": 0,
        "float": 4.25,
        "neg": -5.75,
        "small": 1e-7,
        "large": 2.5e19
    }))
    .unwrap();
    assert_roundtrip(&value);
}

#[test]
fn unicode_keys_and_values() {
    let value = to_value(&json!({
        "Test®": [{ "name": "a", "age": 2 }],
        "поле": "значение",
        "data": ["a®", "b", "☃"]
    }))
    .unwrap();
    assert_roundtrip(&value);
}

#[test]
fn deeply_nested() {
    let value = to_value(&json!({
        "l1": { "l2": { "l3": { "l4": { "value": 42, "list": [[1], [[2]]] } } } }
    }))
    .unwrap();
    assert_roundtrip(&value);
}

#[test]
fn arrays_of_empty_objects() {
    assert_roundtrip(&toon!([{}]));
    assert_roundtrip(&toon!([{}, {}, {}]));
    assert_roundtrip(&toon!([{}, 1, {}]));
}

#[test]
fn expanded_items_with_containers() {
    let value = to_value(&json!([
        { "name": "Alice", "prefs": { "theme": "dark", "tabs": [1, 2] } },
        { "name": "Bob", "prefs": {} },
        [1, [2, 3]],
        "plain"
    ]))
    .unwrap();
    assert_roundtrip(&value);
    for indent in [3, 4] {
        let options = EncodeOptions::new().with_indent(indent);
        let text = to_string_with_options(&value, options).unwrap();
        let back: Value = from_str(&text).unwrap();
        assert_eq!(back, value, "indent={indent}\n{text}");
    }
}

#[test]
fn tabular_with_awkward_cells() {
    let value = to_value(&json!([
        { "id": 1, "note": "a,b", "flag": "true" },
        { "id": 2, "note": "c:d", "flag": "false" }
    ]))
    .unwrap();
    let text = to_string(&value).unwrap();
    assert!(text.starts_with("[2]{id,note,flag}:"));
    let back: Value = from_str(&text).unwrap();
    assert_eq!(back, value);
}

#[test]
fn seed_documents() {
    assert_eq!(
        to_string(&toon!({ "name": "Alice", "age": 30 })).unwrap(),
        "name: Alice\nage: 30"
    );
    assert_eq!(
        to_string(&toon!([
            { "id": 1, "name": "Alice" },
            { "id": 2, "name": "Bob" }
        ]))
        .unwrap(),
        "[2]{id,name}:\n  1,Alice\n  2,Bob"
    );
    assert_eq!(from_str::<Value>("").unwrap(), Value::Null);
    assert_eq!(to_string(&Value::Null).unwrap(), "null");
    assert_eq!(to_string(&toon!({})).unwrap(), "");
}

#[test]
fn lenient_mode_round_trips_canonical_documents_too() {
    let value = complex_fixture();
    let text = to_string(&value).unwrap();
    let back: Value = from_str_with_options(&text, DecodeOptions::lenient()).unwrap();
    assert_eq!(back, value);
}
