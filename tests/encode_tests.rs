//! Exact-output encoding tests.

use serde_json::json;
use toon_codec::{to_string, to_string_with_options, toon, to_value, Delimiter, EncodeOptions, Error, Value};

fn encode(value: &Value) -> String {
    to_string(value).unwrap()
}

#[test]
fn flat_objects() {
    assert_eq!(encode(&toon!({ "name": "Alice" })), "name: Alice");
    assert_eq!(encode(&toon!({ "age": 30 })), "age: 30");
    assert_eq!(encode(&toon!({ "active": true })), "active: true");
    assert_eq!(encode(&toon!({ "price": 19.99 })), "price: 19.99");
    assert_eq!(encode(&toon!({ "value": null })), "value: null");
    assert_eq!(
        encode(&toon!({ "name": "Bob", "age": 25 })),
        "name: Bob\nage: 25"
    );
}

#[test]
fn nested_objects() {
    assert_eq!(
        encode(&toon!({ "user": { "name": "Alice" } })),
        "user:\n  name: Alice"
    );
    assert_eq!(
        encode(&toon!({ "user": { "name": "Bob", "id": 123 } })),
        "user:\n  name: Bob\n  id: 123"
    );
    assert_eq!(
        encode(&toon!({ "level1": { "level2": { "value": 42 } } })),
        "level1:\n  level2:\n    value: 42"
    );
}

#[test]
fn primitive_arrays() {
    assert_eq!(encode(&toon!([])), "[0]:");
    assert_eq!(encode(&toon!([1])), "[1]: 1");
    assert_eq!(encode(&toon!([1, 2, 3])), "[3]: 1,2,3");
    assert_eq!(
        encode(&toon!(["admin", "user", "guest"])),
        "[3]: admin,user,guest"
    );
    assert_eq!(encode(&toon!([true, false, true])), "[3]: true,false,true");
    assert_eq!(encode(&toon!([1, "text", true])), "[3]: 1,text,true");
}

#[test]
fn arrays_in_objects() {
    assert_eq!(
        encode(&toon!({ "tags": ["python", "rust"] })),
        "tags[2]: python,rust"
    );
    assert_eq!(
        encode(&toon!({ "numbers": [1, 2, 3, 4] })),
        "numbers[4]: 1,2,3,4"
    );
    assert_eq!(
        encode(&toon!({ "user": "Alice", "tags": ["a", "b"] })),
        "user: Alice\ntags[2]: a,b"
    );
}

#[test]
fn tabular_arrays() {
    assert_eq!(
        encode(&toon!([
            { "name": "Alice", "age": 25 },
            { "name": "Bob", "age": 30 }
        ])),
        "[2]{name,age}:\n  Alice,25\n  Bob,30"
    );
    assert_eq!(
        encode(&toon!([{ "name": "Alice", "role": "admin" }])),
        "[1]{name,role}:\n  Alice,admin"
    );
    assert_eq!(
        encode(&toon!([
            { "id": 1, "active": true },
            { "id": 2, "active": false },
            { "id": 3, "active": true }
        ])),
        "[3]{id,active}:\n  1,true\n  2,false\n  3,true"
    );
}

#[test]
fn tabular_header_keeps_first_insertion_order() {
    // Keys are not sorted; the first element fixes the header order.
    assert_eq!(
        encode(&toon!([{ "z": 1, "a": 2 }, { "z": 3, "a": 4 }])),
        "[2]{z,a}:\n  1,2\n  3,4"
    );
}

#[test]
fn object_with_tabular_array() {
    let value = toon!({
        "project": "TOON",
        "contributors": [
            { "name": "Alice", "commits": 50 },
            { "name": "Bob", "commits": 30 }
        ]
    });
    assert_eq!(
        encode(&value),
        "project: TOON\ncontributors[2]{name,commits}:\n  Alice,50\n  Bob,30"
    );
}

#[test]
fn nested_containers_share_one_geometry() {
    let value = toon!({
        "server": {
            "host": "localhost",
            "ports": [8080, 8443]
        }
    });
    assert_eq!(
        encode(&value),
        "server:\n  host: localhost\n  ports[2]: 8080,8443"
    );

    let value = toon!({
        "app": {
            "name": "MyApp",
            "config": { "debug": true, "timeout": 30 }
        }
    });
    assert_eq!(
        encode(&value),
        "app:\n  name: MyApp\n  config:\n    debug: true\n    timeout: 30"
    );
}

#[test]
fn expanded_arrays() {
    let value = toon!({ "mixed": [1, "text", { "nested": "obj" }] });
    assert_eq!(
        encode(&value),
        "mixed[3]:\n  - 1\n  - text\n  - nested: obj"
    );

    let value = toon!([
        { "name": "Alice", "tags": ["admin", "user"] },
        { "name": "Bob", "tags": ["user"] }
    ]);
    assert_eq!(
        encode(&value),
        "[2]:\n  - name: Alice\n    tags[2]: admin,user\n  - name: Bob\n    tags[1]: user"
    );
}

#[test]
fn root_primitives() {
    assert_eq!(encode(&Value::Null), "null");
    assert_eq!(encode(&toon!(true)), "true");
    assert_eq!(encode(&toon!(false)), "false");
    assert_eq!(encode(&toon!(0)), "0");
    assert_eq!(encode(&toon!(42)), "42");
    assert_eq!(encode(&toon!(-17)), "-17");
    assert_eq!(encode(&toon!(3.14)), "3.14");
    assert_eq!(encode(&toon!("hello")), "hello");
    // Inner spaces are fine bare; only leading/trailing whitespace quotes.
    assert_eq!(encode(&toon!("test string")), "test string");
}

#[test]
fn empty_object_encodes_to_empty_string() {
    assert_eq!(encode(&toon!({})), "");
}

#[test]
fn negative_numbers() {
    let value = to_value(&json!({ "balance": -100, "temperature": -5.5 })).unwrap();
    assert_eq!(encode(&value), "balance: -100\ntemperature: -5.5");
}

#[test]
fn negative_zero_normalizes() {
    let value = to_value(&json!({ "x": -0.0 })).unwrap();
    let text = encode(&value);
    assert_eq!(text, "x: 0");
    assert!(!text.contains("-0"));
}

#[test]
fn float_shapes_survive() {
    let value = to_value(&json!({ "a": 2.0, "b": 2 })).unwrap();
    assert_eq!(encode(&value), "a: 2.0\nb: 2");
    let value = to_value(&json!({ "big": 1e20, "tiny": 5e-7 })).unwrap();
    assert_eq!(encode(&value), "big: 1e20\ntiny: 5e-7");
}

#[test]
fn string_quoting() {
    assert_eq!(encode(&toon!({ "tags": ["a,b", "c"] })), "tags[2]: \"a,b\",c");
    assert_eq!(encode(&toon!({ "s": "true" })), "s: \"true\"");
    assert_eq!(encode(&toon!({ "s": "123" })), "s: \"123\"");
    assert_eq!(encode(&toon!({ "s": "07" })), "s: \"07\"");
    assert_eq!(encode(&toon!({ "s": "" })), "s: \"\"");
    assert_eq!(encode(&toon!({ "s": " padded " })), "s: \" padded \"");
    assert_eq!(encode(&toon!({ "s": "a:b" })), "s: \"a:b\"");
    assert_eq!(encode(&toon!({ "s": "-dash" })), "s: \"-dash\"");
    assert_eq!(encode(&toon!({ "s": "line1\nline2" })), "s: \"line1\\nline2\"");
    // A date-like string is not numeric and needs no quotes.
    assert_eq!(encode(&toon!({ "day": "2025-02-07" })), "day: 2025-02-07");
    // Datetimes contain a colon and are quoted.
    assert_eq!(
        encode(&toon!({ "when": "2025-02-07T14:30:45" })),
        "when: \"2025-02-07T14:30:45\""
    );
}

#[test]
fn key_quoting() {
    assert_eq!(encode(&toon!({ "user.name": 1 })), "user.name: 1");
    assert_eq!(encode(&toon!({ "_private": 1 })), "_private: 1");
    assert_eq!(encode(&toon!({ "2nd": 1 })), "\"2nd\": 1");
    assert_eq!(encode(&toon!({ "user-id": 1 })), "\"user-id\": 1");
    assert_eq!(encode(&toon!({ "a b": 1 })), "\"a b\": 1");
}

#[test]
fn pipe_delimiter() {
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    assert_eq!(
        to_string_with_options(&toon!({ "items": [1, 2, 3] }), options.clone()).unwrap(),
        "items[3|]: 1|2|3"
    );
    assert_eq!(
        to_string_with_options(
            &toon!({ "users": [{ "name": "Alice", "age": 30 }, { "name": "Bob", "age": 25 }] }),
            options.clone()
        )
        .unwrap(),
        "users[2|]{name|age}:\n  Alice|30\n  Bob|25"
    );
    // Only the active delimiter forces quotes.
    assert_eq!(
        to_string_with_options(&toon!({ "tags": ["a,b", "c|d"] }), options).unwrap(),
        "tags[2|]: a,b|\"c|d\""
    );
}

#[test]
fn tab_delimiter() {
    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    assert_eq!(
        to_string_with_options(&toon!({ "items": [1, 2, 3] }), options.clone()).unwrap(),
        "items[3\t]: 1\t2\t3"
    );
    assert_eq!(
        to_string_with_options(
            &toon!({ "users": [{ "name": "Alice", "age": 30 }] }),
            options
        )
        .unwrap(),
        "users[1\t]{name\tage}:\n  Alice\t30"
    );
}

#[test]
fn delimiter_propagates_to_nested_arrays() {
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    let value = toon!({
        "server": {
            "ports": [8080, 8443, 9000],
            "hosts": ["localhost", "127.0.0.1"]
        }
    });
    let text = to_string_with_options(&value, options).unwrap();
    assert!(text.contains("ports[3|]: 8080|8443|9000"));
    assert!(text.contains("hosts[2|]: localhost|127.0.0.1"));
}

#[test]
fn root_arrays_with_delimiters() {
    for (delimiter, expected) in [
        (Delimiter::Comma, "[3]: 1,2,3"),
        (Delimiter::Tab, "[3\t]: 1\t2\t3"),
        (Delimiter::Pipe, "[3|]: 1|2|3"),
    ] {
        let options = EncodeOptions::new().with_delimiter(delimiter);
        assert_eq!(
            to_string_with_options(&toon!([1, 2, 3]), options).unwrap(),
            expected
        );
    }
}

#[test]
fn indent_option() {
    let value = toon!({ "parent": { "child": "value" } });
    assert_eq!(
        to_string_with_options(&value, EncodeOptions::new().with_indent(4)).unwrap(),
        "parent:\n    child: value"
    );

    let value = toon!({ "level1": { "level2": { "level3": "value" } } });
    assert_eq!(
        to_string_with_options(&value, EncodeOptions::new().with_indent(3)).unwrap(),
        "level1:\n   level2:\n      level3: value"
    );

    let value = toon!({ "items": [{ "name": "Alice" }, { "name": "Bob" }] });
    assert_eq!(
        to_string_with_options(&value, EncodeOptions::new().with_indent(4)).unwrap(),
        "items[2]{name}:\n    Alice\n    Bob"
    );
}

#[test]
fn indent_below_two_is_rejected() {
    for indent in [0, 1] {
        let result = to_string_with_options(&toon!({ "k": "v" }), EncodeOptions::new().with_indent(indent));
        assert!(matches!(result, Err(Error::BadConfig { .. })), "indent {indent}");
    }
}

#[test]
fn indent_does_not_affect_primitives() {
    for value in [Value::Null, toon!(true), toon!(42), toon!("text")] {
        let default = to_string(&value).unwrap();
        let wide = to_string_with_options(&value, EncodeOptions::new().with_indent(4)).unwrap();
        assert_eq!(default, wide);
    }
}

#[test]
fn child_lines_sit_exactly_one_unit_deeper() {
    let value = toon!({ "outer": { "inner": "value" } });
    let text = encode(&value);
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[0], "outer:");
    assert!(lines[1].starts_with("  ") && !lines[1].starts_with("   "));
}
