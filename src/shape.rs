//! Shape analysis: which of the three array forms applies.
//!
//! A pure function over an array value. The first matching rule wins: empty
//! arrays get the bare `[0]:` header, all-primitive arrays go inline, arrays
//! of uniform flat objects go tabular, everything else expands to `- ` items.

use crate::value::Value;

/// The presentation form chosen for an array.
#[derive(Debug, PartialEq)]
pub(crate) enum ArrayShape<'a> {
    Empty,
    Inline,
    /// Field header in the first element's insertion order.
    Tabular(Vec<&'a str>),
    Expanded,
}

pub(crate) fn classify(arr: &[Value]) -> ArrayShape<'_> {
    if arr.is_empty() {
        return ArrayShape::Empty;
    }
    if arr.iter().all(is_primitive) {
        return ArrayShape::Inline;
    }
    if let Some(fields) = tabular_fields(arr) {
        return ArrayShape::Tabular(fields);
    }
    ArrayShape::Expanded
}

pub(crate) fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

/// An array is tabular when every element is a non-empty object carrying the
/// same keys in the same first-insertion order as the first element, with
/// only primitive leaf values.
fn tabular_fields(arr: &[Value]) -> Option<Vec<&str>> {
    let first = arr[0].as_object()?;
    if first.is_empty() {
        return None;
    }
    let fields: Vec<&str> = first.keys().map(String::as_str).collect();
    for element in arr {
        let obj = element.as_object()?;
        if obj.len() != fields.len() {
            return None;
        }
        for ((key, value), field) in obj.iter().zip(&fields) {
            if key != field || !is_primitive(value) {
                return None;
            }
        }
    }
    Some(fields)
}
