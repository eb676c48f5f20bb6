//! Scalar codec: quoting decisions, escapes, and numeric canonicalization.
//!
//! Both directions of the codec meet here. The encoder asks [`needs_quotes`]
//! whether a string can be emitted bare and [`format_float`] for the canonical
//! numeric rendering; the decoder feeds every literal through [`decode_token`]
//! to recover its type. The two sides must agree exactly: a string is emitted
//! bare only when the decoder would read it back as the same string.

use crate::error::{Error, Result};
use crate::lexer;
use crate::options::Delimiter;
use crate::value::{Number, Value};

/// Emit a primitive value. Containers never reach this point through the
/// encoder; they fall back to `null` like any other non-representable value.
pub(crate) fn push_scalar(out: &mut String, value: &Value, delimiter: Delimiter) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => push_number(out, n),
        Value::String(s) => push_string(out, s, delimiter),
        Value::Array(_) | Value::Object(_) => out.push_str("null"),
    }
}

pub(crate) fn push_number(out: &mut String, number: &Number) {
    match number {
        Number::Integer(i) => out.push_str(&i.to_string()),
        Number::Float(f) => out.push_str(&format_float(*f)),
    }
}

/// Canonical float rendering.
///
/// Finite non-zero floats keep a float shape: the shortest round-trip decimal,
/// with a `.0` appended when the plain rendering has no fraction, and exponent
/// notation for magnitudes outside `[1e-4, 1e16)`. Zero-valued floats
/// (including `-0.0`) collapse to `0`; non-finite floats have no TOON literal
/// and render as `null`.
pub(crate) fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if (1e-4..1e16).contains(&magnitude) {
        let mut s = format!("{}", f);
        if !s.contains('.') {
            s.push_str(".0");
        }
        s
    } else {
        format!("{:e}", f)
    }
}

/// Emit a string value, quoting and escaping only when required.
pub(crate) fn push_string(out: &mut String, s: &str, delimiter: Delimiter) {
    if needs_quotes(s, delimiter) {
        push_quoted(out, s);
    } else {
        out.push_str(s);
    }
}

pub(crate) fn push_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Decide whether a string value must be quoted to survive a round trip.
///
/// The triggers: empty string, leading/trailing ASCII whitespace, the literals
/// `true`/`false`/`null`, numeric-looking text (including leading-zero forms),
/// structural characters (`"`, `\`, `:`), the active delimiter of the current
/// scope, any ASCII control, and a leading `-` (which would collide with the
/// expanded-list marker).
pub(crate) fn needs_quotes(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }
    let first = s.chars().next();
    let last = s.chars().next_back();
    if first.is_some_and(|c| c.is_ascii_whitespace()) || last.is_some_and(|c| c.is_ascii_whitespace())
    {
        return true;
    }
    if s == "true" || s == "false" || s == "null" {
        return true;
    }
    if looks_numeric(s) || is_leading_zero_numeric(s) {
        return true;
    }
    if s.starts_with('-') {
        return true;
    }
    let delim = delimiter.as_char();
    s.chars()
        .any(|c| c == '"' || c == '\\' || c == ':' || c == delim || (c as u32) < 0x20)
}

/// Emit an object or tabular-header key, quoting unless it matches the bare
/// key grammar `[A-Za-z_][A-Za-z0-9_.]*`.
pub(crate) fn push_key(out: &mut String, key: &str) {
    if is_bare_key(key) {
        out.push_str(key);
    } else {
        push_quoted(out, key);
    }
}

pub(crate) fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Matches `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?` — the token shapes
/// the decoder reads back as numbers.
pub(crate) fn looks_numeric(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if b.first() == Some(&b'-') {
        i += 1;
    }
    match b.get(i) {
        Some(b'0') => i += 1,
        Some(c) if c.is_ascii_digit() => {
            while i < b.len() && b[i].is_ascii_digit() {
                i += 1;
            }
        }
        _ => return false,
    }
    if b.get(i) == Some(&b'.') {
        i += 1;
        if !b.get(i).is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
    }
    if matches!(b.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        if !b.get(i).is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
    }
    i == b.len()
}

/// Matches `-?0[0-9]+`: integer-like text with a redundant leading zero, which
/// must also be quoted so the decoder does not reinterpret it.
pub(crate) fn is_leading_zero_numeric(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    digits.len() >= 2
        && digits.as_bytes()[0] == b'0'
        && digits.bytes().skip(1).all(|b| b.is_ascii_digit())
}

/// Decode a single scalar token (a value tail, inline cell, or list item).
///
/// `column` is the 1-based column of the token's first character; it anchors
/// escape and termination diagnostics.
pub(crate) fn decode_token(token: &str, line: usize, column: usize) -> Result<Value> {
    // Trim ASCII padding only; Unicode whitespace is string content.
    let is_pad = |c: char| c == ' ' || c == '\t';
    let trimmed = token.trim_matches(is_pad);
    let column = column + (token.len() - token.trim_start_matches(is_pad).len());

    if trimmed.starts_with('"') {
        return match lexer::scan_quoted(trimmed, 0) {
            Some(close) => {
                if trimmed[close + 1..].trim().is_empty() {
                    Ok(Value::String(unescape(&trimmed[1..close], line, column + 1)?))
                } else {
                    // Text after the closing quote: not a scalar the encoder
                    // ever produces; keep the raw token as a string.
                    Ok(Value::String(token.to_string()))
                }
            }
            None => Err(Error::UnterminatedString { line, column }),
        };
    }

    match trimmed {
        "" => return Ok(Value::String(String::new())),
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if looks_numeric(trimmed) {
        let float_shaped = trimmed.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'));
        if !float_shaped {
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(Value::Number(Number::Integer(i)));
            }
            // Integer literal beyond i64 range: fall back to float shape.
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Ok(Value::Number(Number::Float(f)));
        }
    }

    Ok(Value::String(trimmed.to_string()))
}

/// Expand the five recognized escapes inside a quoted span. Any other `\X`
/// is an [`Error::InvalidEscape`].
pub(crate) fn unescape(raw: &str, line: usize, column: usize) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut col = column;
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other) => {
                    return Err(Error::invalid_escape(
                        line,
                        col,
                        format!("unsupported escape sequence `\\{}`", other),
                    ));
                }
                None => {
                    return Err(Error::invalid_escape(line, col, "dangling backslash"));
                }
            }
            col += 2;
        } else {
            out.push(c);
            col += 1;
        }
    }
    Ok(out)
}
