//! TOON encoding: depth-first emission of a value tree.
//!
//! The encoder walks the tree once, asking the shape analyzer which form each
//! array takes and the scalar codec how to render each leaf. Output is built
//! as lines joined by a single `\n` with no trailing newline; children of a
//! container sit exactly one indent unit deeper than their parent.

use crate::error::{Error, Result};
use crate::map::Map;
use crate::options::{Delimiter, EncodeOptions};
use crate::scalar;
use crate::shape::{self, ArrayShape};
use crate::value::Value;

pub(crate) fn encode_document(value: &Value, options: &EncodeOptions) -> Result<String> {
    if options.indent < 2 {
        return Err(Error::BadConfig {
            message: format!("indent must be at least 2, got {}", options.indent),
        });
    }
    let mut encoder = Encoder {
        out: String::with_capacity(256),
        indent: options.indent,
        delimiter: options.delimiter,
    };
    encoder.document(value);
    Ok(encoder.out)
}

struct Encoder {
    out: String,
    indent: usize,
    delimiter: Delimiter,
}

impl Encoder {
    fn document(&mut self, value: &Value) {
        match value {
            Value::Object(map) => self.object_fields(map, 0),
            Value::Array(arr) => self.array(arr, 0),
            primitive => scalar::push_scalar(&mut self.out, primitive, self.delimiter),
        }
    }

    fn newline_indent(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth * self.indent {
            self.out.push(' ');
        }
    }

    fn object_fields(&mut self, map: &Map, depth: usize) {
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.newline_indent(depth);
            }
            self.field(key, value, depth);
        }
    }

    /// Emit one `key…` field whose line sits at `depth`. Array headers attach
    /// directly to the key; nested objects open a block one level deeper.
    fn field(&mut self, key: &str, value: &Value, depth: usize) {
        scalar::push_key(&mut self.out, key);
        match value {
            Value::Array(arr) => self.array(arr, depth),
            Value::Object(map) if map.is_empty() => self.out.push(':'),
            Value::Object(map) => {
                self.out.push(':');
                self.newline_indent(depth + 1);
                self.object_fields(map, depth + 1);
            }
            primitive => {
                self.out.push_str(": ");
                scalar::push_scalar(&mut self.out, primitive, self.delimiter);
            }
        }
    }

    /// Emit an array whose header line sits at `depth` (glued to whatever is
    /// already on the line: a key, a `- ` marker, or nothing at the root).
    fn array(&mut self, arr: &[Value], depth: usize) {
        match shape::classify(arr) {
            ArrayShape::Empty => self.out.push_str("[0]:"),
            ArrayShape::Inline => {
                self.header(arr.len(), None);
                self.out.push(' ');
                for (i, value) in arr.iter().enumerate() {
                    if i > 0 {
                        self.out.push(self.delimiter.as_char());
                    }
                    scalar::push_scalar(&mut self.out, value, self.delimiter);
                }
            }
            ArrayShape::Tabular(fields) => {
                self.header(arr.len(), Some(&fields));
                for row in arr {
                    self.newline_indent(depth + 1);
                    if let Value::Object(map) = row {
                        for (i, field) in fields.iter().enumerate() {
                            if i > 0 {
                                self.out.push(self.delimiter.as_char());
                            }
                            let cell = map.get(field).unwrap_or(&Value::Null);
                            scalar::push_scalar(&mut self.out, cell, self.delimiter);
                        }
                    }
                }
            }
            ArrayShape::Expanded => {
                self.header(arr.len(), None);
                self.items(arr, depth);
            }
        }
    }

    /// `[N]` / `[Nd]` plus an optional `{f1d f2…}` clause and the colon. The
    /// delim-char appears whenever the configured delimiter is not comma.
    fn header(&mut self, count: usize, fields: Option<&[&str]>) {
        self.out.push('[');
        self.out.push_str(&count.to_string());
        if self.delimiter != Delimiter::Comma {
            self.out.push(self.delimiter.as_char());
        }
        self.out.push(']');
        if let Some(fields) = fields {
            self.out.push('{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    self.out.push(self.delimiter.as_char());
                }
                scalar::push_key(&mut self.out, field);
            }
            self.out.push('}');
        }
        self.out.push(':');
    }

    /// Expanded-list items, one `- ` line per element at `depth + 1`.
    fn items(&mut self, arr: &[Value], depth: usize) {
        for item in arr {
            self.newline_indent(depth + 1);
            match item {
                Value::Object(map) if map.is_empty() => self.out.push('-'),
                Value::Object(map) => {
                    self.out.push_str("- ");
                    self.item_object(map, depth);
                }
                Value::Array(arr) => {
                    self.out.push_str("- ");
                    self.array(arr, depth + 1);
                }
                primitive => {
                    self.out.push_str("- ");
                    scalar::push_scalar(&mut self.out, primitive, self.delimiter);
                }
            }
        }
    }

    /// An object item: first field on the hyphen line, remaining fields two
    /// levels below the array header so they read as the item's block.
    fn item_object(&mut self, map: &Map, depth: usize) {
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.newline_indent(depth + 2);
            }
            self.field(key, value, depth + 2);
        }
    }
}
