//! TOON decoding: line-oriented recursive descent.
//!
//! The parser walks the lexer's line list once, keeping the column at which
//! the current container's children live. Indentation drives everything: a
//! deeper line opens or continues a block, a shallower line closes one, and a
//! line matching no open block is an error. Strict-mode checks (declared
//! counts, row widths, blank lines in arrays, indent multiples) all funnel
//! through [`Parser::strict_violation`], so the set of downgradeable
//! diagnostics is stated in exactly one place.

use crate::error::{Error, Result};
use crate::lexer::{self, classify, HeaderLine, Line, LineShape};
use crate::map::Map;
use crate::options::{DecodeOptions, Delimiter};
use crate::scalar;
use crate::value::Value;

/// Decode a complete document into a value tree.
pub(crate) fn parse_document(input: &str, options: &DecodeOptions) -> Result<Value> {
    let lines = lexer::split_lines(input)?;
    let mut parser = Parser {
        lines,
        strict: options.strict,
        unit: None,
    };
    parser.run()
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    strict: bool,
    /// Indent unit inferred from the first indented line.
    unit: Option<usize>,
}

impl<'a> Parser<'a> {
    fn run(&mut self) -> Result<Value> {
        let Some(first) = self.next_content(0) else {
            return Ok(Value::Null);
        };
        let line = self.lines[first];
        if line.indent != 0 {
            return Err(Error::bad_indent(
                line.num,
                1,
                "the document root must start at column 1",
            ));
        }
        match classify(line.content, line.num, 0)? {
            LineShape::Header(header) if header.key.is_none() => {
                let mut idx = first;
                let value = self.parse_array(&mut idx, 0, header, Delimiter::Comma, None, line)?;
                if let Some(extra) = self.next_content(idx) {
                    let extra = self.lines[extra];
                    return Err(Error::bad_indent(
                        extra.num,
                        extra.indent + 1,
                        "content after the end of the root array",
                    ));
                }
                Ok(value)
            }
            LineShape::Bare => {
                if self.next_content(first + 1).is_some() {
                    return Err(Error::missing_colon(
                        line.num,
                        1,
                        "expected 'key: value' at the document root",
                    ));
                }
                scalar::decode_token(line.content, line.num, 1)
            }
            _ => {
                let mut idx = first;
                let mut map = Map::new();
                self.parse_object_into(&mut map, &mut idx, 0, Delimiter::Comma, None)?;
                Ok(Value::Object(map))
            }
        }
    }

    /// Index of the next non-blank line at or after `from`.
    fn next_content(&self, from: usize) -> Option<usize> {
        (from..self.lines.len()).find(|&i| !self.lines[i].is_blank())
    }

    fn unit(&self) -> usize {
        self.unit.unwrap_or(2)
    }

    /// The single funnel for downgradeable diagnostics: raise in strict mode,
    /// tolerate in lenient mode.
    fn strict_violation(&self, err: Error) -> Result<()> {
        if self.strict {
            Err(err)
        } else {
            Ok(())
        }
    }

    /// Validate a line's indent against the indent unit, inferring the unit
    /// from the first indented line. Lenient mode rounds stray columns to the
    /// nearest multiple (ties toward the shallower one).
    fn effective_indent(&mut self, line: &Line) -> Result<usize> {
        let ind = line.indent;
        if ind == 0 {
            return Ok(0);
        }
        match self.unit {
            None => {
                if ind >= 2 {
                    self.unit = Some(ind);
                    Ok(ind)
                } else {
                    self.strict_violation(Error::bad_indent(
                        line.num,
                        1,
                        format!("an indent of {ind} space(s) cannot establish the indent unit (minimum 2)"),
                    ))?;
                    self.unit = Some(2);
                    Ok(2)
                }
            }
            Some(unit) => {
                if ind % unit == 0 {
                    Ok(ind)
                } else {
                    self.strict_violation(Error::bad_indent(
                        line.num,
                        1,
                        format!("indentation of {ind} spaces is not a multiple of the indent unit {unit}"),
                    ))?;
                    let floor = ind / unit * unit;
                    Ok(if (ind - floor) * 2 > unit { floor + unit } else { floor })
                }
            }
        }
    }

    /// A blank line is inside an array when the next non-blank line still
    /// belongs to the array body, i.e. sits deeper than the array's header.
    fn check_blank(&self, idx: usize, array_ctx: Option<usize>) -> Result<()> {
        let Some(header_col) = array_ctx else {
            return Ok(());
        };
        if let Some(next) = self.next_content(idx + 1) {
            if self.lines[next].indent > header_col {
                self.strict_violation(Error::BlankInArray {
                    line: self.lines[idx].num,
                    column: 1,
                })?;
            }
        }
        Ok(())
    }

    /// Parse fields at column `col` into `map` until a shallower line closes
    /// the object. `array_ctx` is the header column of the outermost array
    /// currently open, used for the blank-line rule.
    fn parse_object_into(
        &mut self,
        map: &mut Map,
        idx: &mut usize,
        col: usize,
        active: Delimiter,
        array_ctx: Option<usize>,
    ) -> Result<()> {
        while *idx < self.lines.len() {
            let line = self.lines[*idx];
            if line.is_blank() {
                self.check_blank(*idx, array_ctx)?;
                *idx += 1;
                continue;
            }
            let ind = self.effective_indent(&line)?;
            if ind < col {
                break;
            }
            if ind > col {
                return Err(Error::bad_indent(
                    line.num,
                    line.indent + 1,
                    "no open block accepts this indentation",
                ));
            }
            let shape = classify(line.content, line.num, line.indent)?;
            self.parse_field_into(map, shape, idx, col, active, array_ctx, line)?;
        }
        Ok(())
    }

    /// Consume one field (and whatever block belongs to it) into `map`.
    /// `col` is the column the field logically lives at; for the first field
    /// of a list item this differs from the physical hyphen line.
    fn parse_field_into(
        &mut self,
        map: &mut Map,
        shape: LineShape<'a>,
        idx: &mut usize,
        col: usize,
        active: Delimiter,
        array_ctx: Option<usize>,
        line: Line<'a>,
    ) -> Result<()> {
        match shape {
            LineShape::Header(header) => {
                let Some(key) = header.key.clone() else {
                    return Err(Error::missing_colon(
                        line.num,
                        line.indent + 1,
                        "array header without a key inside an object",
                    ));
                };
                let value = self.parse_array(idx, col, header, active, array_ctx, line)?;
                map.insert(key, value);
            }
            LineShape::Field { key, tail, tail_col } => match tail {
                Some(tail) => {
                    let value = scalar::decode_token(tail, line.num, tail_col)?;
                    map.insert(key, value);
                    *idx += 1;
                }
                None => {
                    *idx += 1;
                    let value = self.parse_block_value(idx, col, active, array_ctx)?;
                    map.insert(key, value);
                }
            },
            LineShape::Bare => {
                return Err(Error::missing_colon(
                    line.num,
                    line.indent + 1,
                    "expected 'key: value' inside an object",
                ));
            }
        }
        Ok(())
    }

    /// The value of a `key:` line with no tail: a nested object when the next
    /// line opens a deeper block, otherwise an empty object.
    fn parse_block_value(
        &mut self,
        idx: &mut usize,
        col: usize,
        active: Delimiter,
        array_ctx: Option<usize>,
    ) -> Result<Value> {
        let Some(next) = self.next_content(*idx) else {
            return Ok(Value::Object(Map::new()));
        };
        let next_line = self.lines[next];
        let ind = self.effective_indent(&next_line)?;
        if ind <= col {
            return Ok(Value::Object(Map::new()));
        }
        let child_col = if self.strict { col + self.unit() } else { ind };
        let mut map = Map::new();
        self.parse_object_into(&mut map, idx, child_col, active, array_ctx)?;
        Ok(Value::Object(map))
    }

    /// Parse an array whose header line is at `*idx` with its header column
    /// at `col`. Consumes the header line and the whole body.
    fn parse_array(
        &mut self,
        idx: &mut usize,
        col: usize,
        header: HeaderLine<'a>,
        inherited: Delimiter,
        array_ctx: Option<usize>,
        hline: Line<'a>,
    ) -> Result<Value> {
        let active = header.delim.unwrap_or(inherited);
        let ctx = array_ctx.or(Some(col));
        *idx += 1;

        if let Some(fields_raw) = header.fields_raw {
            if header.tail.is_some() {
                return Err(Error::non_uniform(
                    hline.num,
                    header.tail_col,
                    "unexpected inline values after a tabular header",
                ));
            }
            let fields = parse_field_names(fields_raw, active, hline.num, header.fields_col)?;
            return self.parse_tabular_rows(idx, col, &header, &fields, active, ctx, hline);
        }

        if let Some(tail) = header.tail {
            let tokens = lexer::split_delimited(tail, active.as_char(), hline.num, header.tail_col)?;
            let mut values = Vec::with_capacity(tokens.len());
            for (token, token_col) in tokens {
                values.push(scalar::decode_token(token, hline.num, token_col)?);
            }
            if values.len() != header.count {
                self.strict_violation(Error::count_mismatch(
                    hline.num,
                    header.tail_col,
                    format!("declared {}, found {}", header.count, values.len()),
                ))?;
            }
            return Ok(Value::Array(values));
        }

        if header.count == 0 {
            return Ok(Value::Array(Vec::new()));
        }
        self.parse_expanded_items(idx, col, &header, active, ctx, hline)
    }

    fn parse_tabular_rows(
        &mut self,
        idx: &mut usize,
        col: usize,
        header: &HeaderLine<'a>,
        fields: &[String],
        active: Delimiter,
        ctx: Option<usize>,
        hline: Line<'a>,
    ) -> Result<Value> {
        let mut rows = Vec::new();
        let mut row_col: Option<usize> = None;
        while *idx < self.lines.len() {
            let line = self.lines[*idx];
            if line.is_blank() {
                self.check_blank(*idx, ctx)?;
                *idx += 1;
                continue;
            }
            let ind = self.effective_indent(&line)?;
            if ind <= col {
                break;
            }
            let expect = match row_col {
                Some(expect) => expect,
                None => {
                    let expect = if self.strict { col + self.unit() } else { ind };
                    row_col = Some(expect);
                    expect
                }
            };
            if ind != expect {
                return Err(Error::bad_indent(
                    line.num,
                    line.indent + 1,
                    "tabular rows must share one indent column",
                ));
            }
            if line.content == "-" || line.content.starts_with("- ") {
                return Err(Error::non_uniform(
                    line.num,
                    line.indent + 1,
                    "expected a table row, found a list item",
                ));
            }
            let tokens =
                lexer::split_delimited(line.content, active.as_char(), line.num, line.indent + 1)?;
            if tokens.len() != fields.len() {
                self.strict_violation(Error::width_mismatch(
                    line.num,
                    line.indent + 1,
                    format!("row has {} cells, header declares {}", tokens.len(), fields.len()),
                ))?;
            }
            let mut row = Map::new();
            for (i, field) in fields.iter().enumerate() {
                let value = match tokens.get(i) {
                    Some((token, token_col)) => scalar::decode_token(token, line.num, *token_col)?,
                    None => Value::Null,
                };
                row.insert(field.clone(), value);
            }
            rows.push(Value::Object(row));
            *idx += 1;
        }
        if rows.len() != header.count {
            self.strict_violation(Error::count_mismatch(
                hline.num,
                header.header_col,
                format!("declared {} rows, found {}", header.count, rows.len()),
            ))?;
        }
        Ok(Value::Array(rows))
    }

    fn parse_expanded_items(
        &mut self,
        idx: &mut usize,
        col: usize,
        header: &HeaderLine<'a>,
        active: Delimiter,
        ctx: Option<usize>,
        hline: Line<'a>,
    ) -> Result<Value> {
        let mut items = Vec::new();
        let mut item_col: Option<usize> = None;
        while *idx < self.lines.len() {
            let line = self.lines[*idx];
            if line.is_blank() {
                self.check_blank(*idx, ctx)?;
                *idx += 1;
                continue;
            }
            let ind = self.effective_indent(&line)?;
            if ind <= col {
                break;
            }
            let expect = match item_col {
                Some(expect) => expect,
                None => {
                    let expect = if self.strict { col + self.unit() } else { ind };
                    item_col = Some(expect);
                    expect
                }
            };
            if ind != expect {
                return Err(Error::bad_indent(
                    line.num,
                    line.indent + 1,
                    "list items must share one indent column",
                ));
            }
            if line.content == "-" {
                items.push(Value::Object(Map::new()));
                *idx += 1;
                continue;
            }
            let Some(item) = line.content.strip_prefix("- ") else {
                return match classify(line.content, line.num, line.indent)? {
                    LineShape::Bare => Err(Error::missing_colon(
                        line.num,
                        line.indent + 1,
                        "expected a '- ' list item",
                    )),
                    _ => Err(Error::bad_indent(
                        line.num,
                        line.indent + 1,
                        "expected a '- ' list item at this depth",
                    )),
                };
            };
            match classify(item, line.num, line.indent + 2)? {
                LineShape::Header(nested) if nested.key.is_none() => {
                    let value = self.parse_array(idx, expect, nested, active, ctx, line)?;
                    items.push(value);
                }
                shape @ (LineShape::Header(_) | LineShape::Field { .. }) => {
                    let value = self.parse_item_object(idx, expect, shape, active, ctx, line)?;
                    items.push(value);
                }
                LineShape::Bare => {
                    items.push(scalar::decode_token(item, line.num, line.indent + 3)?);
                    *idx += 1;
                }
            }
        }
        if items.len() != header.count {
            self.strict_violation(Error::count_mismatch(
                hline.num,
                header.header_col,
                format!("declared {} items, found {}", header.count, items.len()),
            ))?;
        }
        Ok(Value::Array(items))
    }

    /// An object introduced on a hyphen line: the first field is parsed from
    /// the item content, sibling fields continue one unit below the item.
    fn parse_item_object(
        &mut self,
        idx: &mut usize,
        item_col: usize,
        first: LineShape<'a>,
        active: Delimiter,
        ctx: Option<usize>,
        hline: Line<'a>,
    ) -> Result<Value> {
        let sibling_col = item_col + self.unit();
        let mut map = Map::new();
        self.parse_field_into(&mut map, first, idx, sibling_col, active, ctx, hline)?;
        self.parse_object_into(&mut map, idx, sibling_col, active, ctx)?;
        Ok(Value::Object(map))
    }
}

/// Split a `{…}` field block with the active delimiter and normalize each
/// name (quoted names are unescaped, bare names trimmed).
fn parse_field_names(
    fields_raw: &str,
    active: Delimiter,
    line: usize,
    col: usize,
) -> Result<Vec<String>> {
    let tokens = lexer::split_delimited(fields_raw, active.as_char(), line, col)?;
    let mut fields = Vec::with_capacity(tokens.len());
    for (token, token_col) in tokens {
        let trimmed = token.trim();
        if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
            fields.push(scalar::unescape(
                &trimmed[1..trimmed.len() - 1],
                line,
                token_col + 1,
            )?);
        } else {
            fields.push(trimmed.to_string());
        }
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    fn decode(input: &str) -> Value {
        parse_document(input, &DecodeOptions::default()).unwrap()
    }

    #[test]
    fn empty_document_is_null() {
        assert_eq!(decode(""), Value::Null);
        assert_eq!(decode("\n  \n"), Value::Null);
    }

    #[test]
    fn bare_primitives() {
        assert_eq!(decode("null"), Value::Null);
        assert_eq!(decode("42"), toon!(42));
        assert_eq!(decode("hello world"), toon!("hello world"));
        assert_eq!(decode("\"a:b\""), toon!("a:b"));
    }

    #[test]
    fn flat_and_nested_objects() {
        assert_eq!(
            decode("name: Alice\nage: 30"),
            toon!({ "name": "Alice", "age": 30 })
        );
        assert_eq!(
            decode("user:\n  name: Bob\n  id: 123"),
            toon!({ "user": { "name": "Bob", "id": 123 } })
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(decode("a:\nb: 1"), toon!({ "a": {}, "b": 1 }));
        assert_eq!(decode("a[0]:"), toon!({ "a": [] }));
        assert_eq!(decode("[0]:"), toon!([]));
    }

    #[test]
    fn inline_arrays() {
        assert_eq!(decode("[3]: 1,2,3"), toon!([1, 2, 3]));
        assert_eq!(decode("tags[2]: a,b"), toon!({ "tags": ["a", "b"] }));
    }

    #[test]
    fn tabular_arrays() {
        assert_eq!(
            decode("[2]{id,name}:\n  1,Alice\n  2,Bob"),
            toon!([{ "id": 1, "name": "Alice" }, { "id": 2, "name": "Bob" }])
        );
    }

    #[test]
    fn expanded_arrays() {
        assert_eq!(decode("[3]:\n  - 1\n  - two\n  - true"), toon!([1, "two", true]));
        assert_eq!(
            decode("[2]:\n  - name: Alice\n    role: admin\n  - name: Bob\n    role: user"),
            toon!([
                { "name": "Alice", "role": "admin" },
                { "name": "Bob", "role": "user" }
            ])
        );
        assert_eq!(decode("[1]:\n  -"), toon!([{}]));
        assert_eq!(decode("[2]:\n  - [2]: 1,2\n  - [1]: 3"), toon!([[1, 2], [3]]));
    }

    #[test]
    fn delimiter_scoping() {
        // The pipe header makes comma an ordinary character.
        assert_eq!(decode("items[2|]: a,b|c"), toon!({ "items": ["a,b", "c"] }));
        assert_eq!(
            decode("[2|]{name|age}:\n  Alice|30\n  Bob|25"),
            toon!([{ "name": "Alice", "age": 30 }, { "name": "Bob", "age": 25 }])
        );
    }

    #[test]
    fn missing_colon_diagnostics() {
        assert!(matches!(
            parse_document("hello\nworld", &DecodeOptions::default()),
            Err(Error::MissingColon { line: 1, .. })
        ));
        assert!(matches!(
            parse_document("users[2]:\n  incomplete", &DecodeOptions::default()),
            Err(Error::MissingColon { line: 2, .. })
        ));
    }

    #[test]
    fn stray_indentation_is_fatal_in_both_modes() {
        for options in [DecodeOptions::default(), DecodeOptions::lenient()] {
            assert!(matches!(
                parse_document("a: 1\n  b: 2", &options),
                Err(Error::BadIndent { line: 2, .. })
            ));
        }
    }

    #[test]
    fn content_after_root_array() {
        assert!(matches!(
            parse_document("[1]: 1\nx: 2", &DecodeOptions::default()),
            Err(Error::BadIndent { line: 2, .. })
        ));
    }

    #[test]
    fn duplicate_keys_keep_position_last_value_wins() {
        let value = decode("a: 1\nb: 2\na: 3");
        let obj = value.as_object().unwrap();
        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(obj.get("a"), Some(&toon!(3)));
    }
}
