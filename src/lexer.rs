//! Lexer: physical lines, indent tracking, and within-line tokenization.
//!
//! The lexer views a document as `\n`-separated physical lines and records
//! each line's indent column and content span. Within a line it recognizes
//! the structural prefix — an optional array header `[N(d)?]{…}?`, an
//! optional key, and the separating colon — while treating quoted spans as
//! opaque. What a content line *means* (field, row, list item, bare scalar)
//! depends on the enclosing container, so the final classification lives in
//! the parser; the lexer only reports shape.

use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::scalar;

/// One physical line of the source document.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Line<'a> {
    /// 1-based line number.
    pub num: usize,
    /// Leading spaces.
    pub indent: usize,
    /// Text after the indent; empty for blank lines.
    pub content: &'a str,
}

impl Line<'_> {
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }
}

/// Split the document into lines, counting indents and rejecting tabs in the
/// leading whitespace. A trailing `\r` per line is tolerated (CRLF input).
pub(crate) fn split_lines(input: &str) -> Result<Vec<Line<'_>>> {
    let mut lines = Vec::new();
    for (i, raw) in input.split('\n').enumerate() {
        let num = i + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let mut indent = 0;
        for (j, c) in raw.char_indices() {
            match c {
                ' ' => indent = j + 1,
                '\t' => {
                    return Err(Error::TabInIndent {
                        line: num,
                        column: j + 1,
                    });
                }
                _ => break,
            }
        }
        // Blank means spaces only; other Unicode whitespace is content.
        let content = &raw[indent..];
        lines.push(Line {
            num,
            indent,
            content,
        });
    }
    Ok(lines)
}

/// Structural reading of one content line.
#[derive(Debug)]
pub(crate) enum LineShape<'a> {
    /// An array header, optionally attached to a key (`items[3]: 1,2,3`) or
    /// bare at the start of the line (`[3]: 1,2,3`).
    Header(HeaderLine<'a>),
    /// A `key: value` or `key:` field line.
    Field {
        key: String,
        tail: Option<&'a str>,
        tail_col: usize,
    },
    /// No unquoted colon and no header: a row, a primitive, or garbage.
    Bare,
}

/// Parsed pieces of an array header line.
#[derive(Debug)]
pub(crate) struct HeaderLine<'a> {
    pub key: Option<String>,
    pub count: usize,
    pub delim: Option<Delimiter>,
    /// Raw text between `{` and `}`, split later with the active delimiter.
    pub fields_raw: Option<&'a str>,
    pub fields_col: usize,
    pub tail: Option<&'a str>,
    pub tail_col: usize,
    /// Column of the opening `[`.
    pub header_col: usize,
}

/// Classify a content line. `col0` is the code-point offset of the content
/// within its physical line (the indent width, plus 2 for list-item bodies);
/// it anchors the columns reported in diagnostics.
pub(crate) fn classify<'a>(content: &'a str, line: usize, col0: usize) -> Result<LineShape<'a>> {
    if content.starts_with('"') {
        let close = match scan_quoted(content, 0) {
            Some(i) => i,
            None => {
                return Err(Error::UnterminatedString {
                    line,
                    column: col0 + 1,
                });
            }
        };
        let key_raw = &content[1..close];
        let after = &content[close + 1..];
        if after.starts_with('[') {
            if let Some(mut header) = parse_header(content, close + 1, col0) {
                header.key = Some(scalar::unescape(key_raw, line, col0 + 2)?);
                return Ok(LineShape::Header(header));
            }
            return Ok(LineShape::Bare);
        }
        if let Some(rest) = after.strip_prefix(':') {
            let key = scalar::unescape(key_raw, line, col0 + 2)?;
            let (tail, tail_col) = extract_tail(content, close + 2, rest, col0);
            return Ok(LineShape::Field {
                key,
                tail,
                tail_col,
            });
        }
        return Ok(LineShape::Bare);
    }

    for (i, c) in content.char_indices() {
        match c {
            '"' => return Ok(LineShape::Bare),
            ':' => {
                if i == 0 {
                    return Ok(LineShape::Bare);
                }
                let rest = &content[i + 1..];
                let (tail, tail_col) = extract_tail(content, i + 1, rest, col0);
                return Ok(LineShape::Field {
                    key: content[..i].to_string(),
                    tail,
                    tail_col,
                });
            }
            '[' => {
                if let Some(mut header) = parse_header(content, i, col0) {
                    if i > 0 {
                        header.key = Some(content[..i].to_string());
                    }
                    return Ok(LineShape::Header(header));
                }
                // Not a header; a later colon may still make this a field.
            }
            _ => {}
        }
    }
    Ok(LineShape::Bare)
}

/// Try to read `[count(delim)?]({fields})?:` starting at byte `at`. Returns
/// `None` when the text is not header-shaped (the caller falls back to other
/// readings).
fn parse_header<'a>(content: &'a str, at: usize, col0: usize) -> Option<HeaderLine<'a>> {
    let bytes = content.as_bytes();
    let mut i = at + 1;
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    let count: usize = content[digits_start..i].parse().ok()?;
    let delim = match bytes.get(i) {
        Some(b',') => {
            i += 1;
            Some(Delimiter::Comma)
        }
        Some(b'\t') => {
            i += 1;
            Some(Delimiter::Tab)
        }
        Some(b'|') => {
            i += 1;
            Some(Delimiter::Pipe)
        }
        _ => None,
    };
    if bytes.get(i) != Some(&b']') {
        return None;
    }
    i += 1;

    let mut fields_raw = None;
    let mut fields_col = 0;
    if bytes.get(i) == Some(&b'{') {
        let open = i;
        let mut k = open + 1;
        let close = loop {
            match bytes.get(k) {
                None => return None,
                Some(b'"') => k = scan_quoted(content, k)? + 1,
                Some(b'}') => break k,
                Some(_) => k += 1,
            }
        };
        fields_raw = Some(&content[open + 1..close]);
        fields_col = col_at(content, open + 1, col0);
        i = close + 1;
    }

    if bytes.get(i) != Some(&b':') {
        return None;
    }
    let rest = &content[i + 1..];
    let (tail, tail_col) = extract_tail(content, i + 1, rest, col0);
    Some(HeaderLine {
        key: None,
        count,
        delim,
        fields_raw,
        fields_col,
        tail,
        tail_col,
        header_col: col_at(content, at, col0),
    })
}

/// The value tail is everything after the colon minus exactly one leading
/// space; a whitespace-only tail counts as absent.
fn extract_tail<'a>(
    content: &'a str,
    rest_off: usize,
    rest: &'a str,
    col0: usize,
) -> (Option<&'a str>, usize) {
    let (tail, off) = match rest.strip_prefix(' ') {
        Some(stripped) => (stripped, rest_off + 1),
        None => (rest, rest_off),
    };
    if tail.chars().all(|c| c == ' ' || c == '\t') {
        (None, col_at(content, off, col0))
    } else {
        (Some(tail), col_at(content, off, col0))
    }
}

/// 1-based code-point column of byte offset `off` within the physical line.
fn col_at(content: &str, off: usize, col0: usize) -> usize {
    col0 + content[..off].chars().count() + 1
}

/// Byte index of the quote closing the one at byte `open`, honouring escapes.
pub(crate) fn scan_quoted(s: &str, open: usize) -> Option<usize> {
    let mut iter = s[open + 1..].char_indices();
    while let Some((i, c)) = iter.next() {
        match c {
            '\\' => {
                iter.next();
            }
            '"' => return Some(open + 1 + i),
            _ => {}
        }
    }
    None
}

/// Split `s` on `delim` outside quoted spans. Returns each raw token (quotes
/// intact) with the 1-based column of its first character; `col0` is the
/// column of `s` itself.
pub(crate) fn split_delimited<'a>(
    s: &'a str,
    delim: char,
    line: usize,
    col0: usize,
) -> Result<Vec<(&'a str, usize)>> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut start_col = col0;
    let mut col = col0;
    let mut iter = s.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        if c == '"' {
            let close = match scan_quoted(s, i) {
                Some(close) => close,
                None => return Err(Error::UnterminatedString { line, column: col }),
            };
            col += s[i..=close].chars().count();
            while let Some(&(j, _)) = iter.peek() {
                if j > close {
                    break;
                }
                iter.next();
            }
        } else if c == delim {
            tokens.push((&s[start..i], start_col));
            start = i + c.len_utf8();
            col += 1;
            start_col = col;
        } else {
            col += 1;
        }
    }
    tokens.push((&s[start..], start_col));
    Ok(tokens)
}
