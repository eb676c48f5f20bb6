//! TOON text format reference (v1.3) as implemented by this crate.
//!
//! TOON (Tabular Object-Oriented Notation) is a compact, human-legible
//! notation for the JSON data model. Structure comes from indentation rather
//! than braces, quotes appear only where they carry information, and arrays of
//! uniform objects collapse into a table with one header.
//!
//! # Documents
//!
//! A document is a UTF-8 string. The empty document means `null`. A single
//! non-empty line with no unquoted colon is a bare primitive. Otherwise the
//! root is an array when the first non-empty line starts with a `[N…]` header,
//! and an object of `key: value` lines when it does not.
//!
//! ```text
//! name: Alice
//! age: 30
//! address:
//!   city: Lisbon
//!   zip: "1000-001"
//! ```
//!
//! # Primitives
//!
//! | Type | Syntax | Notes |
//! |------|--------|-------|
//! | Null | `null` | |
//! | Boolean | `true` / `false` | |
//! | Integer | `42`, `-17` | shortest decimal form |
//! | Float | `3.14`, `2.0`, `1e20` | decimal point or exponent kept, so floats stay distinct from integers; any zero renders as `0` |
//! | String | `hello` or `"quoted"` | see quoting rules |
//!
//! # Strings and quoting
//!
//! Strings are bare by default and quoted only when the bare form would be
//! misread. The triggers:
//!
//! - empty string, or leading/trailing whitespace: `""`, `" padded "`
//! - the literals `true`, `false`, `null`
//! - numeric-looking text: `"42"`, `"1e-6"`, `"007"`
//! - `"` or `\` or `:` anywhere, or any ASCII control character
//! - the **active delimiter** of the enclosing scope (a comma under the
//!   default delimiter, a pipe under `|`, a tab under `\t` — only the active
//!   one counts)
//! - a leading `-`, which would collide with the list-item marker
//!
//! Inside quotes exactly five escapes exist: `\\`, `\"`, `\n`, `\r`, `\t`.
//! Anything else after a backslash is an error.
//!
//! Keys follow the same rules, except that the bare form is the identifier
//! grammar `[A-Za-z_][A-Za-z0-9_.]*`: `user.name: x` is fine bare,
//! `"user-id": x` needs quotes.
//!
//! # Arrays
//!
//! Every array header carries the element count. Three body forms exist, and
//! the encoder picks the first that fits:
//!
//! **Inline** — all elements primitive:
//!
//! ```text
//! tags[3]: admin,ops,dev
//! [4]: true,false,null,42
//! ```
//!
//! **Tabular** — all elements are objects with identical keys in identical
//! order and primitive values; the header lists the fields once:
//!
//! ```text
//! users[2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```
//!
//! **Expanded** — anything else; one `- ` item per line. An item may be a
//! primitive, a nested array, or an object whose first field shares the
//! hyphen line:
//!
//! ```text
//! mixed[3]:
//!   - 1
//!   - name: Alice
//!     role: admin
//!   - [2]: a,b
//! ```
//!
//! An empty array is `[0]:` with no body, and an empty object item is a lone
//! `-`.
//!
//! # Delimiters
//!
//! Inline values and table cells are joined by the active delimiter: comma
//! (default), tab, or pipe. Non-comma delimiters are recorded inside the
//! header brackets so the document explains itself:
//!
//! ```text
//! items[3|]: 1|2|3
//! users[2|]{name|age}:
//!   Alice|30
//!   Bob|25
//! ```
//!
//! A header's delimiter applies to its scope and is inherited by nested
//! arrays that do not declare their own.
//!
//! # Indentation
//!
//! Indentation is spaces only — a tab in the indent is an error. The first
//! indented line fixes the document's indent unit (the encoder option
//! `indent`, at least 2), and every deeper line must sit at a multiple of it.
//! Children of a container are exactly one unit deeper than their parent;
//! the fields of a list-item object continue two units below the array
//! header, aligned under the first field on the hyphen line.
//!
//! # Strict and lenient decoding
//!
//! Strict mode (default) additionally enforces:
//!
//! - declared counts: `[3]: 1,2` is an error
//! - row widths: a `{a,b}` table row with three cells is an error
//! - no blank lines inside an array body
//! - indent columns that are exact multiples of the unit
//!
//! Lenient mode keeps the actual element counts, pads short rows with
//! `null`, drops extra cells, rounds stray indents to the nearest unit, and
//! ignores blank lines everywhere.

// Documentation-only module.
