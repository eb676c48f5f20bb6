//! # toon-codec
//!
//! Encoder and decoder for **TOON** (Tabular Object-Oriented Notation) v1.3,
//! a compact, human-legible text notation for the JSON data model.
//!
//! ## What is TOON?
//!
//! TOON drops the braces, brackets, and most of the quotes of JSON in favour
//! of indentation, and collapses arrays of uniform objects into a table with
//! a single header. The JSON document
//!
//! ```json
//! {"users":[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}]}
//! ```
//!
//! becomes
//!
//! ```text
//! users[2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```
//!
//! Every array header carries its element count, so documents are
//! self-checking: in strict mode (the default) the decoder verifies counts,
//! table widths, and indentation geometry. See the [`format`] module for the
//! full format reference.
//!
//! ## Quick start
//!
//! ```rust
//! use toon_codec::{from_str, to_string, toon, Value};
//!
//! let value = toon!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["admin", "ops"]
//! });
//!
//! let text = to_string(&value).unwrap();
//! assert_eq!(text, "name: Alice\nage: 30\ntags[2]: admin,ops");
//!
//! let back: Value = from_str(&text).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ## serde integration
//!
//! The entry points are generic over serde traits, so derived types work
//! directly; [`Value`] itself implements `Serialize` and `Deserialize` for
//! the dynamic case.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let user = User { id: 7, name: "Ada".to_string() };
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 7\nname: Ada");
//! assert_eq!(from_str::<User>(&text).unwrap(), user);
//! ```
//!
//! ## Options
//!
//! Encoding takes [`EncodeOptions`] (indent width ≥ 2, field delimiter);
//! decoding takes [`DecodeOptions`] (strict or lenient validation):
//!
//! ```rust
//! use toon_codec::{to_string_with_options, toon, Delimiter, EncodeOptions};
//!
//! let value = toon!({ "items": [1, 2, 3] });
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! assert_eq!(
//!     to_string_with_options(&value, options).unwrap(),
//!     "items[3|]: 1|2|3"
//! );
//! ```
//!
//! ## Guarantees
//!
//! - **Round-trip fidelity**: `from_str(&to_string(&v)?)? == v` for every
//!   value tree, under every supported indent and delimiter.
//! - **Key order**: objects encode and decode in first-insertion order.
//! - **Number shapes**: integers and floats stay distinct (`2` vs `2.0`);
//!   `-0.0` normalizes to `0`.
//! - **Purity**: both directions are synchronous, allocation-only, and keep
//!   no state between calls.

mod de;
mod encoder;
pub mod error;
pub mod format;
mod lexer;
mod macros;
pub mod map;
pub mod options;
mod parser;
mod scalar;
mod ser;
mod shape;
pub mod value;

pub use error::{Error, Result};
pub use map::Map;
pub use options::{DecodeOptions, Delimiter, EncodeOptions};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Encode any `T: Serialize` as a TOON string with default options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{to_string, toon};
///
/// let value = toon!({ "x": 1, "y": 2 });
/// assert_eq!(to_string(&value).unwrap(), "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be folded into a TOON value tree.
#[must_use = "this returns the encoded string, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Encode any `T: Serialize` as a TOON string with custom options.
///
/// # Errors
///
/// Returns [`Error::BadConfig`] when `options.indent < 2`, or an error if the
/// value cannot be folded into a TOON value tree.
#[must_use = "this returns the encoded string, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    encoder::encode_document(&value, &options)
}

/// Encode any `T: Serialize` into a writer.
///
/// Writes exactly the bytes [`to_string`] would return; no trailing newline.
///
/// # Errors
///
/// Returns an error if encoding fails or the writer reports a failure.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Encode any `T: Serialize` into a writer with custom options.
///
/// # Errors
///
/// Returns an error if encoding fails or the writer reports a failure.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::Io(e.to_string()))
}

/// Decode an instance of `T` from a TOON string, in strict mode.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{from_str, Value};
///
/// let value: Value = from_str("scores[3]: 95,87,92").unwrap();
/// let scores = value.as_object().unwrap().get("scores").unwrap();
/// assert_eq!(scores.as_array().unwrap().len(), 3);
/// ```
///
/// # Errors
///
/// Returns an error when the input is not valid TOON or does not fit `T`.
/// Decode errors carry a 1-based line and column.
#[must_use = "this returns the decoded value, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, DecodeOptions::default())
}

/// Decode an instance of `T` from a TOON string with custom options.
///
/// ```rust
/// use toon_codec::{from_str_with_options, DecodeOptions, Value};
///
/// let lenient = DecodeOptions::lenient();
/// let value: Value = from_str_with_options("[3]: 1,2", lenient).unwrap();
/// assert_eq!(value.as_array().unwrap().len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error when the input is not valid TOON or does not fit `T`.
#[must_use = "this returns the decoded value, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = parser::parse_document(s, &options)?;
    from_value(value)
}

/// Decode an instance of `T` from a reader, consuming it to EOF first.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid UTF-8 TOON, or
/// the data does not fit `T`.
#[must_use = "this returns the decoded value, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_reader_with_options(reader, DecodeOptions::default())
}

/// Decode an instance of `T` from a reader with custom options.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid UTF-8 TOON, or
/// the data does not fit `T`.
#[must_use = "this returns the decoded value, errors must be handled"]
pub fn from_reader_with_options<R, T>(mut reader: R, options: DecodeOptions) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::Io(e.to_string()))?;
    from_str_with_options(&text, options)
}

/// Fold any `T: Serialize` into a [`Value`] tree.
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_value;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error for values serde cannot represent (e.g. non-string map
/// keys).
#[must_use = "this returns the converted value, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ser::ValueSerializer)
}

/// Build an instance of `T` from a [`Value`] tree.
///
/// ```rust
/// use toon_codec::{from_value, toon};
///
/// let pair: (i32, i32) = from_value(toon!([1, 2])).unwrap();
/// assert_eq!(pair, (1, 2));
/// ```
///
/// # Errors
///
/// Returns an error when the tree does not fit `T`.
#[must_use = "this returns the converted value, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(de::ValueDeserializer::new(value))
}
