//! Configuration options for TOON encoding and decoding.
//!
//! Encoding and decoding take separate option bundles because their knobs are
//! disjoint: the encoder controls layout ([`EncodeOptions`]: indent width and
//! field delimiter), the decoder controls validation ([`DecodeOptions`]:
//! strict versus lenient mode).
//!
//! ## Examples
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

/// Field delimiter used in inline arrays and tabular rows.
///
/// The delimiter in force for an array scope is its **active delimiter**: it
/// joins inline values and row cells, and any string containing it must be
/// quoted. Non-comma delimiters are recorded in the array header (`[3|]`,
/// `[3\t]`) so documents stay self-describing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the delimiter as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Options controlling TOON output layout.
///
/// `indent` is the number of spaces per nesting level and must be at least 2;
/// smaller values are rejected with [`crate::Error::BadConfig`] at encode
/// time. `delimiter` selects the active delimiter for every array in the
/// document.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{Delimiter, EncodeOptions};
///
/// let options = EncodeOptions::new()
///     .with_indent(4)
///     .with_delimiter(Delimiter::Tab);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    pub indent: usize,
    pub delimiter: Delimiter,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
        }
    }
}

impl EncodeOptions {
    /// Creates the default options (2-space indent, comma delimiter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level (minimum 2).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the active delimiter for arrays and tabular rows.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Options controlling TOON input validation.
///
/// In strict mode (the default) the decoder enforces declared element counts,
/// tabular row widths, indent geometry, and the no-blank-lines-inside-arrays
/// rule. Lenient mode tolerates those deviations: actual counts win over
/// declared ones, short rows are padded with null, non-multiple indents are
/// rounded to the nearest unit, and blank lines are ignored everywhere.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{from_str_with_options, DecodeOptions, Value};
///
/// let input = "[3]: 1,2";
/// assert!(from_str_with_options::<Value>(input, DecodeOptions::new()).is_err());
/// assert!(from_str_with_options::<Value>(input, DecodeOptions::lenient()).is_ok());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeOptions {
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions { strict: true }
    }
}

impl DecodeOptions {
    /// Creates the default options (strict mode).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates lenient options.
    #[must_use]
    pub fn lenient() -> Self {
        DecodeOptions { strict: false }
    }

    /// Sets strict mode on or off.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
