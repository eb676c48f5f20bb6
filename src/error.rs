//! Error types for TOON encoding and decoding.
//!
//! Every diagnostic the codec can produce is a variant of one flat [`Error`]
//! enumeration, shared by the lexer, parser, and encoder. Decode-side variants
//! carry the 1-based line number and the 1-based column (measured in code
//! points) where the problem was detected.
//!
//! A subset of the decode diagnostics is only raised in strict mode and is
//! silently tolerated in lenient mode: [`Error::BlankInArray`],
//! [`Error::CountMismatch`], [`Error::WidthMismatch`], and the
//! not-a-multiple form of [`Error::BadIndent`]. All other variants fire in
//! both modes.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{from_str, Error, Value};
//!
//! let result: Result<Value, Error> = from_str("[3]: 1,2");
//! assert!(matches!(result, Err(Error::CountMismatch { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// All diagnostics raised by the TOON encoder and decoder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Encoder options are unusable (indent below 2).
    #[error("invalid encoder configuration: {message}")]
    BadConfig { message: String },

    /// A tab character appeared in the leading indentation of a line.
    #[error("tab character in indentation at line {line}, column {column}")]
    TabInIndent { line: usize, column: usize },

    /// An indent column is not a multiple of the indent unit, or matches no
    /// open container frame.
    #[error("bad indentation at line {line}, column {column}: {message}")]
    BadIndent {
        line: usize,
        column: usize,
        message: String,
    },

    /// Blank line inside an array body (strict mode only).
    #[error("blank line inside array at line {line}")]
    BlankInArray { line: usize, column: usize },

    /// Declared element count does not match the actual count (strict mode only).
    #[error("element count mismatch at line {line}, column {column}: {message}")]
    CountMismatch {
        line: usize,
        column: usize,
        message: String,
    },

    /// A tabular row's cell count does not match the header width (strict mode only).
    #[error("row width mismatch at line {line}, column {column}: {message}")]
    WidthMismatch {
        line: usize,
        column: usize,
        message: String,
    },

    /// A quoted string contained `\X` with `X` outside `\ " n r t`.
    #[error("invalid escape at line {line}, column {column}: {message}")]
    InvalidEscape {
        line: usize,
        column: usize,
        message: String,
    },

    /// A quoted string was not closed before the end of its line.
    #[error("unterminated string at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },

    /// A line at container depth is neither a field, a row, nor a list item.
    #[error("missing ':' at line {line}, column {column}: {message}")]
    MissingColon {
        line: usize,
        column: usize,
        message: String,
    },

    /// A tabular body line cannot be interpreted as a row of the declared header.
    #[error("malformed tabular row at line {line}, column {column}: {message}")]
    NonUniformTabular {
        line: usize,
        column: usize,
        message: String,
    },

    /// Failure in a stream adapter (`to_writer` / `from_reader`).
    #[error("IO error: {0}")]
    Io(String),

    /// Free-form diagnostic, produced by the serde bridge.
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn bad_indent(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::BadIndent {
            line,
            column,
            message: message.into(),
        }
    }

    pub(crate) fn count_mismatch(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::CountMismatch {
            line,
            column,
            message: message.into(),
        }
    }

    pub(crate) fn width_mismatch(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::WidthMismatch {
            line,
            column,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_escape(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::InvalidEscape {
            line,
            column,
            message: message.into(),
        }
    }

    pub(crate) fn missing_colon(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::MissingColon {
            line,
            column,
            message: message.into(),
        }
    }

    pub(crate) fn non_uniform(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::NonUniformTabular {
            line,
            column,
            message: message.into(),
        }
    }

    /// The source location attached to this diagnostic, when it has one.
    ///
    /// Lines are 1-based; columns are 1-based and counted in code points.
    #[must_use]
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Error::TabInIndent { line, column }
            | Error::BadIndent { line, column, .. }
            | Error::BlankInArray { line, column }
            | Error::CountMismatch { line, column, .. }
            | Error::WidthMismatch { line, column, .. }
            | Error::InvalidEscape { line, column, .. }
            | Error::UnterminatedString { line, column }
            | Error::MissingColon { line, column, .. }
            | Error::NonUniformTabular { line, column, .. } => Some((*line, *column)),
            Error::BadConfig { .. } | Error::Io(_) | Error::Message(_) => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
