//! Error types for SNBT parsing, value conversion and the binary codec.
//!
//! Text parsing fails with a [`ParseError`], which always knows where it
//! failed. Binary decoding and encoding fail with [`Error`], which also wraps
//! the other two so callers can use a single [`Result`].
//!
//! # Example
//!
//! ```
//! use na_snbt::{Config, ParseErrorKind, parse_text};
//!
//! let err = parse_text("{a:1", &Config::default()).unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::MissingClosingCharacter);
//! assert_eq!(err.offset, 4);
//! ```

use std::{borrow::Cow, io};

use crate::{Kind, Version};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A value of one kind could not be represented as another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cannot convert {from} to {to}")]
pub struct ConversionError {
    pub from: Kind,
    pub to: Kind,
}

impl ConversionError {
    #[inline]
    pub const fn new(from: Kind, to: Kind) -> Self {
        Self { from, to }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Nothing but whitespace where a value was expected.
    EmptyValue,
    /// A value was not followed by the expected terminator or comma.
    MissingTerminator,
    /// The text ended inside a quoted string, object or list.
    MissingClosingCharacter,
    InvalidEscape,
    InvalidCharacter,
    /// An integer literal does not fit in its kind.
    NumericOverflow,
    Conversion(ConversionError),
    /// Non-whitespace text follows the root value.
    TrailingData,
    /// Objects and lists nest deeper than the configured limit.
    TooDeep,
}

/// Maximum number of characters of context shown before the failure point.
const EXCERPT_LEN: usize = 35;

/// A text parse failure with the character offset at which it happened.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message} at position {offset}: {excerpt}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Character offset into the parsed text.
    pub offset: usize,
    /// Up to 35 characters before the failure followed by `<--[HERE]`.
    pub excerpt: String,
    pub message: Cow<'static, str>,
}

impl ParseError {
    /// Builds an error at byte position `pos` of `buffer`.
    pub(crate) fn new(
        buffer: &str,
        pos: usize,
        kind: ParseErrorKind,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let pos = floor_char_boundary(buffer, pos.min(buffer.len()));
        let before = &buffer[..pos];
        let offset = before.chars().count();
        let skip = offset.saturating_sub(EXCERPT_LEN);
        let mut excerpt = String::with_capacity(EXCERPT_LEN + 12);
        if skip > 0 {
            excerpt.push_str("...");
        }
        excerpt.extend(before.chars().skip(skip));
        excerpt.push_str("<--[HERE]");
        Self {
            kind,
            offset,
            excerpt,
            message: message.into(),
        }
    }
}

fn floor_char_boundary(s: &str, mut pos: usize) -> usize {
    while !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// This type represents all possible errors of the binary codec, plus the
/// text and conversion errors it can carry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred while reading or writing.
    #[error("{0}")]
    IO(io::Error),

    /// The input ended unexpectedly.
    #[error("unexpected end of input")]
    EndOfFile,

    /// Extra bytes remain after the root tag.
    #[error("trailing data after end of input: {0} bytes remaining")]
    TrailingData(usize),

    /// A type byte outside the tags known to the configured version.
    #[error("unknown NBT tag type: {0:#04x}")]
    UnknownType(u8),

    /// A root tag was required to be a compound.
    #[error("root tag is not a compound: {0:#04x}")]
    NotCompound(u8),

    /// A negative length prefix.
    #[error("invalid length prefix: {0}")]
    InvalidLength(i32),

    #[error("string too long: {0} bytes")]
    StringTooLong(usize),

    #[error("list length too long: {0}")]
    ListTooLong(usize),

    /// The value has no encoding under the configured version.
    #[error("{kind} cannot be encoded under version {version}")]
    UnsupportedType { kind: Kind, version: Version },

    #[error("nesting exceeds the depth limit of {0}")]
    TooDeep(usize),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            Error::EndOfFile
        } else {
            Error::IO(error)
        }
    }
}
