//! The SNBT text grammar.
//!
//! [`Parser`] is a hand-written recursive-descent parser over a
//! [`Cursor`]. It has no tokenizer: at each value it tries, in order, a
//! boolean literal, an object, a list or array and a number, and falls back
//! to a string. Trying a boolean or a number is provisional and rewinds on
//! failure; once an object or list has been opened, every error is final.
//!
//! All grammar decisions are taken from the [`Version`](crate::Version) in the
//! parser's [`Config`]. Revisions before 1.12 use the legacy scanner instead.
//!
//! ```
//! use na_snbt::{Config, Version, parse_text};
//!
//! let value = parse_text("{name:'Steve',pos:[I;1,64,-3]}", &Config::default()).unwrap();
//! let root = value.as_compound().unwrap();
//! assert_eq!(root["name"].as_str(), Some("Steve"));
//! assert_eq!(root["pos"].as_int_array().unwrap().as_slice(), &[1, 64, -3]);
//!
//! let legacy = parse_text("[0:1,1:2]", &Config::new(Version::V1_8)).unwrap();
//! assert_eq!(legacy.as_list().unwrap().len(), 2);
//! ```

mod collection;
mod legacy;
pub(crate) mod number;
pub(crate) mod string;
mod write;

pub use write::*;

use std::borrow::Cow;

use crate::{
    Boolean, Compound, Config, Cursor, Kind, NbtString, ParseError, ParseErrorKind, Sequence, Value,
    util::Depth,
};

/// What may follow a value.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Terminator {
    pub(crate) close: Option<char>,
    pub(crate) comma: bool,
}

impl Terminator {
    pub(crate) const ROOT: Terminator = Terminator {
        close: None,
        comma: false,
    };

    #[inline]
    pub(crate) const fn element(close: char) -> Self {
        Terminator {
            close: Some(close),
            comma: true,
        }
    }
}

/// Version-aware SNBT parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct Parser {
    config: Config,
}

impl Parser {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the whole of `text` as one value. Anything but whitespace after
    /// the value is [`TrailingData`](ParseErrorKind::TrailingData).
    pub fn parse(&self, text: &str) -> Result<Value, ParseError> {
        tracing::trace!("parsing {} bytes of SNBT under {}.", text.len(), self.config.version);
        let seq = Sequence::new(text);
        if self.config.version.is_wild_west() {
            return legacy::parse(seq, &self.config);
        }
        let mut cursor = seq.cursor();
        let value = self.value(
            &mut cursor,
            Terminator::ROOT,
            Kind::Int,
            Depth::new(self.config.max_depth),
        )?;
        cursor.skip_whitespace();
        if !cursor.is_at_end() {
            return Err(cursor.error(
                ParseErrorKind::TrailingData,
                "unexpected text after the value",
            ));
        }
        Ok(value)
    }

    /// Parses one value at the cursor and checks, without consuming it, that
    /// it is followed by `terminator` or by a comma when `allow_comma` is set.
    /// The end of the input only ends a value read without a `terminator`.
    pub fn parse_value(
        &self,
        cursor: &mut Cursor<'_>,
        terminator: Option<char>,
        allow_comma: bool,
    ) -> Result<Value, ParseError> {
        let terminator = Terminator {
            close: terminator,
            comma: allow_comma,
        };
        let value = if self.config.version.is_wild_west() {
            legacy::parse_value(cursor, terminator, &self.config)?
        } else {
            self.value(
                cursor,
                terminator,
                Kind::Int,
                Depth::new(self.config.max_depth),
            )?
        };
        cursor.skip_whitespace();
        match (cursor.peek(), terminator.close) {
            (None, None) => Ok(value),
            (Some(c), close) if Some(c) == close || (terminator.comma && c == ',') => Ok(value),
            (None, Some(close)) => Err(cursor.error(
                ParseErrorKind::MissingTerminator,
                format!("expected {close:?} or ',' but found the end"),
            )),
            (Some(c), Some(close)) => Err(cursor.error(
                ParseErrorKind::MissingTerminator,
                format!("expected {close:?} or ',' but found {c:?}"),
            )),
            (Some(c), None) => Err(cursor.error(
                ParseErrorKind::MissingTerminator,
                format!("unexpected {c:?} after the value"),
            )),
        }
    }

    /// Reads `true` or `false` (in any case) when they form a whole word.
    pub fn parse_boolean(&self, cursor: &mut Cursor<'_>) -> Option<Value> {
        cursor.attempt(|cursor| {
            let value = if cursor.eat_word_ignore_case("true") {
                true
            } else if cursor.eat_word_ignore_case("false") {
                false
            } else {
                return None;
            };
            if cursor.peek().is_some_and(string::is_unwrapped_char) {
                return None;
            }
            Some(Value::Boolean(
                Boolean::new(value).with_minimal(self.config.minimal),
            ))
        })
    }

    /// Reads a numeric literal. `Ok(None)` leaves the cursor where it was:
    /// the text there is not a number and should be read as something else.
    pub fn parse_number(&self, cursor: &mut Cursor<'_>) -> Result<Option<Value>, ParseError> {
        self.number(cursor, Kind::Int)
    }

    /// Reads a quoted or unwrapped string that must be followed by
    /// `terminator`, a comma when `allow_comma` is set, whitespace or the end.
    pub fn parse_string(
        &self,
        cursor: &mut Cursor<'_>,
        terminator: Option<char>,
        allow_comma: bool,
    ) -> Result<Value, ParseError> {
        cursor.skip_whitespace();
        self.string(
            cursor,
            Terminator {
                close: terminator,
                comma: allow_comma,
            },
        )
    }

    /// Reads an object; the cursor must be on `{`.
    pub fn parse_compound(&self, cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
        self.compound(cursor, Depth::new(self.config.max_depth))
    }

    /// Reads a list or typed array; the cursor must be on `[`.
    pub fn parse_list(&self, cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
        self.list(cursor, Depth::new(self.config.max_depth))
    }

    pub(crate) fn value(
        &self,
        cursor: &mut Cursor<'_>,
        terminator: Terminator,
        implicit: Kind,
        depth: Depth,
    ) -> Result<Value, ParseError> {
        cursor.skip_whitespace();
        let Some(first) = cursor.peek() else {
            return Err(cursor.error(ParseErrorKind::EmptyValue, "expected a value"));
        };
        if let Some(value) = self.parse_boolean(cursor) {
            return Ok(value);
        }
        match first {
            '{' => self.compound(cursor, depth),
            '[' => self.list(cursor, depth),
            '+' | '-' | '.' | '0'..='9' => match self.number(cursor, implicit)? {
                Some(value) => Ok(value),
                None => {
                    tracing::debug!(
                        "not a number at offset {}, reading a string.",
                        cursor.offset()
                    );
                    self.string(cursor, terminator)
                }
            },
            _ => self.string(cursor, terminator),
        }
    }

    fn number(&self, cursor: &mut Cursor<'_>, implicit: Kind) -> Result<Option<Value>, ParseError> {
        let Some(literal) = number::scan(cursor, self.config.version) else {
            return Ok(None);
        };
        let (kind, scalar) = literal.evaluate(implicit).map_err(|overflow| {
            cursor.error_at(
                literal.start,
                ParseErrorKind::NumericOverflow,
                format!("number out of range for {}", overflow.0),
            )
        })?;
        Ok(Some(number::cell(
            kind,
            scalar,
            self.config.minimal,
            literal.has_suffix(),
        )))
    }

    fn string(&self, cursor: &mut Cursor<'_>, terminator: Terminator) -> Result<Value, ParseError> {
        let version = self.config.version;
        let string = match cursor
            .peek()
            .and_then(|c| string::quote_of(c, version))
        {
            Some(_) => {
                let (text, quote) = string::parse_quoted(cursor, version)?;
                NbtString::new(text.into_owned()).with_quote(quote)
            }
            None => {
                let text = string::parse_unwrapped(cursor, terminator.close, terminator.comma)?;
                NbtString::new(text.as_str())
            }
        };
        Ok(Value::String(string.with_minimal(self.config.minimal)))
    }

    /// Reads an object key and the `:` after it.
    pub(crate) fn key<'a>(&self, cursor: &mut Cursor<'a>) -> Result<Cow<'a, str>, ParseError> {
        cursor.skip_whitespace();
        let version = self.config.version;
        let key = match cursor.peek().and_then(|c| string::quote_of(c, version)) {
            Some(_) => {
                let start = cursor.abs_pos();
                let (key, _) = string::parse_quoted(cursor, version)?;
                if key.trim().is_empty() {
                    return Err(cursor.error_at(
                        start,
                        ParseErrorKind::EmptyValue,
                        "keys must not be blank",
                    ));
                }
                key
            }
            None => {
                let key = cursor.eat_while(string::is_unwrapped_char);
                if key.is_empty() {
                    return Err(match cursor.peek() {
                        None => cursor.error(
                            ParseErrorKind::MissingClosingCharacter,
                            "expected a key or '}'",
                        ),
                        Some(_) => cursor.error(ParseErrorKind::EmptyValue, "expected a key"),
                    });
                }
                Cow::Borrowed(key.as_str())
            }
        };
        cursor.skip_whitespace();
        if !cursor.eat(':') {
            return Err(match cursor.peek() {
                None => cursor.error(ParseErrorKind::MissingClosingCharacter, "expected ':'"),
                Some(c) => cursor.error(
                    ParseErrorKind::MissingTerminator,
                    format!("expected ':' after key {key:?} but found {c:?}"),
                ),
            });
        }
        if cursor.peek_non_whitespace().is_none() {
            cursor.skip_whitespace();
            return Err(cursor.error(
                ParseErrorKind::EmptyValue,
                format!("expected a value for key {key:?}"),
            ));
        }
        Ok(key)
    }
}

/// Parses the whole of `text` under `config`.
///
/// ```
/// use na_snbt::{Config, ParseErrorKind, parse_text};
///
/// let config = Config::default();
/// let value = parse_text("{a:1,a:2}", &config).unwrap();
/// assert_eq!(value.as_compound().unwrap()["a"].as_int(), Some(2));
///
/// let err = parse_text("[1,2] x", &config).unwrap_err();
/// assert_eq!(err.kind, ParseErrorKind::TrailingData);
/// ```
pub fn parse_text(text: &str, config: &Config) -> Result<Value, ParseError> {
    Parser::new(*config).parse(text)
}

/// Parses the whole of `text`, which must be an object.
pub fn parse_compound(text: &str, config: &Config) -> Result<Compound, ParseError> {
    match parse_text(text, config)? {
        Value::Compound(compound) => Ok(compound),
        other => {
            let start = text.len() - text.trim_start().len();
            Err(ParseError::new(
                text,
                start,
                ParseErrorKind::Conversion(crate::ConversionError::new(
                    other.kind(),
                    Kind::Compound,
                )),
                "expected an object",
            ))
        }
    }
}
