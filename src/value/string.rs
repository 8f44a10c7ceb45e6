use std::fmt::Write as _;

use crate::{
    Config, Sequence,
    snbt::{number, string::is_unwrapped_char},
};

/// A string cell.
///
/// The payload is always the unwrapped logical text; `quote` is only the
/// preferred wrapper for canonical output.
#[derive(Clone, Debug, Default)]
pub struct NbtString {
    value: String,
    quote: Quote,
    default: String,
    minimal: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quote {
    #[default]
    Double,
    Single,
}

impl Quote {
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '"' => Some(Self::Double),
            '\'' => Some(Self::Single),
            _ => None,
        }
    }
}

impl NbtString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.value
    }

    #[inline]
    pub fn quote(&self) -> Quote {
        self.quote
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }

    #[inline]
    pub fn is_minimal(&self) -> bool {
        self.minimal
    }

    #[inline]
    pub fn set_minimal(&mut self, minimal: bool) {
        self.minimal = minimal;
    }

    pub(crate) fn write_snbt(&self, out: &mut String, minimal: bool, config: &Config) {
        if minimal && !must_wrap(&self.value, config) {
            out.push_str(&self.value);
        } else {
            write_quoted(out, &self.value, self.quote, config);
        }
    }
}

impl PartialEq for NbtString {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl From<&str> for NbtString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NbtString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Whether `text` cannot be written bare without changing its meaning.
pub(crate) fn must_wrap(text: &str, config: &Config) -> bool {
    // an empty bare list element or root is rejected by every grammar
    if text.is_empty()
        || text.starts_with(char::is_whitespace)
        || text.ends_with(char::is_whitespace)
    {
        return true;
    }
    let reserved = if config.version.is_wild_west() {
        text.contains(['{', '}', '[', ']', ',', ':', '"', '\\'])
    } else {
        !text.chars().all(is_unwrapped_char)
    };
    reserved
        || text.eq_ignore_ascii_case("true")
        || text.eq_ignore_ascii_case("false")
        || number::lexes_as_number(Sequence::new(text), config.version)
}

/// Whether a compound key can be written without quotes.
pub(crate) fn is_bare_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_unwrapped_char)
}

/// Writes `text` wrapped in `quote`, escaping the backslash and the wrapper.
///
/// When the version reads unicode escapes, everything above U+007F is
/// written as `\uXXXX` UTF-16 units.
pub(crate) fn write_quoted(out: &mut String, text: &str, quote: Quote, config: &Config) {
    let quote = if config.version.single_quotes() {
        quote.as_char()
    } else {
        '"'
    };
    let escape_unicode = config.version.unicode_escapes();
    out.reserve(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
            out.push(c);
        } else if escape_unicode && c as u32 > 0x7F {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04X}");
            }
        } else {
            out.push(c);
        }
    }
    out.push(quote);
}
