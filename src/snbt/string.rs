//! Quoted and unwrapped string lexing.

use std::borrow::Cow;

use crate::{Cursor, ParseError, ParseErrorKind, Quote, Sequence, Version};

/// Characters allowed in an unwrapped string or a bare key.
#[inline]
pub(crate) fn is_unwrapped_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

/// The quote a string may open with under `version`.
#[inline]
pub(crate) fn quote_of(c: char, version: Version) -> Option<Quote> {
    match Quote::from_char(c)? {
        Quote::Single if !version.single_quotes() => None,
        quote => Some(quote),
    }
}

/// Reads a quoted string; the cursor must be on the opening quote.
///
/// The result borrows from the input until the first escape sequence.
pub(crate) fn parse_quoted<'a>(
    cursor: &mut Cursor<'a>,
    version: Version,
) -> Result<(Cow<'a, str>, Quote), ParseError> {
    let open = cursor.abs_pos();
    let quote = cursor
        .next()
        .and_then(|c| quote_of(c, version))
        .ok_or_else(|| cursor.error_at(open, ParseErrorKind::InvalidCharacter, "expected a quote"))?;
    let wrapper = quote.as_char();
    let start = cursor.abs_pos();
    let mut owned: Option<String> = None;

    loop {
        let here = cursor.abs_pos();
        let Some(c) = cursor.next() else {
            return Err(cursor.error(
                ParseErrorKind::MissingClosingCharacter,
                format!("unterminated string, expected {wrapper}"),
            ));
        };
        if c == wrapper {
            let text = match owned {
                Some(text) => Cow::Owned(text),
                None => Cow::Borrowed(cursor.sequence().with_range(start..here).as_str()),
            };
            return Ok((text, quote));
        }
        if c != '\\' {
            if let Some(text) = owned.as_mut() {
                text.push(c);
            }
            continue;
        }

        let text = owned
            .get_or_insert_with(|| cursor.sequence().with_range(start..here).as_str().to_owned());
        let Some(escaped) = cursor.next() else {
            return Err(cursor.error(
                ParseErrorKind::MissingClosingCharacter,
                format!("unterminated string, expected {wrapper}"),
            ));
        };
        match escaped {
            '\\' => text.push('\\'),
            c if c == wrapper => text.push(c),
            c if version.unicode_escapes() => match c {
                '"' | '\'' => text.push(c),
                'b' => text.push('\u{8}'),
                'f' => text.push('\u{c}'),
                'n' => text.push('\n'),
                'r' => text.push('\r'),
                's' => text.push(' '),
                't' => text.push('\t'),
                'u' => text.push(unicode_escape(cursor, here)?),
                _ => {
                    return Err(cursor.error_at(
                        here,
                        ParseErrorKind::InvalidEscape,
                        format!("invalid escape sequence \\{c}"),
                    ));
                }
            },
            c => {
                return Err(cursor.error_at(
                    here,
                    ParseErrorKind::InvalidEscape,
                    format!("invalid escape sequence \\{c}"),
                ));
            }
        }
    }
}

fn hex_unit(cursor: &mut Cursor<'_>, escape: usize) -> Result<u16, ParseError> {
    let digits = cursor.attempt(|cursor| {
        let mut unit = 0u16;
        for _ in 0..4 {
            let digit = cursor.next()?.to_digit(16)?;
            unit = unit << 4 | digit as u16;
        }
        Some(unit)
    });
    digits.ok_or_else(|| {
        cursor.error_at(
            escape,
            ParseErrorKind::InvalidEscape,
            "\\u must be followed by four hex digits",
        )
    })
}

/// Decodes the digits of a `\uXXXX` escape whose backslash is at `escape`,
/// joining a following low surrogate escape into one character.
fn unicode_escape(cursor: &mut Cursor<'_>, escape: usize) -> Result<char, ParseError> {
    let high = hex_unit(cursor, escape)?;
    if let Some(c) = char::from_u32(high as u32) {
        return Ok(c);
    }
    let low = cursor.attempt(|cursor| {
        let next = cursor.abs_pos();
        (cursor.eat('\\') && cursor.eat('u')).then_some(())?;
        hex_unit(cursor, next).ok()
    });
    low.and_then(|low| char::decode_utf16([high, low]).next()?.ok())
        .ok_or_else(|| {
            cursor.error_at(
                escape,
                ParseErrorKind::InvalidEscape,
                format!("unpaired surrogate \\u{high:04X}"),
            )
        })
}

/// Reads an unwrapped string, which must stop at whitespace, the end of the
/// input, `close` or (when allowed) a comma.
pub(crate) fn parse_unwrapped<'a>(
    cursor: &mut Cursor<'a>,
    close: Option<char>,
    comma: bool,
) -> Result<Sequence<'a>, ParseError> {
    let text = cursor.eat_while(is_unwrapped_char);
    match cursor.peek() {
        None => {}
        Some(c) if c.is_whitespace() || Some(c) == close || (comma && c == ',') => {}
        Some(c) => {
            return Err(cursor.error(
                ParseErrorKind::InvalidCharacter,
                format!("invalid character {c:?} in unquoted string"),
            ));
        }
    }
    if text.is_empty() {
        return Err(cursor.error(ParseErrorKind::EmptyValue, "expected a value"));
    }
    Ok(text)
}
