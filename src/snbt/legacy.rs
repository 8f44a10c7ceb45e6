//! The pre-1.12 ("wild-west") grammar.
//!
//! Old revisions did not tokenize at all: they cut the text at top-level
//! commas and colons, tracking only bracket nesting and double quotes, and
//! then guessed the kind of each piece. That makes many strings legal that
//! the strict grammar rejects (`{id:minecraft:stone}`, `[0:a,1:b]`) and is
//! reproduced here over [`Sequence`] slices, without copying.

use crate::{
    Boolean, Compound, Config, Cursor, Kind, List, NbtString, ParseError, ParseErrorKind, Sequence,
    Value,
    snbt::{Terminator, number},
    util::Depth,
};

pub(crate) fn parse(text: Sequence<'_>, config: &Config) -> Result<Value, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(text.error_at(0, ParseErrorKind::EmptyValue, "expected a value"));
    }
    Legacy { config }.value(text, Depth::new(config.max_depth), true)
}

/// Reads one value up to a top-level `terminator`, leaving the cursor on it.
pub(crate) fn parse_value(
    cursor: &mut Cursor<'_>,
    terminator: Terminator,
    config: &Config,
) -> Result<Value, ParseError> {
    let extent = scan(cursor, |c| {
        Some(c) == terminator.close || (terminator.comma && c == ',')
    })?
    .trim();
    if extent.is_empty() {
        return Err(cursor.error(ParseErrorKind::EmptyValue, "expected a value"));
    }
    Legacy { config }.value(extent, Depth::new(config.max_depth), false)
}

/// Consumes text up to the first top-level character matching `stop`, or to
/// the end. Brackets must balance and double quotes must close; a backslash
/// inside quotes escapes the next character.
fn scan<'a>(
    cursor: &mut Cursor<'a>,
    stop: impl Fn(char) -> bool,
) -> Result<Sequence<'a>, ParseError> {
    let start = cursor.abs_pos();
    let mut open: Vec<char> = Vec::new();
    let mut quoted = false;
    loop {
        let Some(c) = cursor.peek() else {
            if quoted {
                return Err(cursor.error(
                    ParseErrorKind::MissingClosingCharacter,
                    "unterminated string, expected '\"'",
                ));
            }
            if let Some(close) = open.last() {
                return Err(cursor.error(
                    ParseErrorKind::MissingClosingCharacter,
                    format!("expected {close:?}"),
                ));
            }
            break;
        };
        if quoted {
            cursor.next();
            match c {
                '\\' => {
                    cursor.next();
                }
                '"' => quoted = false,
                _ => {}
            }
            continue;
        }
        if open.is_empty() && stop(c) {
            break;
        }
        match c {
            '"' => quoted = true,
            '{' => open.push('}'),
            '[' => open.push(']'),
            '}' | ']' => {
                if open.pop() != Some(c) {
                    return Err(cursor.error(
                        ParseErrorKind::InvalidCharacter,
                        format!("unbalanced {c:?}"),
                    ));
                }
            }
            _ => {}
        }
        cursor.next();
    }
    Ok(cursor.since(start))
}

/// Splits `body` at top-level commas.
fn split(body: Sequence<'_>) -> Result<Vec<Sequence<'_>>, ParseError> {
    let mut parts = Vec::new();
    if body.trim().is_empty() {
        return Ok(parts);
    }
    let mut cursor = body.cursor();
    loop {
        parts.push(scan(&mut cursor, |c| c == ',')?);
        if !cursor.eat(',') {
            return Ok(parts);
        }
    }
}

/// Drops the wrapping quotes and resolves `\\` and `\"`; any other backslash
/// is kept as written.
fn unquote(text: Sequence<'_>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '\\' || next == '"' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

struct Legacy<'c> {
    config: &'c Config,
}

impl Legacy<'_> {
    fn value(&self, text: Sequence<'_>, depth: Depth, root: bool) -> Result<Value, ParseError> {
        let text = text.trim();
        match text.first() {
            Some('{') => self.compound(text, depth, root),
            Some('[') => self.list(text, depth, root),
            _ => self.primitive(text),
        }
    }

    /// Finds the body of a bracketed value and checks nothing follows it.
    fn body<'a>(
        &self,
        text: Sequence<'a>,
        close: char,
        root: bool,
    ) -> Result<Sequence<'a>, ParseError> {
        let mut cursor = text.cursor();
        cursor.next();
        let body = scan(&mut cursor, |c| c == close)?;
        if !cursor.eat(close) {
            return Err(cursor.error(
                ParseErrorKind::MissingClosingCharacter,
                format!("expected {close:?}"),
            ));
        }
        cursor.skip_whitespace();
        if !cursor.is_at_end() {
            return Err(if root {
                cursor.error(ParseErrorKind::TrailingData, "unexpected text after the value")
            } else {
                cursor.error(
                    ParseErrorKind::MissingTerminator,
                    format!("unexpected text after {close:?}"),
                )
            });
        }
        Ok(body)
    }

    fn enter(&self, text: Sequence<'_>, depth: Depth) -> Result<Depth, ParseError> {
        depth.enter().ok_or_else(|| {
            text.error_at(
                0,
                ParseErrorKind::TooDeep,
                format!("nesting deeper than {}", depth.max()),
            )
        })
    }

    fn compound(&self, text: Sequence<'_>, depth: Depth, root: bool) -> Result<Value, ParseError> {
        let depth = self.enter(text, depth)?;
        let body = self.body(text, '}', root)?;
        let mut compound = Compound::new().with_minimal(self.config.minimal);
        for entry in split(body)? {
            if entry.trim().is_empty() {
                return Err(entry.error_at(0, ParseErrorKind::EmptyValue, "expected an entry"));
            }
            let mut cursor = entry.cursor();
            let key = scan(&mut cursor, |c| c == ':')?.trim();
            if !cursor.eat(':') {
                return Err(cursor.error(
                    ParseErrorKind::MissingTerminator,
                    format!("expected ':' after key {:?}", key.as_str()),
                ));
            }
            let key_at = key;
            let key = match key.strip_wrapper('"', '"') {
                Some(inner) => unquote(inner),
                None => key.as_str().to_owned(),
            };
            if key.trim().is_empty() {
                return Err(key_at.error_at(
                    0,
                    ParseErrorKind::EmptyValue,
                    "keys must not be blank",
                ));
            }
            let raw = cursor.remaining().trim();
            let value = if raw.is_empty() {
                Value::String(NbtString::new("").with_minimal(self.config.minimal))
            } else {
                self.value(raw, depth, false)?
            };
            compound.set(key, value);
        }
        Ok(Value::Compound(compound))
    }

    fn list(&self, text: Sequence<'_>, depth: Depth, root: bool) -> Result<Value, ParseError> {
        let depth = self.enter(text, depth)?;
        let body = self.body(text, ']', root)?;
        let mut list = List::new().with_minimal(self.config.minimal);
        for entry in split(body)? {
            let mut entry = entry.trim();
            if entry.is_empty() {
                return Err(entry.error_at(0, ParseErrorKind::EmptyValue, "expected an element"));
            }
            // `0:value` index prefixes are ignored
            let mut cursor = entry.cursor();
            if !cursor.eat_while(|c| c.is_ascii_digit()).is_empty() && cursor.eat(':') {
                entry = cursor.remaining().trim();
                if entry.is_empty() {
                    return Err(entry.error_at(0, ParseErrorKind::EmptyValue, "expected an element"));
                }
            }
            let value = self.value(entry, depth, false)?;
            list.add(value, self.config).map_err(|err| {
                entry.error_at(0, ParseErrorKind::Conversion(err), err.to_string())
            })?;
        }
        Ok(Value::List(list))
    }

    fn primitive(&self, text: Sequence<'_>) -> Result<Value, ParseError> {
        let minimal = self.config.minimal;
        if text.is_empty() {
            return Err(text.error_at(0, ParseErrorKind::EmptyValue, "expected a value"));
        }
        if text.first() == Some('"') {
            return self.quoted(text);
        }
        if text.as_str().eq_ignore_ascii_case("true") || text.as_str().eq_ignore_ascii_case("false") {
            let value = text.as_str().eq_ignore_ascii_case("true");
            return Ok(Value::Boolean(Boolean::new(value).with_minimal(minimal)));
        }

        let mut cursor = text.cursor();
        if let Some(literal) = number::scan(&mut cursor, self.config.version) {
            if cursor.is_at_end() {
                let (kind, scalar) = literal.evaluate(Kind::Int).map_err(|overflow| {
                    text.error_at(
                        0,
                        ParseErrorKind::NumericOverflow,
                        format!("number out of range for {}", overflow.0),
                    )
                })?;
                return Ok(number::cell(kind, scalar, minimal, literal.has_suffix()));
            }
        }
        Ok(Value::String(NbtString::new(text.as_str()).with_minimal(minimal)))
    }

    fn quoted(&self, text: Sequence<'_>) -> Result<Value, ParseError> {
        let mut cursor = text.cursor();
        cursor.next();
        let start = cursor.abs_pos();
        loop {
            match cursor.next() {
                None => {
                    return Err(cursor.error(
                        ParseErrorKind::MissingClosingCharacter,
                        "unterminated string, expected '\"'",
                    ));
                }
                Some('\\') => {
                    cursor.next();
                }
                Some('"') => break,
                Some(_) => {}
            }
        }
        let inner = cursor.since(start).slice_to(-1).unwrap_or(text);
        if !cursor.is_at_end() {
            return Err(cursor.error(
                ParseErrorKind::MissingTerminator,
                "unexpected text after the closing quote",
            ));
        }
        Ok(Value::String(
            NbtString::new(unquote(inner)).with_minimal(self.config.minimal),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Version;

    fn legacy(text: &str) -> Result<Value, ParseError> {
        parse(Sequence::new(text), &Config::new(Version::V1_8))
    }

    #[test]
    fn test_split_respects_nesting() {
        let parts = split(Sequence::new(r#"a:[1,2],b:"x,y",c:{d:1,e:2}"#)).unwrap();
        let parts: Vec<_> = parts.iter().map(Sequence::as_str).collect();
        assert_eq!(parts, ["a:[1,2]", r#"b:"x,y""#, "c:{d:1,e:2}"]);
    }

    #[test]
    fn test_unbalanced() {
        let err = legacy("{a:[1}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidCharacter);
        let err = legacy("{a:1").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingClosingCharacter);
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn test_unquote_keeps_other_backslashes() {
        assert_eq!(unquote(Sequence::new(r#"a\"b\\c\n"#)), "a\"b\\c\\n");
    }

    #[test]
    fn test_structure_in_unquoted_value() {
        let value = legacy("{id:minecraft:stone}").unwrap();
        assert_eq!(value.as_compound().unwrap()["id"].as_str(), Some("minecraft:stone"));
    }

    #[test]
    fn test_empty_compound_value() {
        let value = legacy("{a:}").unwrap();
        assert_eq!(value.as_compound().unwrap()["a"].as_str(), Some(""));
    }
}
