use crate::{
    ArrayElement, Compound, Cursor, Kind, List, ParseError, ParseErrorKind, Parser, TypedArray,
    Value,
    snbt::Terminator,
    util::Depth,
};

/// Outcome of the separator check after a collection element.
enum Next {
    Element,
    Close,
}

impl Parser {
    fn enter(&self, cursor: &Cursor<'_>, depth: Depth) -> Result<Depth, ParseError> {
        depth.enter().ok_or_else(|| {
            cursor.error(
                ParseErrorKind::TooDeep,
                format!("nesting deeper than {}", depth.max()),
            )
        })
    }

    /// After an element: a closing character ends the collection, a comma
    /// continues it (or ends it, when trailing commas are allowed and the
    /// closing character follows).
    fn separator(&self, cursor: &mut Cursor<'_>, close: char) -> Result<Next, ParseError> {
        cursor.skip_whitespace();
        match cursor.next() {
            Some(c) if c == close => Ok(Next::Close),
            Some(',') => {
                cursor.skip_whitespace();
                match cursor.peek() {
                    Some(c) if c == close => {
                        if self.config().version.trailing_commas() {
                            cursor.next();
                            Ok(Next::Close)
                        } else {
                            Err(cursor.error(ParseErrorKind::EmptyValue, "trailing comma"))
                        }
                    }
                    None => Err(cursor.error(
                        ParseErrorKind::MissingClosingCharacter,
                        format!("expected {close:?}"),
                    )),
                    Some(_) => Ok(Next::Element),
                }
            }
            None => Err(cursor.error(
                ParseErrorKind::MissingClosingCharacter,
                format!("expected {close:?}"),
            )),
            Some(c) => {
                cursor.prev();
                Err(cursor.error(
                    ParseErrorKind::MissingTerminator,
                    format!("expected {close:?} or ',' but found {c:?}"),
                ))
            }
        }
    }

    pub(crate) fn compound(&self, cursor: &mut Cursor<'_>, depth: Depth) -> Result<Value, ParseError> {
        let depth = self.enter(cursor, depth)?;
        if !cursor.eat('{') {
            return Err(cursor.error(ParseErrorKind::InvalidCharacter, "expected '{'"));
        }
        let mut compound = Compound::new().with_minimal(self.config().minimal);
        cursor.skip_whitespace();
        if cursor.eat('}') {
            return Ok(Value::Compound(compound));
        }
        loop {
            let key = self.key(cursor)?;
            let value = self.value(cursor, Terminator::element('}'), Kind::Int, depth)?;
            compound.set(key, value);
            match self.separator(cursor, '}')? {
                Next::Element => {}
                Next::Close => return Ok(Value::Compound(compound)),
            }
        }
    }

    pub(crate) fn list(&self, cursor: &mut Cursor<'_>, depth: Depth) -> Result<Value, ParseError> {
        let depth = self.enter(cursor, depth)?;
        if !cursor.eat('[') {
            return Err(cursor.error(ParseErrorKind::InvalidCharacter, "expected '['"));
        }
        match self.array_header(cursor) {
            Some(Kind::ByteArray) => self.array::<i8>(cursor, depth),
            Some(Kind::IntArray) => self.array::<i32>(cursor, depth),
            Some(Kind::LongArray) => self.array::<i64>(cursor, depth),
            _ => self.general_list(cursor, depth),
        }
    }

    /// Consumes `B;`, `I;` or `L;` right after the opening bracket.
    fn array_header(&self, cursor: &mut Cursor<'_>) -> Option<Kind> {
        let version = self.config().version;
        if !version.primitive_arrays() {
            return None;
        }
        cursor.attempt(|cursor| {
            if version.array_header_whitespace() {
                cursor.skip_whitespace();
            }
            let kind = cursor.next().and_then(Kind::from_array_token)?;
            if version.array_header_whitespace() {
                cursor.skip_whitespace();
            }
            cursor.eat(';').then_some(kind)
        })
    }

    fn general_list(&self, cursor: &mut Cursor<'_>, depth: Depth) -> Result<Value, ParseError> {
        let mut list = List::new().with_minimal(self.config().minimal);
        cursor.skip_whitespace();
        if cursor.eat(']') {
            return Ok(Value::List(list));
        }
        loop {
            cursor.skip_whitespace();
            let start = cursor.abs_pos();
            let value = self.value(cursor, Terminator::element(']'), Kind::Int, depth)?;
            list.add(value, self.config()).map_err(|err| {
                cursor.error_at(start, ParseErrorKind::Conversion(err), err.to_string())
            })?;
            match self.separator(cursor, ']')? {
                Next::Element => {}
                Next::Close => return Ok(Value::List(list)),
            }
        }
    }

    /// Elements are parsed with the element kind as the implicit integer
    /// kind and then converted; a failed conversion fails the whole array.
    fn array<T: ArrayElement>(&self, cursor: &mut Cursor<'_>, depth: Depth) -> Result<Value, ParseError> {
        let mut array = TypedArray::<T>::new().with_minimal(self.config().minimal);
        cursor.skip_whitespace();
        if cursor.eat(']') {
            return Ok(T::wrap_array(array));
        }
        loop {
            cursor.skip_whitespace();
            let start = cursor.abs_pos();
            let value = self.value(cursor, Terminator::element(']'), T::KIND, depth)?;
            array.add(value, self.config()).map_err(|err| {
                cursor.error_at(start, ParseErrorKind::Conversion(err), err.to_string())
            })?;
            match self.separator(cursor, ']')? {
                Next::Element => {}
                Next::Close => return Ok(T::wrap_array(array)),
            }
        }
    }
}
