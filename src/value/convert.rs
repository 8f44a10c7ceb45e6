use crate::{
    ArrayElement, Boolean, Config, ConversionError, Kind, List, NbtString, Number, Numeric, Scalar,
    Sequence, TypedArray, Value, snbt::number,
};

impl Value {
    /// Converts the value to `target`, consuming it.
    ///
    /// A value of the target kind is returned unchanged. Anything renders to a
    /// string; booleans and numbers reinterpret into each other by truncation
    /// or widening; strings that lex as a number (or a boolean literal) become
    /// numbers; lists and typed arrays convert element by element. Everything
    /// else fails with a [`ConversionError`].
    ///
    /// ```
    /// use na_snbt::{Config, Kind, Value};
    ///
    /// let config = Config::default();
    /// let byte = Value::from(300i32).convert(Kind::Byte, &config).unwrap();
    /// assert_eq!(byte.as_byte(), Some(44));
    ///
    /// let text = Value::from(7i64).convert(Kind::String, &config).unwrap();
    /// assert_eq!(text.as_str(), Some("7"));
    ///
    /// assert!(Value::from("abc").convert(Kind::Int, &config).is_err());
    /// ```
    pub fn convert(self, target: Kind, config: &Config) -> Result<Value, ConversionError> {
        if self.kind() == target {
            return Ok(self);
        }
        self.to_kind(target, config)
    }

    /// Borrowing form of [`convert`](Self::convert).
    pub fn to_kind(&self, target: Kind, config: &Config) -> Result<Value, ConversionError> {
        let from = self.kind();
        if from == target {
            return Ok(self.clone());
        }
        let minimal = self.is_minimal();
        let error = ConversionError::new(from, target);
        let converted = match target {
            Kind::String => Some(Value::String(
                NbtString::new(self.to_text(config)).with_minimal(minimal),
            )),
            Kind::Boolean | Kind::Byte | Kind::Short | Kind::Int | Kind::Long | Kind::Float
            | Kind::Double => self
                .to_scalar(config)
                .map(|scalar| from_scalar(scalar, target, minimal)),
            Kind::List => self.to_list(),
            Kind::ByteArray => self.to_array::<i8>(config),
            Kind::IntArray => self.to_array::<i32>(config),
            Kind::LongArray => self.to_array::<i64>(config),
            Kind::Compound | Kind::End => None,
        };
        converted.ok_or(error)
    }

    fn to_text(&self, config: &Config) -> String {
        match self {
            Value::End => String::new(),
            Value::Boolean(b) => b.get().to_string(),
            Value::String(s) => s.as_str().to_owned(),
            other => other.render_minimal(config),
        }
    }

    fn to_scalar(&self, config: &Config) -> Option<Scalar> {
        match self {
            Value::Boolean(b) => Some(Scalar::Int(b.as_byte() as i64)),
            Value::Byte(n) => Some(n.get().to_scalar()),
            Value::Short(n) => Some(n.get().to_scalar()),
            Value::Int(n) => Some(n.get().to_scalar()),
            Value::Long(n) => Some(n.get().to_scalar()),
            Value::Float(n) => Some(n.get().to_scalar()),
            Value::Double(n) => Some(n.get().to_scalar()),
            Value::String(s) => {
                let text = Sequence::new(s.as_str()).trim();
                if text.as_str().eq_ignore_ascii_case("true") {
                    Some(Scalar::Int(1))
                } else if text.as_str().eq_ignore_ascii_case("false") {
                    Some(Scalar::Int(0))
                } else {
                    number::parse_exact(text, Kind::Long, config.version)
                }
            }
            _ => None,
        }
    }

    fn to_list(&self) -> Option<Value> {
        fn cells<T: ArrayElement>(array: &TypedArray<T>) -> Value {
            let elements = array
                .cells()
                .map(|cell| T::wrap(cell.with_minimal(array.is_minimal())))
                .collect();
            Value::List(List::from_parts(Some(T::KIND), elements).with_minimal(array.is_minimal()))
        }

        match self {
            Value::ByteArray(array) => Some(cells(array)),
            Value::IntArray(array) => Some(cells(array)),
            Value::LongArray(array) => Some(cells(array)),
            _ => None,
        }
    }

    fn to_array<T: ArrayElement>(&self, config: &Config) -> Option<Value> {
        let minimal = self.is_minimal();
        let values: Vec<T> = match self {
            Value::List(list) => list
                .iter()
                .map(|element| {
                    let converted = element.to_kind(T::KIND, config).ok()?;
                    T::unwrap(&converted).map(Number::get)
                })
                .collect::<Option<_>>()?,
            Value::ByteArray(array) => array.iter().map(|&v| cast(v)).collect(),
            Value::IntArray(array) => array.iter().map(|&v| cast(v)).collect(),
            Value::LongArray(array) => array.iter().map(|&v| cast(v)).collect(),
            _ => return None,
        };
        Some(T::wrap_array(TypedArray::from(values).with_minimal(minimal)))
    }
}

#[inline]
fn cast<S: Numeric, T: Numeric>(value: S) -> T {
    T::from_scalar(value.to_scalar())
}

fn from_scalar(scalar: Scalar, target: Kind, minimal: bool) -> Value {
    fn wrap<T: Numeric>(scalar: Scalar, minimal: bool) -> Value {
        T::wrap(Number::new(T::from_scalar(scalar)).with_minimal(minimal))
    }

    match target {
        Kind::Boolean => {
            let value = match scalar {
                Scalar::Int(v) => v != 0,
                Scalar::Float(v) => v != 0.0,
            };
            Value::Boolean(Boolean::new(value).with_minimal(minimal))
        }
        Kind::Byte => wrap::<i8>(scalar, minimal),
        Kind::Short => wrap::<i16>(scalar, minimal),
        Kind::Int => wrap::<i32>(scalar, minimal),
        Kind::Long => wrap::<i64>(scalar, minimal),
        Kind::Float => wrap::<f32>(scalar, minimal),
        // only numeric kinds reach here
        _ => wrap::<f64>(scalar, minimal),
    }
}
