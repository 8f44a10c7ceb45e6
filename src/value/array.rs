use std::{ops::Index, slice};

use crate::{Config, ConversionError, Kind, Number, Numeric, Value};

mod private {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Element types of the three primitive arrays.
pub trait ArrayElement: Numeric + private::Sealed {
    const ARRAY_KIND: Kind;

    fn wrap_array(array: TypedArray<Self>) -> Value;
}

impl ArrayElement for i8 {
    const ARRAY_KIND: Kind = Kind::ByteArray;

    fn wrap_array(array: TypedArray<Self>) -> Value {
        Value::ByteArray(array)
    }
}

impl ArrayElement for i32 {
    const ARRAY_KIND: Kind = Kind::IntArray;

    fn wrap_array(array: TypedArray<Self>) -> Value {
        Value::IntArray(array)
    }
}

impl ArrayElement for i64 {
    const ARRAY_KIND: Kind = Kind::LongArray;

    fn wrap_array(array: TypedArray<Self>) -> Value {
        Value::LongArray(array)
    }
}

/// A primitive array of one fixed element kind.
///
/// Unlike [`List`](crate::List), the element kind never changes: added values
/// are converted to it or rejected.
#[derive(Clone, Debug)]
pub struct TypedArray<T> {
    values: Vec<T>,
    minimal: bool,
}

pub type ByteArray = TypedArray<i8>;
pub type IntArray = TypedArray<i32>;
pub type LongArray = TypedArray<i64>;

impl<T: ArrayElement> TypedArray<T> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            minimal: false,
        }
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    /// Converts `value` to the element kind and appends it. On failure the
    /// array is left untouched.
    pub fn add(&mut self, value: Value, config: &Config) -> Result<(), ConversionError> {
        let from = value.kind();
        let converted = value.convert(T::KIND, config)?;
        let element = T::unwrap(&converted)
            .map(Number::get)
            .ok_or(ConversionError::new(from, T::KIND))?;
        self.values.push(element);
        Ok(())
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.values.len()).then(|| self.values.remove(index))
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    #[inline]
    pub fn is_minimal(&self) -> bool {
        self.minimal
    }

    #[inline]
    pub fn set_minimal(&mut self, minimal: bool) {
        self.minimal = minimal;
    }

    /// Elements as value cells, for rendering and list conversion.
    pub(crate) fn cells(&self) -> impl Iterator<Item = Number<T>> + '_ {
        self.values.iter().map(|&v| Number::new(v))
    }
}

impl<T: ArrayElement> Default for TypedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArrayElement> PartialEq for TypedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: ArrayElement> From<Vec<T>> for TypedArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            values,
            minimal: false,
        }
    }
}

impl<T: ArrayElement> FromIterator<T> for TypedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: ArrayElement> Index<usize> for TypedArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<'a, T: ArrayElement> IntoIterator for &'a TypedArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
