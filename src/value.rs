//! The value tree.
//!
//! [`Value`] is a closed sum over every kind in the [`Kind`] lattice. Each
//! container exclusively owns its children, so a tree is dropped with its root
//! and never contains shared or cyclic nodes.

mod array;
mod compound;
mod convert;
mod list;
mod number;
mod string;

pub use array::*;
pub use compound::*;
pub use list::*;
pub use number::*;
pub use string::*;

pub(crate) use string::{is_bare_key, write_quoted};

use std::fmt;

use crate::{Config, Kind, TagID, snbt::ToSnbt};

#[derive(Clone, Debug)]
pub enum Value {
    End,
    Boolean(Boolean),
    Byte(Number<i8>),
    Short(Number<i16>),
    Int(Number<i32>),
    Long(Number<i64>),
    Float(Number<f32>),
    Double(Number<f64>),
    String(NbtString),
    List(List),
    Compound(Compound),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
}

macro_rules! number_accessors {
    ($($as:ident, $is:ident, $variant:ident, $t:ty);* $(;)?) => {
        $(
            #[inline]
            pub fn $as(&self) -> Option<$t> {
                match self {
                    Value::$variant(number) => Some(number.get()),
                    _ => None,
                }
            }

            #[inline]
            pub fn $is(&self) -> bool {
                matches!(self, Value::$variant(_))
            }
        )*
    };
}

macro_rules! ref_accessors {
    ($($as:ident, $as_mut:ident, $variant:ident, $t:ty);* $(;)?) => {
        $(
            #[inline]
            pub fn $as(&self) -> Option<&$t> {
                match self {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            #[inline]
            pub fn $as_mut(&mut self) -> Option<&mut $t> {
                match self {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        )*
    };
}

impl Value {
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::End => Kind::End,
            Value::Boolean(_) => Kind::Boolean,
            Value::Byte(_) => Kind::Byte,
            Value::Short(_) => Kind::Short,
            Value::Int(_) => Kind::Int,
            Value::Long(_) => Kind::Long,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Compound(_) => Kind::Compound,
            Value::ByteArray(_) => Kind::ByteArray,
            Value::IntArray(_) => Kind::IntArray,
            Value::LongArray(_) => Kind::LongArray,
        }
    }

    #[inline]
    pub fn tag_id(&self) -> TagID {
        self.kind().tag_id()
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, Value::End)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(boolean) => Some(boolean.get()),
            _ => None,
        }
    }

    number_accessors! {
        as_byte, is_byte, Byte, i8;
        as_short, is_short, Short, i16;
        as_int, is_int, Int, i32;
        as_long, is_long, Long, i64;
        as_float, is_float, Float, f32;
        as_double, is_double, Double, f64;
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string.as_str()),
            _ => None,
        }
    }

    ref_accessors! {
        as_list, as_list_mut, List, List;
        as_compound, as_compound_mut, Compound, Compound;
        as_byte_array, as_byte_array_mut, ByteArray, ByteArray;
        as_int_array, as_int_array_mut, IntArray, IntArray;
        as_long_array, as_long_array_mut, LongArray, LongArray;
    }

    /// Whether the value equals its cell's local default; containers are
    /// default when empty.
    pub fn is_default(&self) -> bool {
        match self {
            Value::End => true,
            Value::Boolean(v) => v.is_default(),
            Value::Byte(v) => v.is_default(),
            Value::Short(v) => v.is_default(),
            Value::Int(v) => v.is_default(),
            Value::Long(v) => v.is_default(),
            Value::Float(v) => v.is_default(),
            Value::Double(v) => v.is_default(),
            Value::String(v) => v.is_default(),
            Value::List(v) => v.is_empty(),
            Value::Compound(v) => v.is_empty(),
            Value::ByteArray(v) => v.is_empty(),
            Value::IntArray(v) => v.is_empty(),
            Value::LongArray(v) => v.is_empty(),
        }
    }

    pub fn is_minimal(&self) -> bool {
        match self {
            Value::End => false,
            Value::Boolean(v) => v.is_minimal(),
            Value::Byte(v) => v.is_minimal(),
            Value::Short(v) => v.is_minimal(),
            Value::Int(v) => v.is_minimal(),
            Value::Long(v) => v.is_minimal(),
            Value::Float(v) => v.is_minimal(),
            Value::Double(v) => v.is_minimal(),
            Value::String(v) => v.is_minimal(),
            Value::List(v) => v.is_minimal(),
            Value::Compound(v) => v.is_minimal(),
            Value::ByteArray(v) => v.is_minimal(),
            Value::IntArray(v) => v.is_minimal(),
            Value::LongArray(v) => v.is_minimal(),
        }
    }

    pub fn set_minimal(&mut self, minimal: bool) {
        match self {
            Value::End => {}
            Value::Boolean(v) => v.set_minimal(minimal),
            Value::Byte(v) => v.set_minimal(minimal),
            Value::Short(v) => v.set_minimal(minimal),
            Value::Int(v) => v.set_minimal(minimal),
            Value::Long(v) => v.set_minimal(minimal),
            Value::Float(v) => v.set_minimal(minimal),
            Value::Double(v) => v.set_minimal(minimal),
            Value::String(v) => v.set_minimal(minimal),
            Value::List(v) => v.set_minimal(minimal),
            Value::Compound(v) => v.set_minimal(minimal),
            Value::ByteArray(v) => v.set_minimal(minimal),
            Value::IntArray(v) => v.set_minimal(minimal),
            Value::LongArray(v) => v.set_minimal(minimal),
        }
    }

    #[inline]
    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.set_minimal(minimal);
        self
    }

    /// The most compact text form of the whole tree.
    #[inline]
    pub fn render_minimal(&self, config: &Config) -> String {
        ToSnbt::render_minimal(self, config)
    }

    /// The fully explicit (suffixed and quoted) text form of the whole tree.
    #[inline]
    pub fn render_canonical(&self, config: &Config) -> String {
        ToSnbt::render_canonical(self, config)
    }

    /// Text form honouring each node's own `minimal` flag.
    #[inline]
    pub fn to_snbt(&self, config: &Config) -> String {
        ToSnbt::to_snbt(self, config)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::End, Value::End) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            // a boolean is a byte restricted to 0 and 1
            (Value::Boolean(a), Value::Byte(b)) | (Value::Byte(b), Value::Boolean(a)) => {
                a.as_byte() == b.get()
            }
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Compound(a), Value::Compound(b)) => a == b,
            (Value::ByteArray(a), Value::ByteArray(b)) => a == b,
            (Value::IntArray(a), Value::IntArray(b)) => a == b,
            (Value::LongArray(a), Value::LongArray(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::End
    }
}

impl fmt::Display for Value {
    /// Writes the value under the latest version, honouring its own flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_snbt(&Config::default()))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(Boolean::new(value))
    }
}

impl<T: Numeric> From<Number<T>> for Value {
    fn from(number: Number<T>) -> Self {
        T::wrap(number)
    }
}

macro_rules! from_numeric {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    <$t as Numeric>::wrap(Number::new(value))
                }
            }
        )*
    };
}

from_numeric!(i8, i16, i32, i64, f32, f64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(NbtString::new(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(NbtString::new(value))
    }
}

impl From<NbtString> for Value {
    fn from(value: NbtString) -> Self {
        Value::String(value)
    }
}

impl From<Boolean> for Value {
    fn from(value: Boolean) -> Self {
        Value::Boolean(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Compound> for Value {
    fn from(value: Compound) -> Self {
        Value::Compound(value)
    }
}

impl<T: ArrayElement> From<TypedArray<T>> for Value {
    fn from(value: TypedArray<T>) -> Self {
        T::wrap_array(value)
    }
}
