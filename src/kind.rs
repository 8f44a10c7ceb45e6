//! The closed set of value kinds.
//!
//! Every [`Value`](crate::Value) has exactly one [`Kind`]. Kinds map onto the
//! binary [`TagID`]s, with `Boolean` sharing the byte tag.

use std::fmt;

use crate::TagID;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Kind {
    /// Absent value; also the element kind of an empty list.
    End,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    List,
    Compound,
    ByteArray,
    IntArray,
    LongArray,
}

impl Kind {
    pub const fn tag_id(self) -> TagID {
        match self {
            Self::End => TagID::End,
            Self::Boolean | Self::Byte => TagID::Byte,
            Self::Short => TagID::Short,
            Self::Int => TagID::Int,
            Self::Long => TagID::Long,
            Self::Float => TagID::Float,
            Self::Double => TagID::Double,
            Self::String => TagID::String,
            Self::List => TagID::List,
            Self::Compound => TagID::Compound,
            Self::ByteArray => TagID::ByteArray,
            Self::IntArray => TagID::IntArray,
            Self::LongArray => TagID::LongArray,
        }
    }

    /// Integer kinds, smallest first. Booleans are not included.
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Int | Self::Long)
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
    }

    /// Element kind of a typed array kind.
    pub const fn array_element(self) -> Option<Kind> {
        match self {
            Self::ByteArray => Some(Self::Byte),
            Self::IntArray => Some(Self::Int),
            Self::LongArray => Some(Self::Long),
            _ => None,
        }
    }

    /// The one-letter token used in `[B;..]` array headers.
    pub const fn array_token(self) -> Option<char> {
        match self {
            Self::ByteArray => Some('B'),
            Self::IntArray => Some('I'),
            Self::LongArray => Some('L'),
            _ => None,
        }
    }

    pub const fn from_array_token(token: char) -> Option<Kind> {
        match token {
            'B' => Some(Self::ByteArray),
            'I' => Some(Self::IntArray),
            'L' => Some(Self::LongArray),
            _ => None,
        }
    }

    /// Inclusive integer range representable by an integer kind.
    pub(crate) const fn integer_bounds(self) -> Option<(i64, i64)> {
        match self {
            Self::Byte => Some((i8::MIN as i64, i8::MAX as i64)),
            Self::Short => Some((i16::MIN as i64, i16::MAX as i64)),
            Self::Int => Some((i32::MIN as i64, i32::MAX as i64)),
            Self::Long => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::End => "end",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::List => "list",
            Self::Compound => "compound",
            Self::ByteArray => "byte array",
            Self::IntArray => "int array",
            Self::LongArray => "long array",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
