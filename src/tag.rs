use std::fmt;

use crate::{Kind, Value, Version};

/// The type byte that precedes every value in the binary encoding.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TagID {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagID {
    /// Decodes a tag byte as understood by `version`.
    ///
    /// Tag 12 only exists from the revision that introduced primitive arrays.
    pub const fn from_u8(value: u8, version: Version) -> Option<Self> {
        Some(match value {
            0 => Self::End,
            1 => Self::Byte,
            2 => Self::Short,
            3 => Self::Int,
            4 => Self::Long,
            5 => Self::Float,
            6 => Self::Double,
            7 => Self::ByteArray,
            8 => Self::String,
            9 => Self::List,
            10 => Self::Compound,
            11 => Self::IntArray,
            12 if version.long_array_tag() => Self::LongArray,
            _ => return None,
        })
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this is a fixed-width scalar tag type.
    ///
    /// ```
    /// use na_snbt::TagID;
    ///
    /// assert!(TagID::Int.is_primitive());
    /// assert!(!TagID::String.is_primitive());
    /// ```
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }

    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
    }

    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }

    /// The value kind a decoder produces for this tag.
    pub const fn kind(self) -> Kind {
        match self {
            Self::End => Kind::End,
            Self::Byte => Kind::Byte,
            Self::Short => Kind::Short,
            Self::Int => Kind::Int,
            Self::Long => Kind::Long,
            Self::Float => Kind::Float,
            Self::Double => Kind::Double,
            Self::ByteArray => Kind::ByteArray,
            Self::String => Kind::String,
            Self::List => Kind::List,
            Self::Compound => Kind::Compound,
            Self::IntArray => Kind::IntArray,
            Self::LongArray => Kind::LongArray,
        }
    }
}

impl From<TagID> for u8 {
    #[inline]
    fn from(tag: TagID) -> Self {
        tag.to_u8()
    }
}

impl fmt::Display for TagID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A named value: one compound entry, or a root tag with its (usually empty)
/// name.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTag {
    pub name: String,
    pub value: Value,
}

impl NamedTag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}
