//! Serde support for the value tree.
//!
//! Serialization is self-describing: compounds become maps, lists and typed
//! arrays become sequences, and scalars map to the matching primitive.
//!
//! | Value | serde data model |
//! |-------|------------------|
//! | `End` | unit |
//! | `Boolean` | `bool` |
//! | `Byte` .. `Long` | `i8` .. `i64` |
//! | `Float`, `Double` | `f32`, `f64` |
//! | `String` | `str` |
//! | `List`, arrays | seq |
//! | `Compound` | map |
//!
//! Deserializing widens unsigned integers to the next signed kind (`u8` to
//! `Short`, `u16` to `Int`, `u32` and `u64` to `Long`) and builds lists with
//! the usual adoption rules under [`Config::default`].

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
};

use crate::{ArrayElement, Compound, Config, List, TypedArray, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::End => serializer.serialize_unit(),
            Value::Boolean(v) => serializer.serialize_bool(v.get()),
            Value::Byte(v) => serializer.serialize_i8(v.get()),
            Value::Short(v) => serializer.serialize_i16(v.get()),
            Value::Int(v) => serializer.serialize_i32(v.get()),
            Value::Long(v) => serializer.serialize_i64(v.get()),
            Value::Float(v) => serializer.serialize_f32(v.get()),
            Value::Double(v) => serializer.serialize_f64(v.get()),
            Value::String(v) => serializer.serialize_str(v.as_str()),
            Value::List(v) => v.serialize(serializer),
            Value::Compound(v) => v.serialize(serializer),
            Value::ByteArray(v) => v.serialize(serializer),
            Value::IntArray(v) => v.serialize(serializer),
            Value::LongArray(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl Serialize for Compound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<T: ArrayElement + Serialize> Serialize for TypedArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an NBT value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i8<E: de::Error>(self, v: i8) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i16<E: de::Error>(self, v: i16) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i32<E: de::Error>(self, v: i32) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u8<E: de::Error>(self, v: u8) -> Result<Value, E> {
        Ok(Value::from(v as i16))
    }

    fn visit_u16<E: de::Error>(self, v: u16) -> Result<Value, E> {
        Ok(Value::from(v as i32))
    }

    fn visit_u32<E: de::Error>(self, v: u32) -> Result<Value, E> {
        Ok(Value::from(v as i64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        i64::try_from(v)
            .map(Value::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &"an integer up to i64::MAX"))
    }

    fn visit_f32<E: de::Error>(self, v: f32) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::End)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::End)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let config = Config::default();
        let mut list = List::new();
        while let Some(element) = seq.next_element::<Value>()? {
            list.add(element, &config).map_err(de::Error::custom)?;
        }
        Ok(Value::List(list))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut compound = Compound::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            compound.set(key, value);
        }
        Ok(Value::Compound(compound))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
