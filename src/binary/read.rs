use std::io::Read;

use zerocopy::{FromBytes, Immutable, KnownLayout, byteorder};

use crate::{
    ByteOrder, Compound, Config, Error, List, NamedTag, NbtString, Result, TagID, Value, cold_path,
    util::Depth,
};

#[inline]
fn read_array<const N: usize>(reader: &mut impl Read) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Reads exactly `len` bytes without trusting `len` for the allocation.
fn read_bytes(reader: &mut impl Read, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if buf.len() != len {
        cold_path();
        return Err(Error::EndOfFile);
    }
    Ok(buf)
}

fn read_tag(reader: &mut impl Read, config: &Config) -> Result<TagID> {
    let [tag] = read_array::<1>(reader)?;
    TagID::from_u8(tag, config.version).ok_or(Error::UnknownType(tag))
}

fn read_length<O: ByteOrder>(reader: &mut impl Read) -> Result<usize> {
    let len = byteorder::I32::<O>::from_bytes(read_array(reader)?).get();
    usize::try_from(len).map_err(|_| Error::InvalidLength(len))
}

pub(crate) fn read_string<O: ByteOrder>(reader: &mut impl Read) -> Result<String> {
    let len = byteorder::U16::<O>::from_bytes(read_array(reader)?).get() as usize;
    let bytes = read_bytes(reader, len)?;
    Ok(simd_cesu8::mutf8::decode_lossy(&bytes).into_owned())
}

fn read_wide_array<T: FromBytes + Immutable + KnownLayout + Copy, V>(
    reader: &mut impl Read,
    len: usize,
    get: impl Fn(T) -> V,
) -> Result<Vec<V>> {
    let size = len
        .checked_mul(size_of::<T>())
        .ok_or(Error::InvalidLength(len as i32))?;
    let bytes = read_bytes(reader, size)?;
    let values = <[T]>::ref_from_bytes(&bytes).map_err(|_| Error::EndOfFile)?;
    Ok(values.iter().copied().map(get).collect())
}

pub(crate) fn read_payload<O: ByteOrder>(
    reader: &mut impl Read,
    tag: TagID,
    config: &Config,
    depth: Depth,
) -> Result<Value> {
    Ok(match tag {
        TagID::End => Value::End,
        TagID::Byte => Value::from(read_array::<1>(reader)?[0] as i8),
        TagID::Short => Value::from(byteorder::I16::<O>::from_bytes(read_array(reader)?).get()),
        TagID::Int => Value::from(byteorder::I32::<O>::from_bytes(read_array(reader)?).get()),
        TagID::Long => Value::from(byteorder::I64::<O>::from_bytes(read_array(reader)?).get()),
        TagID::Float => Value::from(byteorder::F32::<O>::from_bytes(read_array(reader)?).get()),
        TagID::Double => Value::from(byteorder::F64::<O>::from_bytes(read_array(reader)?).get()),
        TagID::ByteArray => {
            let len = read_length::<O>(reader)?;
            let bytes = read_bytes(reader, len)?;
            Value::ByteArray(bytes.into_iter().map(|b| b as i8).collect())
        }
        TagID::String => Value::String(NbtString::new(read_string::<O>(reader)?)),
        TagID::List => Value::List(read_list::<O>(reader, config, depth)?),
        TagID::Compound => Value::Compound(read_compound::<O>(reader, config, depth)?),
        TagID::IntArray => {
            let len = read_length::<O>(reader)?;
            Value::IntArray(
                read_wide_array(reader, len, byteorder::I32::<O>::get)?.into(),
            )
        }
        TagID::LongArray => {
            let len = read_length::<O>(reader)?;
            Value::LongArray(
                read_wide_array(reader, len, byteorder::I64::<O>::get)?.into(),
            )
        }
    })
}

fn read_list<O: ByteOrder>(reader: &mut impl Read, config: &Config, depth: Depth) -> Result<List> {
    let depth = depth.enter().ok_or(Error::TooDeep(depth.max()))?;
    let tag = read_tag(reader, config)?;
    let len = read_length::<O>(reader)?;
    if tag == TagID::End {
        if len > 0 {
            cold_path();
            return Err(Error::UnknownType(0));
        }
        return Ok(List::new());
    }
    let mut elements = Vec::with_capacity(len.min(1024));
    for _ in 0..len {
        elements.push(read_payload::<O>(reader, tag, config, depth)?);
    }
    Ok(List::from_parts(Some(tag.kind()), elements))
}

pub(crate) fn read_compound<O: ByteOrder>(
    reader: &mut impl Read,
    config: &Config,
    depth: Depth,
) -> Result<Compound> {
    let depth = depth.enter().ok_or(Error::TooDeep(depth.max()))?;
    let mut compound = Compound::new();
    loop {
        let tag = read_tag(reader, config)?;
        if tag == TagID::End {
            return Ok(compound);
        }
        let name = read_string::<O>(reader)?;
        let value = read_payload::<O>(reader, tag, config, depth)?;
        compound.set(name, value);
    }
}

/// Reads one `[tag][name][payload]` triple. A lone end tag reads as an
/// unnamed [`Value::End`].
pub(crate) fn read_named<O: ByteOrder>(reader: &mut impl Read, config: &Config) -> Result<NamedTag> {
    let tag = read_tag(reader, config)?;
    if tag == TagID::End {
        return Ok(NamedTag::new("", Value::End));
    }
    let name = read_string::<O>(reader)?;
    let value = read_payload::<O>(reader, tag, config, Depth::new(config.max_depth))?;
    Ok(NamedTag { name, value })
}
