use std::io::Write;

use zerocopy::{IntoBytes, byteorder};

use crate::{ByteOrder, Compound, Config, Error, Kind, List, Result, TagID, Value, cold_path};

/// The tag a value is written under, if the configured version has one.
pub(crate) fn tag_of(value: &Value, config: &Config) -> Result<TagID> {
    check_kind(value.kind(), config)?;
    Ok(value.tag_id())
}

fn check_kind(kind: Kind, config: &Config) -> Result<()> {
    if kind == Kind::LongArray && !config.version.long_array_tag() {
        cold_path();
        return Err(Error::UnsupportedType {
            kind,
            version: config.version,
        });
    }
    Ok(())
}

pub(crate) fn write_string<O: ByteOrder>(writer: &mut impl Write, text: &str) -> Result<()> {
    let bytes = simd_cesu8::mutf8::encode(text);
    let len = u16::try_from(bytes.len()).map_err(|_| Error::StringTooLong(bytes.len()))?;
    writer.write_all(&byteorder::U16::<O>::new(len).to_bytes())?;
    writer.write_all(&bytes)?;
    Ok(())
}

fn write_length<O: ByteOrder>(writer: &mut impl Write, len: usize) -> Result<()> {
    let len = i32::try_from(len).map_err(|_| Error::ListTooLong(len))?;
    writer.write_all(&byteorder::I32::<O>::new(len).to_bytes())?;
    Ok(())
}

pub(crate) fn write_named<O: ByteOrder>(
    writer: &mut impl Write,
    name: &str,
    value: &Value,
    config: &Config,
) -> Result<()> {
    let tag = tag_of(value, config)?;
    writer.write_all(&[tag.to_u8()])?;
    if tag == TagID::End {
        return Ok(());
    }
    write_string::<O>(writer, name)?;
    write_payload::<O>(writer, value, config)
}

pub(crate) fn write_payload<O: ByteOrder>(
    writer: &mut impl Write,
    value: &Value,
    config: &Config,
) -> Result<()> {
    match value {
        Value::End => {}
        Value::Boolean(v) => writer.write_all(&[v.as_byte() as u8])?,
        Value::Byte(v) => writer.write_all(&[v.get() as u8])?,
        Value::Short(v) => writer.write_all(&byteorder::I16::<O>::new(v.get()).to_bytes())?,
        Value::Int(v) => writer.write_all(&byteorder::I32::<O>::new(v.get()).to_bytes())?,
        Value::Long(v) => writer.write_all(&byteorder::I64::<O>::new(v.get()).to_bytes())?,
        Value::Float(v) => writer.write_all(&byteorder::F32::<O>::new(v.get()).to_bytes())?,
        Value::Double(v) => writer.write_all(&byteorder::F64::<O>::new(v.get()).to_bytes())?,
        Value::String(v) => write_string::<O>(writer, v.as_str())?,
        Value::List(v) => write_list::<O>(writer, v, config)?,
        Value::Compound(v) => write_compound::<O>(writer, v, config)?,
        Value::ByteArray(v) => {
            write_length::<O>(writer, v.len())?;
            writer.write_all(v.as_slice().as_bytes())?;
        }
        Value::IntArray(v) => {
            write_length::<O>(writer, v.len())?;
            let values: Vec<byteorder::I32<O>> =
                v.iter().map(|&x| byteorder::I32::<O>::new(x)).collect();
            writer.write_all(values.as_bytes())?;
        }
        Value::LongArray(v) => {
            check_kind(Kind::LongArray, config)?;
            write_length::<O>(writer, v.len())?;
            let values: Vec<byteorder::I64<O>> =
                v.iter().map(|&x| byteorder::I64::<O>::new(x)).collect();
            writer.write_all(values.as_bytes())?;
        }
    }
    Ok(())
}

fn write_list<O: ByteOrder>(writer: &mut impl Write, list: &List, config: &Config) -> Result<()> {
    let tag = match list.element_kind() {
        Some(kind) => {
            check_kind(kind, config)?;
            kind.tag_id()
        }
        None => TagID::End,
    };
    writer.write_all(&[tag.to_u8()])?;
    write_length::<O>(writer, list.len())?;
    for element in list {
        write_payload::<O>(writer, element, config)?;
    }
    Ok(())
}

fn write_compound<O: ByteOrder>(
    writer: &mut impl Write,
    compound: &Compound,
    config: &Config,
) -> Result<()> {
    for (name, value) in compound {
        let tag = tag_of(value, config)?;
        if tag == TagID::End {
            // an end tag here would close the compound early
            cold_path();
            return Err(Error::UnsupportedType {
                kind: Kind::End,
                version: config.version,
            });
        }
        writer.write_all(&[tag.to_u8()])?;
        write_string::<O>(writer, name)?;
        write_payload::<O>(writer, value, config)?;
    }
    writer.write_all(&[TagID::End.to_u8()])?;
    Ok(())
}
