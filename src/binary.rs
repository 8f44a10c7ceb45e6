//! The binary tag encoding.
//!
//! Every entry point is generic over the byte order: Java Edition data is
//! [`BigEndian`](crate::BigEndian), Bedrock Edition files are
//! [`LittleEndian`](crate::LittleEndian). Strings are Modified UTF-8 on the
//! wire. Compressed files must be inflated by the caller.
//!
//! ```
//! use na_snbt::{BigEndian, Config, Value, parse_text, read_from_slice};
//!
//! let config = Config::default();
//! let value = parse_text("{name:'Steve',xp:[L;1,2]}", &config).unwrap();
//! let bytes = value.write_to_vec::<BigEndian>("player", &config).unwrap();
//!
//! let tag = read_from_slice::<BigEndian>(&bytes, &config).unwrap();
//! assert_eq!(tag.name, "player");
//! assert_eq!(tag.value, value);
//! ```

mod read;
mod write;

use std::io::{Read, Write};

use crate::{ByteOrder, Compound, Config, Error, NamedTag, Result, TagID, Value, util::Depth};

/// Reads one named root tag from `reader`.
pub fn read_from_reader<O: ByteOrder>(mut reader: impl Read, config: &Config) -> Result<NamedTag> {
    tracing::trace!("reading a binary tag under {}.", config.version);
    read::read_named::<O>(&mut reader, config).inspect_err(|err| {
        tracing::debug!("binary decode failed: {err}");
    })
}

/// Reads one named root tag that must span the whole of `source`.
pub fn read_from_slice<O: ByteOrder>(source: &[u8], config: &Config) -> Result<NamedTag> {
    let mut rest = source;
    let tag = read_from_reader::<O>(&mut rest, config)?;
    if !rest.is_empty() {
        tracing::debug!("{} bytes left after the root tag.", rest.len());
        return Err(Error::TrailingData(rest.len()));
    }
    Ok(tag)
}

/// Reads a root tag that must be a compound, as in every file format built
/// on this encoding.
pub fn read_root<O: ByteOrder>(mut reader: impl Read, config: &Config) -> Result<(String, Compound)> {
    let mut tag = [0u8; 1];
    reader.read_exact(&mut tag)?;
    if tag[0] != TagID::Compound.to_u8() {
        tracing::debug!("root tag {:#04x} is not a compound.", tag[0]);
        return Err(Error::NotCompound(tag[0]));
    }
    let name = read::read_string::<O>(&mut reader)?;
    let compound = read::read_compound::<O>(&mut reader, config, Depth::new(config.max_depth))?;
    Ok((name, compound))
}

/// Reads one named root tag from a [`bytes::Buf`].
#[cfg(feature = "bytes")]
pub fn read_from_buf<O: ByteOrder>(buf: impl bytes::Buf, config: &Config) -> Result<NamedTag> {
    read_from_reader::<O>(bytes::Buf::reader(buf), config)
}

impl Value {
    /// Writes `[tag][name][payload]`. An [`End`](Value::End) value is a
    /// single zero byte.
    pub fn write_to_writer<O: ByteOrder>(
        &self,
        name: &str,
        mut writer: impl Write,
        config: &Config,
    ) -> Result<()> {
        tracing::trace!("writing a binary {} under {}.", self.kind(), config.version);
        write::write_named::<O>(&mut writer, name, self, config).inspect_err(|err| {
            tracing::debug!("binary encode failed: {err}");
        })
    }

    pub fn write_to_vec<O: ByteOrder>(&self, name: &str, config: &Config) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to_writer::<O>(name, &mut buf, config)?;
        Ok(buf)
    }

    /// Writes the payload alone, without the tag byte and name.
    pub fn write_payload<O: ByteOrder>(&self, mut writer: impl Write, config: &Config) -> Result<()> {
        write::tag_of(self, config)?;
        write::write_payload::<O>(&mut writer, self, config)
    }

    #[cfg(feature = "bytes")]
    pub fn write_to_buf<O: ByteOrder>(
        &self,
        name: &str,
        buf: impl bytes::BufMut,
        config: &Config,
    ) -> Result<()> {
        self.write_to_writer::<O>(name, bytes::BufMut::writer(buf), config)
    }
}

impl NamedTag {
    pub fn write_to_writer<O: ByteOrder>(&self, writer: impl Write, config: &Config) -> Result<()> {
        self.value.write_to_writer::<O>(&self.name, writer, config)
    }

    pub fn write_to_vec<O: ByteOrder>(&self, config: &Config) -> Result<Vec<u8>> {
        self.value.write_to_vec::<O>(&self.name, config)
    }
}
