//! NBT value trees with a version-faithful SNBT parser and a binary codec.
//!
//! The text grammar changed several times across game revisions: single
//! quotes, primitive arrays, escape sequences, boolean literals and trailing
//! commas each arrived at a different point. Every parse and render call takes
//! a [`Config`] naming the [`Version`] to behave as, so text produced for an
//! old revision reads back the same way that revision would have read it.
//!
//! ```
//! use na_snbt::{Config, Kind, Version, parse_text};
//!
//! let latest = Config::default();
//! let value = parse_text("{Items:[{id:\"minecraft:stone\",Count:1b}]}", &latest).unwrap();
//! let items = value.as_compound().unwrap()["Items"].as_list().unwrap();
//! assert_eq!(items.element_kind(), Some(Kind::Compound));
//!
//! // single quotes only wrap strings from 1.14 on
//! assert_eq!(parse_text("'a'", &latest).unwrap().as_str(), Some("a"));
//! assert!(parse_text("'a'", &Config::new(Version::V1_12)).is_err());
//!
//! assert_eq!(value.render_minimal(&latest), r#"{Items:[{Count:1b,id:"minecraft:stone"}]}"#);
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NativeEndian;

mod binary;
mod error;
mod kind;
mod sequence;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod snbt;
mod tag;
mod util;
pub mod value;
mod version;

pub use binary::*;
pub use error::*;
pub use kind::*;
pub use sequence::*;
pub use snbt::*;
pub use tag::*;
pub use util::ByteOrder;
pub(crate) use util::cold_path;
pub use value::*;
pub use version::*;
