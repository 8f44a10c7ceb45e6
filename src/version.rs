//! Format revisions and the configuration threaded through every operation.
//!
//! SNBT changed its grammar several times over the life of the game. Each
//! [`Version`] names one of those revisions, and every grammar or rendering
//! decision is a plain ordinal comparison against the version carried by a
//! [`Config`]. Nothing here is global: two parses with different versions can
//! run side by side.
//!
//! # Example
//!
//! ```
//! use na_snbt::{Config, Version};
//!
//! let config = Config::new(Version::V1_12);
//! assert!(config.version.primitive_arrays());
//! assert!(!config.version.single_quotes());
//! ```

use std::{fmt, str::FromStr};

/// A named format revision. Revisions are totally ordered by release.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Version {
    /// The legacy "wild-west" grammar: no primitive arrays, index-prefixed
    /// list entries, unquoted values containing structure characters.
    V1_8 = 0,
    /// Strict grammar with `[B;..]`, `[I;..]` and `[L;..]` arrays.
    V1_12 = 1,
    /// Single-quoted strings.
    V1_14 = 2,
    /// Unicode and short escapes, whitespace inside array headers.
    #[default]
    V1_21_5 = 3,
}

impl Version {
    pub const ALL: [Version; 4] = [Self::V1_8, Self::V1_12, Self::V1_14, Self::V1_21_5];

    pub const LATEST: Version = Self::V1_21_5;

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::V1_8 => "1.8",
            Self::V1_12 => "1.12",
            Self::V1_14 => "1.14",
            Self::V1_21_5 => "1.21.5",
        }
    }

    #[inline]
    pub const fn at_least(self, other: Version) -> bool {
        self.ordinal() >= other.ordinal()
    }

    #[inline]
    pub const fn at_most(self, other: Version) -> bool {
        self.ordinal() <= other.ordinal()
    }

    #[inline]
    pub const fn is_before(self, other: Version) -> bool {
        self.ordinal() < other.ordinal()
    }

    #[inline]
    pub const fn is_after(self, other: Version) -> bool {
        self.ordinal() > other.ordinal()
    }

    /// Legacy grammar, handled by a separate scanner.
    #[inline]
    pub const fn is_wild_west(self) -> bool {
        self.is_before(Self::V1_12)
    }

    #[inline]
    pub const fn primitive_arrays(self) -> bool {
        self.at_least(Self::V1_12)
    }

    #[inline]
    pub const fn single_quotes(self) -> bool {
        self.at_least(Self::V1_14)
    }

    /// `\uXXXX` and the short escapes, both when reading and when writing.
    #[inline]
    pub const fn unicode_escapes(self) -> bool {
        self.at_least(Self::V1_21_5)
    }

    #[inline]
    pub const fn trailing_commas(self) -> bool {
        self.at_least(Self::V1_12)
    }

    #[inline]
    pub const fn exponents(self) -> bool {
        !self.is_wild_west()
    }

    #[inline]
    pub const fn array_header_whitespace(self) -> bool {
        self.at_least(Self::V1_21_5)
    }

    /// Canonical booleans are `true`/`false` rather than `1b`/`0b`.
    #[inline]
    pub const fn boolean_literals(self) -> bool {
        self.at_least(Self::V1_12)
    }

    /// Binary tag 12 exists.
    #[inline]
    pub const fn long_array_tag(self) -> bool {
        self.primitive_arrays()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown format version: {0:?}")]
pub struct UnknownVersion(pub String);

impl FromStr for Version {
    type Err = UnknownVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::ALL
            .into_iter()
            .find(|version| version.name() == s.trim())
            .ok_or_else(|| UnknownVersion(s.to_owned()))
    }
}

/// Explicit parser, renderer and codec configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub version: Version,
    /// The `minimal` flag given to freshly parsed values.
    pub minimal: bool,
    /// Lists may convert their existing elements to the kind of a new element
    /// that cannot itself be converted.
    pub retroactive_adoption: bool,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Version::LATEST,
            minimal: false,
            retroactive_adoption: true,
            max_depth: 512,
        }
    }
}

impl Config {
    pub fn new(version: Version) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    pub fn with_retroactive_adoption(mut self, retroactive_adoption: bool) -> Self {
        self.retroactive_adoption = retroactive_adoption;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
