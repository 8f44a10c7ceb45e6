use std::fmt::{self, Write as _};

use crate::{Config, Kind, Value};

mod private {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A numeric payload as seen by the conversion lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

/// The payload types of the six numeric kinds.
pub trait Numeric:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display + private::Sealed + 'static
{
    const KIND: Kind;
    /// Suffix of the canonical form.
    const CANONICAL_SUFFIX: Option<char>;
    /// Suffix appended in minimal form when the cell forces it.
    const FORCED_SUFFIX: Option<char>;

    fn from_scalar(scalar: Scalar) -> Self;
    fn to_scalar(self) -> Scalar;
    fn wrap(number: Number<Self>) -> Value;
    fn unwrap(value: &Value) -> Option<&Number<Self>>;
    /// Writes the bare digits, without any suffix.
    fn write_digits(self, out: &mut String, config: &Config);
}

macro_rules! integer_numeric {
    ($($t:ty => $variant:ident, $wide:ty, $canonical:expr, $forced:expr);* $(;)?) => {
        $(
            impl Numeric for $t {
                const KIND: Kind = Kind::$variant;
                const CANONICAL_SUFFIX: Option<char> = $canonical;
                const FORCED_SUFFIX: Option<char> = $forced;

                #[inline]
                fn from_scalar(scalar: Scalar) -> Self {
                    match scalar {
                        Scalar::Int(v) => v as $t,
                        // floats saturate into int or long, then truncate
                        Scalar::Float(v) => (v as $wide) as $t,
                    }
                }

                #[inline]
                fn to_scalar(self) -> Scalar {
                    Scalar::Int(self as i64)
                }

                #[inline]
                fn wrap(number: Number<Self>) -> Value {
                    Value::$variant(number)
                }

                #[inline]
                fn unwrap(value: &Value) -> Option<&Number<Self>> {
                    match value {
                        Value::$variant(number) => Some(number),
                        _ => None,
                    }
                }

                fn write_digits(self, out: &mut String, _config: &Config) {
                    let _ = write!(out, "{self}");
                }
            }
        )*
    };
}

integer_numeric! {
    i8 => Byte, i32, Some('b'), Some('b');
    i16 => Short, i32, Some('s'), Some('s');
    i32 => Int, i32, None, None;
    i64 => Long, i64, Some('L'), Some('L');
}

macro_rules! float_numeric {
    ($($t:ty => $variant:ident, $canonical:expr, $forced:expr);* $(;)?) => {
        $(
            impl Numeric for $t {
                const KIND: Kind = Kind::$variant;
                const CANONICAL_SUFFIX: Option<char> = $canonical;
                const FORCED_SUFFIX: Option<char> = $forced;

                #[inline]
                fn from_scalar(scalar: Scalar) -> Self {
                    match scalar {
                        Scalar::Int(v) => v as $t,
                        Scalar::Float(v) => v as $t,
                    }
                }

                #[inline]
                fn to_scalar(self) -> Scalar {
                    Scalar::Float(self as f64)
                }

                #[inline]
                fn wrap(number: Number<Self>) -> Value {
                    Value::$variant(number)
                }

                #[inline]
                fn unwrap(value: &Value) -> Option<&Number<Self>> {
                    match value {
                        Value::$variant(number) => Some(number),
                        _ => None,
                    }
                }

                fn write_digits(self, out: &mut String, config: &Config) {
                    if self.is_nan() {
                        out.push_str("NaN");
                        return;
                    }
                    if self.is_infinite() {
                        out.push_str(if self > 0.0 { "Infinity" } else { "-Infinity" });
                        return;
                    }
                    let start = out.len();
                    let abs = self.abs();
                    if config.version.exponents() && abs != 0.0 && !(1e-3..1e7).contains(&abs) {
                        let _ = write!(out, "{self:e}");
                    } else {
                        let _ = write!(out, "{self}");
                    }
                    // keep the text a floating literal when re-parsed
                    if !out[start..].contains(['.', 'e']) {
                        out.push_str(".0");
                    }
                }
            }
        )*
    };
}

float_numeric! {
    f32 => Float, Some('f'), Some('f');
    f64 => Double, None, Some('d');
}

/// A numeric value cell.
///
/// Besides its payload a cell carries a local default, used only by
/// [`is_default`](Self::is_default), and the rendering flags.
#[derive(Clone, Copy, Debug)]
pub struct Number<T> {
    value: T,
    default: T,
    minimal: bool,
    force_suffix: bool,
}

impl<T: Numeric> Number<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            default: T::default(),
            minimal: false,
            force_suffix: false,
        }
    }

    pub fn with_default(mut self, default: T) -> Self {
        self.default = default;
        self
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    pub fn with_forced_suffix(mut self, force_suffix: bool) -> Self {
        self.force_suffix = force_suffix;
        self
    }

    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    #[inline]
    pub fn default_value(&self) -> T {
        self.default
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }

    #[inline]
    pub fn is_minimal(&self) -> bool {
        self.minimal
    }

    #[inline]
    pub fn set_minimal(&mut self, minimal: bool) {
        self.minimal = minimal;
    }

    #[inline]
    pub fn forces_suffix(&self) -> bool {
        self.force_suffix
    }

    #[inline]
    pub fn set_forced_suffix(&mut self, force_suffix: bool) {
        self.force_suffix = force_suffix;
    }

    pub(crate) fn write_snbt(&self, out: &mut String, minimal: bool, config: &Config) {
        self.value.write_digits(out, config);
        let suffix = if minimal {
            // a long beyond the int range would overflow without its suffix
            let needs_suffix = self.force_suffix
                || matches!(self.value.to_scalar(), Scalar::Int(v)
                    if T::KIND == Kind::Long && i32::try_from(v).is_err());
            needs_suffix.then_some(T::FORCED_SUFFIX).flatten()
        } else {
            T::CANONICAL_SUFFIX
        };
        if let Some(suffix) = suffix {
            out.push(suffix);
        }
    }
}

impl<T: Numeric> Default for Number<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Numeric> PartialEq for Number<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Numeric> From<T> for Number<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// A boolean cell: an 8-bit integer restricted to `0` and `1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Boolean {
    value: bool,
    default: bool,
    minimal: bool,
}

impl Boolean {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            default: false,
            minimal: false,
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.value
    }

    #[inline]
    pub fn set(&mut self, value: bool) {
        self.value = value;
    }

    /// The byte the boolean is stored as.
    #[inline]
    pub fn as_byte(&self) -> i8 {
        self.value as i8
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }

    #[inline]
    pub fn is_minimal(&self) -> bool {
        self.minimal
    }

    #[inline]
    pub fn set_minimal(&mut self, minimal: bool) {
        self.minimal = minimal;
    }

    pub(crate) fn write_snbt(&self, out: &mut String, minimal: bool, config: &Config) {
        out.push_str(match (self.value, !minimal && config.version.boolean_literals()) {
            (true, true) => "true",
            (false, true) => "false",
            (true, false) => "1b",
            (false, false) => "0b",
        });
    }
}

impl PartialEq for Boolean {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}
