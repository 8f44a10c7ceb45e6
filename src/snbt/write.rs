//! Rendering value trees back to SNBT.

use crate::{
    ArrayElement, Boolean, Compound, Config, List, NbtString, Number, Numeric, Quote, TypedArray,
    Value,
    value::{is_bare_key, write_quoted},
};

/// How much of the text form to spell out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Drop every optional suffix and quote.
    Minimal,
    /// Suffix every number and quote every string.
    Canonical,
    /// Follow each node's own `minimal` flag.
    #[default]
    Own,
}

impl Style {
    #[inline]
    fn minimal(self, own: bool) -> bool {
        match self {
            Style::Minimal => true,
            Style::Canonical => false,
            Style::Own => own,
        }
    }
}

/// Anything that can be written as SNBT.
///
/// ```
/// use na_snbt::{Config, List, ToSnbt, Value, Version};
///
/// let mut list = List::new();
/// list.add(Value::from(1i64), &Config::default()).unwrap();
/// list.add(Value::from(2i64), &Config::default()).unwrap();
///
/// let config = Config::default();
/// assert_eq!(list.render_canonical(&config), "[1L,2L]");
/// assert_eq!(list.render_minimal(&config), "[1,2]");
/// ```
pub trait ToSnbt {
    fn write_snbt(&self, out: &mut String, style: Style, config: &Config);

    fn render_minimal(&self, config: &Config) -> String {
        let mut out = String::new();
        self.write_snbt(&mut out, Style::Minimal, config);
        out
    }

    fn render_canonical(&self, config: &Config) -> String {
        let mut out = String::new();
        self.write_snbt(&mut out, Style::Canonical, config);
        out
    }

    fn to_snbt(&self, config: &Config) -> String {
        let mut out = String::new();
        self.write_snbt(&mut out, Style::Own, config);
        out
    }
}

impl<T: Numeric> ToSnbt for Number<T> {
    #[inline]
    fn write_snbt(&self, out: &mut String, style: Style, config: &Config) {
        Number::write_snbt(self, out, style.minimal(self.is_minimal()), config);
    }
}

impl ToSnbt for Boolean {
    #[inline]
    fn write_snbt(&self, out: &mut String, style: Style, config: &Config) {
        Boolean::write_snbt(self, out, style.minimal(self.is_minimal()), config);
    }
}

impl ToSnbt for NbtString {
    #[inline]
    fn write_snbt(&self, out: &mut String, style: Style, config: &Config) {
        NbtString::write_snbt(self, out, style.minimal(self.is_minimal()), config);
    }
}

impl ToSnbt for Compound {
    fn write_snbt(&self, out: &mut String, style: Style, config: &Config) {
        out.push('{');
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            if is_bare_key(key) {
                out.push_str(key);
            } else {
                write_quoted(out, key, Quote::Double, config);
            }
            out.push(':');
            value.write_snbt(out, style, config);
        }
        out.push('}');
    }
}

impl ToSnbt for List {
    fn write_snbt(&self, out: &mut String, style: Style, config: &Config) {
        out.push('[');
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            value.write_snbt(out, style, config);
        }
        out.push(']');
    }
}

impl<T: ArrayElement> ToSnbt for TypedArray<T> {
    /// Minimal arrays drop the element suffixes, which the header implies.
    /// Revisions without primitive arrays get a plain list of suffixed
    /// numbers.
    fn write_snbt(&self, out: &mut String, style: Style, config: &Config) {
        let header = config.version.primitive_arrays();
        let minimal = header && style.minimal(self.is_minimal());
        out.push('[');
        if let Some(token) = T::ARRAY_KIND.array_token().filter(|_| header) {
            out.push(token);
            out.push(';');
        }
        for (i, cell) in self.cells().enumerate() {
            if i > 0 {
                out.push(',');
            }
            if minimal {
                cell.get().write_digits(out, config);
            } else {
                cell.write_snbt(out, false, config);
            }
        }
        out.push(']');
    }
}

impl ToSnbt for Value {
    fn write_snbt(&self, out: &mut String, style: Style, config: &Config) {
        match self {
            Value::End => {}
            Value::Boolean(v) => ToSnbt::write_snbt(v, out, style, config),
            Value::Byte(v) => ToSnbt::write_snbt(v, out, style, config),
            Value::Short(v) => ToSnbt::write_snbt(v, out, style, config),
            Value::Int(v) => ToSnbt::write_snbt(v, out, style, config),
            Value::Long(v) => ToSnbt::write_snbt(v, out, style, config),
            Value::Float(v) => ToSnbt::write_snbt(v, out, style, config),
            Value::Double(v) => ToSnbt::write_snbt(v, out, style, config),
            Value::String(v) => ToSnbt::write_snbt(v, out, style, config),
            Value::List(v) => v.write_snbt(out, style, config),
            Value::Compound(v) => v.write_snbt(out, style, config),
            Value::ByteArray(v) => v.write_snbt(out, style, config),
            Value::IntArray(v) => v.write_snbt(out, style, config),
            Value::LongArray(v) => v.write_snbt(out, style, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LongArray, Version};

    #[test]
    fn test_canonical_suffixes() {
        let config = Config::default();
        let cases: [(Value, &str); 7] = [
            (Value::from(1i8), "1b"),
            (Value::from(2i16), "2s"),
            (Value::from(3i32), "3"),
            (Value::from(4i64), "4L"),
            (Value::from(5.0f32), "5.0f"),
            (Value::from(6.0f64), "6.0"),
            (Value::from(true), "true"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.render_canonical(&config), expected);
        }
    }

    #[test]
    fn test_minimal_long_keeps_suffix_out_of_int_range() {
        let config = Config::default();
        assert_eq!(Value::from(4i64).render_minimal(&config), "4");
        assert_eq!(Value::from(1i64 << 40).render_minimal(&config), "1099511627776L");
    }

    #[test]
    fn test_boolean_by_version() {
        let value = Value::from(false);
        assert_eq!(value.render_canonical(&Config::new(Version::V1_8)), "0b");
        assert_eq!(value.render_canonical(&Config::new(Version::V1_12)), "false");
        assert_eq!(value.render_minimal(&Config::new(Version::V1_12)), "0b");
    }

    #[test]
    fn test_long_array_header() {
        let array = LongArray::from(vec![1, -2]);
        let config = Config::default();
        assert_eq!(array.render_canonical(&config), "[L;1L,-2L]");
        assert_eq!(array.render_minimal(&config), "[L;1,-2]");
        assert_eq!(array.render_canonical(&Config::new(Version::V1_8)), "[1L,-2L]");
    }
}
