//! Numeric literal lexing.
//!
//! A literal is scanned in one forward pass (sign, integer digits, fraction,
//! exponent, suffix) and only then evaluated, so callers can tell "this is not
//! a number" (rewind and read a string) apart from "this is a number that does
//! not fit" (a hard [`NumericOverflow`](crate::ParseErrorKind::NumericOverflow)).

use crate::{
    Cursor, Kind, Number, Numeric, Scalar, Sequence, Value, Version,
    snbt::string::is_unwrapped_char,
};

/// A scanned, not yet evaluated, numeric literal.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Literal<'a> {
    /// Absolute offset of the first character (the sign, if any).
    pub(crate) start: usize,
    negative: bool,
    /// The numeric part, without the suffix.
    text: Sequence<'a>,
    /// Integer digits, without the sign.
    digits: Sequence<'a>,
    fraction: bool,
    exponent: bool,
    suffix: Option<Kind>,
}

/// The literal could be scanned but its value does not fit its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Overflow(pub(crate) Kind);

fn suffix_kind(c: char) -> Option<Kind> {
    match c {
        'b' | 'B' => Some(Kind::Byte),
        's' | 'S' => Some(Kind::Short),
        'l' | 'L' => Some(Kind::Long),
        'f' | 'F' => Some(Kind::Float),
        'd' | 'D' => Some(Kind::Double),
        _ => None,
    }
}

/// Scans a numeric literal at the cursor.
///
/// Returns `None`, with the cursor untouched, when the text there is not a
/// complete literal: no digits, a dangling exponent, an integer suffix on a
/// fractional value, or an unwrapped-string character right after it.
pub(crate) fn scan<'a>(cursor: &mut Cursor<'a>, version: Version) -> Option<Literal<'a>> {
    cursor.attempt(|cursor| {
        let start = cursor.abs_pos();
        let negative = cursor.eat_if(|c| c == '+' || c == '-') == Some('-');
        let digits = cursor.eat_while(|c| c.is_ascii_digit());
        let fraction = cursor.eat('.');
        let fraction_digits = if fraction {
            cursor.eat_while(|c| c.is_ascii_digit()).len()
        } else {
            0
        };
        if digits.is_empty() && fraction_digits == 0 {
            return None;
        }

        let exponent = matches!(cursor.peek(), Some('e' | 'E'));
        if exponent {
            if !version.exponents() {
                return None;
            }
            cursor.next();
            cursor.eat_if(|c| c == '+' || c == '-');
            if cursor.eat_while(|c| c.is_ascii_digit()).is_empty() {
                return None;
            }
        }

        let text = cursor.since(start);
        let suffix = match cursor.peek().and_then(suffix_kind) {
            Some(kind) => {
                cursor.next();
                Some(kind)
            }
            None => None,
        };
        if suffix.is_some_and(Kind::is_integer) && (fraction || exponent) {
            return None;
        }
        if cursor.peek().is_some_and(is_unwrapped_char) {
            return None;
        }

        Some(Literal {
            start,
            negative,
            text,
            digits,
            fraction,
            exponent,
            suffix,
        })
    })
}

impl Literal<'_> {
    /// The kind the literal evaluates to. `implicit` is used for plain
    /// integers; it is `Int` except inside typed arrays.
    pub(crate) fn kind(&self, implicit: Kind) -> Kind {
        match self.suffix {
            Some(kind) => kind,
            None if self.fraction || self.exponent => Kind::Double,
            None => implicit,
        }
    }

    #[inline]
    pub(crate) fn has_suffix(&self) -> bool {
        self.suffix.is_some()
    }

    pub(crate) fn evaluate(&self, implicit: Kind) -> Result<(Kind, Scalar), Overflow> {
        let kind = self.kind(implicit);
        if kind.is_float() {
            let value = if kind == Kind::Float {
                self.text.as_str().parse::<f32>().map(f64::from)
            } else {
                self.text.as_str().parse::<f64>()
            };
            return match value {
                Ok(value) if value.is_finite() => Ok((kind, Scalar::Float(value))),
                _ => Err(Overflow(kind)),
            };
        }
        parse_integer(self.digits.as_str(), self.negative, kind)
            .map(|value| (kind, Scalar::Int(value)))
            .ok_or(Overflow(kind))
    }
}

/// Accumulates negatively so the most negative value of each kind is
/// representable, failing as soon as the magnitude leaves the kind's range.
fn parse_integer(digits: &str, negative: bool, kind: Kind) -> Option<i64> {
    let (min, max) = kind.integer_bounds()?;
    let limit = if negative { min } else { -max };
    let multmin = limit / 10;
    let mut result = 0i64;
    for b in digits.bytes() {
        let digit = (b - b'0') as i64;
        if result < multmin {
            return None;
        }
        result *= 10;
        if result < limit + digit {
            return None;
        }
        result -= digit;
    }
    Some(if negative { result } else { -result })
}

/// Builds the value cell for an evaluated literal. A literal written with a
/// suffix keeps it in minimal output.
pub(crate) fn cell(kind: Kind, scalar: Scalar, minimal: bool, suffixed: bool) -> Value {
    fn wrap<T: Numeric>(scalar: Scalar, minimal: bool, suffixed: bool) -> Value {
        T::wrap(
            Number::new(T::from_scalar(scalar))
                .with_minimal(minimal)
                .with_forced_suffix(suffixed),
        )
    }

    match kind {
        Kind::Byte => wrap::<i8>(scalar, minimal, suffixed),
        Kind::Short => wrap::<i16>(scalar, minimal, suffixed),
        Kind::Long => wrap::<i64>(scalar, minimal, suffixed),
        Kind::Float => wrap::<f32>(scalar, minimal, suffixed),
        Kind::Double => wrap::<f64>(scalar, minimal, suffixed),
        _ => wrap::<i32>(scalar, minimal, suffixed),
    }
}

/// Whether the whole of `text` is one numeric literal, in range or not.
pub(crate) fn lexes_as_number(text: Sequence<'_>, version: Version) -> bool {
    let mut cursor = text.cursor();
    scan(&mut cursor, version).is_some() && cursor.is_at_end()
}

/// Evaluates `text` when the whole of it is one in-range literal.
pub(crate) fn parse_exact(text: Sequence<'_>, implicit: Kind, version: Version) -> Option<Scalar> {
    let mut cursor = text.cursor();
    let literal = scan(&mut cursor, version)?;
    if !cursor.is_at_end() {
        return None;
    }
    literal.evaluate(implicit).ok().map(|(_, scalar)| scalar)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str, version: Version) -> Option<Result<(Kind, Scalar), Overflow>> {
        let mut cursor = Sequence::new(text).cursor();
        let literal = scan(&mut cursor, version)?;
        assert!(cursor.is_at_end(), "{text} not fully scanned");
        Some(literal.evaluate(Kind::Int))
    }

    #[test]
    fn test_integer_kinds() {
        let v = Version::LATEST;
        assert_eq!(eval("12", v), Some(Ok((Kind::Int, Scalar::Int(12)))));
        assert_eq!(eval("-12b", v), Some(Ok((Kind::Byte, Scalar::Int(-12)))));
        assert_eq!(eval("+7S", v), Some(Ok((Kind::Short, Scalar::Int(7)))));
        assert_eq!(eval("7l", v), Some(Ok((Kind::Long, Scalar::Int(7)))));
    }

    #[test]
    fn test_float_kinds() {
        let v = Version::LATEST;
        assert_eq!(eval("1.5", v), Some(Ok((Kind::Double, Scalar::Float(1.5)))));
        assert_eq!(eval(".5f", v), Some(Ok((Kind::Float, Scalar::Float(0.5)))));
        assert_eq!(eval("2d", v), Some(Ok((Kind::Double, Scalar::Float(2.0)))));
        assert_eq!(eval("1e3", v), Some(Ok((Kind::Double, Scalar::Float(1000.0)))));
        assert_eq!(eval("-1.5E-1", v), Some(Ok((Kind::Double, Scalar::Float(-0.15)))));
    }

    #[test]
    fn test_minimum_values() {
        let v = Version::LATEST;
        assert_eq!(eval("-128b", v), Some(Ok((Kind::Byte, Scalar::Int(-128)))));
        assert_eq!(eval("-32768s", v), Some(Ok((Kind::Short, Scalar::Int(-32768)))));
        assert_eq!(
            eval("-2147483648", v),
            Some(Ok((Kind::Int, Scalar::Int(i32::MIN as i64))))
        );
        assert_eq!(
            eval("-9223372036854775808L", v),
            Some(Ok((Kind::Long, Scalar::Int(i64::MIN))))
        );
    }

    #[test]
    fn test_overflow() {
        let v = Version::LATEST;
        assert_eq!(eval("128b", v), Some(Err(Overflow(Kind::Byte))));
        assert_eq!(eval("-1280b", v), Some(Err(Overflow(Kind::Byte))));
        assert_eq!(eval("2147483648", v), Some(Err(Overflow(Kind::Int))));
        assert_eq!(
            eval("-92233720368547758080L", v),
            Some(Err(Overflow(Kind::Long)))
        );
        assert_eq!(eval("1e39f", v), Some(Err(Overflow(Kind::Float))));
    }

    #[test]
    fn test_not_a_number() {
        let v = Version::LATEST;
        for text in ["+", "-", ".", "-.", "1a", "1.5b", "1e", "1e+", "12bx", "1.2.3"] {
            let mut cursor = Sequence::new(text).cursor();
            assert!(scan(&mut cursor, v).is_none(), "{text}");
            assert_eq!(cursor.offset(), 0);
        }
    }

    #[test]
    fn test_exponent_is_legacy_string() {
        assert!(lexes_as_number(Sequence::new("1e5"), Version::V1_12));
        assert!(!lexes_as_number(Sequence::new("1e5"), Version::V1_8));
    }

    #[test]
    fn test_scan_stops_at_structure() {
        let mut cursor = Sequence::new("42,1]").cursor();
        let literal = scan(&mut cursor, Version::LATEST).unwrap();
        assert_eq!(literal.evaluate(Kind::Int), Ok((Kind::Int, Scalar::Int(42))));
        assert_eq!(cursor.peek(), Some(','));
    }

    #[test]
    fn test_implicit_kind() {
        let mut cursor = Sequence::new("3000000000").cursor();
        let literal = scan(&mut cursor, Version::LATEST).unwrap();
        assert_eq!(literal.evaluate(Kind::Int), Err(Overflow(Kind::Int)));
        assert_eq!(
            literal.evaluate(Kind::Long),
            Ok((Kind::Long, Scalar::Int(3_000_000_000)))
        );
    }

    #[test]
    fn test_parse_exact() {
        let v = Version::LATEST;
        assert_eq!(parse_exact(Sequence::new("40"), Kind::Long, v), Some(Scalar::Int(40)));
        assert_eq!(parse_exact(Sequence::new("40 "), Kind::Long, v), None);
        assert_eq!(parse_exact(Sequence::new("x"), Kind::Long, v), None);
    }
}
