//! Scalars, enums and null.
//!
//! - numbers and booleans: canonical lowercase text, `true`, `-12`, `1.5`,
//!   `nan`, `inf`;
//! - `char`: `'c'`, `String`: `"text"`, both escaped;
//! - enums: the quoted variant name. A bare integer is read as a
//!   discriminant, so data written as integers still loads;
//! - null: `null`, or blank text.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::Write;

use mithril_reflect::Reflect;
use mithril_reflect::info::{EnumInfo, ScalarInfo, ScalarKind};
use mithril_reflect::ops::{Enum, ScalarRef};

use crate::DecodeError;
use crate::escape::{self, EscapeError};

// -----------------------------------------------------------------------------
// Null

/// The null literal.
pub const NULL: &str = "null";

/// Returns `true` for `null` and for blank text.
#[inline]
pub fn is_null(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text == NULL
}

// -----------------------------------------------------------------------------
// Encode

macro_rules! write_float {
    ($out:ident, $v:ident) => {
        if $v.is_nan() {
            $out.push_str("nan");
        } else if $v.is_infinite() {
            $out.push_str(if $v > 0.0 { "inf" } else { "-inf" });
        } else {
            let _ = write!($out, "{}", $v);
        }
    };
}

/// Appends the canonical text of a scalar.
pub fn encode_scalar(out: &mut String, scalar: ScalarRef<'_>) {
    // Writing into a `String` cannot fail.
    let _ = match scalar {
        ScalarRef::Bool(v) => write!(out, "{v}"),
        ScalarRef::I8(v) => write!(out, "{v}"),
        ScalarRef::I16(v) => write!(out, "{v}"),
        ScalarRef::I32(v) => write!(out, "{v}"),
        ScalarRef::I64(v) => write!(out, "{v}"),
        ScalarRef::I128(v) => write!(out, "{v}"),
        ScalarRef::Isize(v) => write!(out, "{v}"),
        ScalarRef::U8(v) => write!(out, "{v}"),
        ScalarRef::U16(v) => write!(out, "{v}"),
        ScalarRef::U32(v) => write!(out, "{v}"),
        ScalarRef::U64(v) => write!(out, "{v}"),
        ScalarRef::U128(v) => write!(out, "{v}"),
        ScalarRef::Usize(v) => write!(out, "{v}"),
        ScalarRef::F32(v) => {
            write_float!(out, v);
            Ok(())
        }
        ScalarRef::F64(v) => {
            write_float!(out, v);
            Ok(())
        }
        ScalarRef::Char(c) => {
            escape::write_quoted_char(out, c);
            Ok(())
        }
        ScalarRef::Str(s) => {
            escape::write_quoted_str(out, s);
            Ok(())
        }
    };
}

/// Appends the quoted variant name of an enum value.
#[inline]
pub fn encode_enum(out: &mut String, value: &dyn Enum) {
    escape::write_quoted_str(out, value.variant_name());
}

// -----------------------------------------------------------------------------
// Decode

fn parse<T>(text: &str, info: &ScalarInfo) -> Result<Box<dyn Reflect>, DecodeError>
where
    T: core::str::FromStr + Reflect,
    T::Err: core::fmt::Display,
{
    match text.parse::<T>() {
        Ok(value) => Ok(Box::new(value)),
        Err(err) => Err(DecodeError::format(text, info.type_path(), err)),
    }
}

fn decode_char(text: &str) -> Result<char, EscapeError> {
    let body = escape::unescape(escape::unquote(text, '\'')?, '\'')?;
    let mut chars = body.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(EscapeError::Unquoted('\'')),
    }
}

/// Decodes the text of a scalar.
///
/// The text must be trimmed and not null.
pub fn decode_scalar(text: &str, info: &ScalarInfo) -> Result<Box<dyn Reflect>, DecodeError> {
    match info.scalar_kind() {
        ScalarKind::Bool => parse::<bool>(text, info),
        ScalarKind::I8 => parse::<i8>(text, info),
        ScalarKind::I16 => parse::<i16>(text, info),
        ScalarKind::I32 => parse::<i32>(text, info),
        ScalarKind::I64 => parse::<i64>(text, info),
        ScalarKind::I128 => parse::<i128>(text, info),
        ScalarKind::Isize => parse::<isize>(text, info),
        ScalarKind::U8 => parse::<u8>(text, info),
        ScalarKind::U16 => parse::<u16>(text, info),
        ScalarKind::U32 => parse::<u32>(text, info),
        ScalarKind::U64 => parse::<u64>(text, info),
        ScalarKind::U128 => parse::<u128>(text, info),
        ScalarKind::Usize => parse::<usize>(text, info),
        ScalarKind::F32 => parse::<f32>(text, info),
        ScalarKind::F64 => parse::<f64>(text, info),
        ScalarKind::Char => match decode_char(text) {
            Ok(c) => Ok(Box::new(c)),
            Err(EscapeError::Unquoted(_)) => Err(DecodeError::format(
                text,
                info.type_path(),
                "expected exactly one character in single quotes",
            )),
            Err(err) => Err(DecodeError::format(text, info.type_path(), err)),
        },
        ScalarKind::String => match escape::decode_str(text) {
            Ok(s) => Ok(Box::new(s)),
            Err(err) => Err(DecodeError::format(text, info.type_path(), err)),
        },
    }
}

/// Decodes an enum value by quoted variant name or by bare discriminant.
pub fn decode_enum(text: &str, info: &EnumInfo) -> Result<Box<dyn Reflect>, DecodeError> {
    let unknown = || DecodeError::UnknownVariant {
        text: text.into(),
        type_path: info.type_path().into(),
    };

    let index = if text.starts_with('"') {
        let name = escape::decode_str(text)
            .map_err(|err| DecodeError::format(text, info.type_path(), err))?;
        info.index_of(&name)
    } else {
        let discriminant = text
            .parse::<i64>()
            .map_err(|err| DecodeError::format(text, info.type_path(), err))?;
        info.index_of_discriminant(discriminant)
    };

    index.and_then(|i| info.construct(i)).ok_or_else(unknown)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use mithril_reflect::info::Typed;
    use mithril_reflect::ops::ScalarRef;

    use super::{decode_scalar, encode_scalar, is_null};
    use crate::DecodeError;

    fn encoded(scalar: ScalarRef<'_>) -> String {
        let mut out = String::new();
        encode_scalar(&mut out, scalar);
        out
    }

    #[test]
    fn canonical_text() {
        assert_eq!(encoded(ScalarRef::I32(7)), "7");
        assert_eq!(encoded(ScalarRef::I64(-12)), "-12");
        assert_eq!(encoded(ScalarRef::Bool(true)), "true");
        assert_eq!(encoded(ScalarRef::F32(1.5)), "1.5");
        assert_eq!(encoded(ScalarRef::F64(f64::NAN)), "nan");
        assert_eq!(encoded(ScalarRef::F64(f64::NEG_INFINITY)), "-inf");
        assert_eq!(encoded(ScalarRef::Char('\n')), r"'\n'");
        assert_eq!(encoded(ScalarRef::Str("He said \"hi\"")), r#""He said \"hi\"""#);
    }

    #[test]
    fn parse_by_kind() {
        let info = u8::type_info().as_scalar().unwrap();
        let value = decode_scalar("200", info).unwrap();
        assert_eq!(value.take::<u8>().unwrap(), 200);

        let err = decode_scalar("300", info).unwrap_err();
        assert!(matches!(err, DecodeError::Format { ref type_path, .. } if type_path == "u8"));

        let info = f32::type_info().as_scalar().unwrap();
        let value = decode_scalar("inf", info).unwrap();
        assert_eq!(value.take::<f32>().unwrap(), f32::INFINITY);
        let value = decode_scalar("nan", info).unwrap();
        assert!(value.take::<f32>().unwrap().is_nan());
    }

    #[test]
    fn char_literals() {
        let info = char::type_info().as_scalar().unwrap();
        assert_eq!(decode_scalar(r"'\''", info).unwrap().take::<char>().unwrap(), '\'');
        assert_eq!(decode_scalar("'x'", info).unwrap().take::<char>().unwrap(), 'x');
        assert!(decode_scalar("'xy'", info).is_err());
        assert!(decode_scalar("''", info).is_err());
        assert!(decode_scalar("x", info).is_err());
    }

    #[test]
    fn null_forms() {
        assert!(is_null("null"));
        assert!(is_null("  "));
        assert!(is_null(""));
        assert!(!is_null("\"null\""));
    }
}
