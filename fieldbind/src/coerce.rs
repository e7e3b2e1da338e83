//! String coercion into scalar field types.

use alloc::string::String;
use core::num::{IntErrorKind, ParseIntError};
use core::str::FromStr;

use fieldbind_core::{ScalarType, ScalarValue};

use crate::{BindErrorKind, RawValue};

/// Converts `raw` into a value of type `target`.
///
/// Only raw strings are accepted. Integers must fit the target width exactly
/// and floats must not overflow it; nothing is truncated.
pub fn coerce(raw: &RawValue, target: ScalarType) -> Result<ScalarValue, BindErrorKind> {
    let Some(input) = raw.as_str() else {
        return Err(BindErrorKind::TypeMismatch {
            expected: "string",
            found: raw.kind_name(),
        });
    };
    coerce_str(input, target)
}

/// Converts `input` into a value of type `target`.
pub fn coerce_str(input: &str, target: ScalarType) -> Result<ScalarValue, BindErrorKind> {
    if target.is_unsigned_integer() {
        reject_sign(input, target.name())?;
    }
    Ok(match target {
        ScalarType::String => ScalarValue::String(String::from(input)),
        ScalarType::Bool => ScalarValue::Bool(parse_bool(input, target)?),
        ScalarType::I8 => ScalarValue::I8(parse_int(input, target)?),
        ScalarType::I16 => ScalarValue::I16(parse_int(input, target)?),
        ScalarType::I32 => ScalarValue::I32(parse_int(input, target)?),
        ScalarType::I64 => ScalarValue::I64(parse_int(input, target)?),
        ScalarType::ISize => ScalarValue::ISize(parse_int(input, target)?),
        ScalarType::U8 => ScalarValue::U8(parse_int(input, target)?),
        ScalarType::U16 => ScalarValue::U16(parse_int(input, target)?),
        ScalarType::U32 => ScalarValue::U32(parse_int(input, target)?),
        ScalarType::U64 => ScalarValue::U64(parse_int(input, target)?),
        ScalarType::USize => ScalarValue::USize(parse_int(input, target)?),
        ScalarType::F32 => ScalarValue::F32(parse_float(input, target)?),
        ScalarType::F64 => ScalarValue::F64(parse_float(input, target)?),
    })
}

/// Parses a boolean token.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`.
pub(crate) fn parse_bool(input: &str, target: ScalarType) -> Result<bool, BindErrorKind> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(parse_error(input, target.name())),
    }
}

/// Unsigned literals carry no sign, while `u8::from_str` takes a leading `+`.
pub(crate) fn reject_sign(input: &str, target: &'static str) -> Result<(), BindErrorKind> {
    if input.starts_with('+') {
        return Err(parse_error(input, target));
    }
    Ok(())
}

fn parse_int<T>(input: &str, target: ScalarType) -> Result<T, BindErrorKind>
where
    T: FromStr<Err = ParseIntError>,
{
    input.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => BindErrorKind::OverflowError {
            target: target.name(),
            input: String::from(input),
        },
        _ => parse_error(input, target.name()),
    })
}

/// A float literal whose value does not fit the target rounds to infinity
/// when parsed; only an explicit infinity literal may do that.
pub(crate) fn parse_float<T>(input: &str, target: ScalarType) -> Result<T, BindErrorKind>
where
    T: FromStr + Float,
{
    let value = input
        .parse::<T>()
        .map_err(|_| parse_error(input, target.name()))?;
    if value.is_infinite() && !is_infinity_literal(input) {
        return Err(BindErrorKind::OverflowError {
            target: target.name(),
            input: String::from(input),
        });
    }
    Ok(value)
}

fn is_infinity_literal(input: &str) -> bool {
    let unsigned = input
        .strip_prefix(['+', '-'])
        .unwrap_or(input);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

pub(crate) fn parse_error(input: &str, target: &'static str) -> BindErrorKind {
    BindErrorKind::ParseError {
        target,
        input: String::from(input),
    }
}

pub(crate) trait Float: Copy {
    fn is_infinite(self) -> bool;
}

impl Float for f32 {
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
}

impl Float for f64 {
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
}
