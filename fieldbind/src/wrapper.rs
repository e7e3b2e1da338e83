//! Building well-known wrapper records straight from raw input.

use alloc::string::String;

use fieldbind_core::{
    BoolValue, BytesValue, DoubleValue, FloatValue, Int32Value, Int64Value, ScalarType,
    StringValue, UInt32Value, UInt64Value, Wrapper, WrapperKind,
};

use crate::coerce::{parse_bool, parse_error, parse_float, reject_sign};
use crate::{BindErrorKind, RawValue};

/// Builds a fresh wrapper record of `kind` from `raw`.
///
/// Unlike [`coerce`](crate::coerce), this path has no separate overflow
/// error: integers that do not fit the stated width and finite float
/// literals beyond its range are both parse errors.
pub fn build_wrapper(kind: WrapperKind, raw: &RawValue) -> Result<Wrapper, BindErrorKind> {
    let Some(input) = raw.as_str() else {
        return Err(BindErrorKind::TypeMismatch {
            expected: "string",
            found: raw.kind_name(),
        });
    };

    let target = kind.type_name();
    let wrapper = match kind {
        WrapperKind::Double => Wrapper::Double(DoubleValue::new(
            parse_float(input, ScalarType::F64).map_err(|_| parse_error(input, target))?,
        )),
        WrapperKind::Float => Wrapper::Float(FloatValue::new(
            parse_float(input, ScalarType::F32).map_err(|_| parse_error(input, target))?,
        )),
        WrapperKind::Int32 => Wrapper::Int32(Int32Value::new(
            input.parse().map_err(|_| parse_error(input, target))?,
        )),
        WrapperKind::Int64 => Wrapper::Int64(Int64Value::new(
            input.parse().map_err(|_| parse_error(input, target))?,
        )),
        WrapperKind::UInt32 => {
            reject_sign(input, target)?;
            Wrapper::UInt32(UInt32Value::new(
                input.parse().map_err(|_| parse_error(input, target))?,
            ))
        }
        WrapperKind::UInt64 => {
            reject_sign(input, target)?;
            Wrapper::UInt64(UInt64Value::new(
                input.parse().map_err(|_| parse_error(input, target))?,
            ))
        }
        WrapperKind::Bool => Wrapper::Bool(BoolValue::new(
            parse_bool(input, ScalarType::Bool).map_err(|_| parse_error(input, target))?,
        )),
        WrapperKind::String => Wrapper::String(StringValue::new(String::from(input))),
        WrapperKind::Bytes => Wrapper::Bytes(BytesValue::new(input.as_bytes().to_vec())),
    };
    Ok(wrapper)
}

/// Like [`build_wrapper`], with the kind given by its well-known type name
/// (`"UInt32Value"` or `"google.protobuf.UInt32Value"`).
pub fn build_wrapper_named(tag: &str, raw: &RawValue) -> Result<Wrapper, BindErrorKind> {
    let kind = tag
        .parse::<WrapperKind>()
        .map_err(|unknown| BindErrorKind::NotAWrapper { tag: unknown.tag })?;
    build_wrapper(kind, raw)
}
