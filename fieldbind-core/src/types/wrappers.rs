//! The well-known wrapper records: boxed optional scalars, one per kind.
//!
//! These mirror the protobuf `google.protobuf.*Value` messages. A record field
//! of type `Option<UInt32Value>` is bound straight from a string, without
//! going through generic optional-scalar coercion.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// Which scalar a wrapper record boxes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum WrapperKind {
    /// [`DoubleValue`], an `f64`.
    Double,
    /// [`FloatValue`], an `f32`.
    Float,
    /// [`Int32Value`], an `i32`.
    Int32,
    /// [`Int64Value`], an `i64`.
    Int64,
    /// [`UInt32Value`], a `u32`.
    UInt32,
    /// [`UInt64Value`], a `u64`.
    UInt64,
    /// [`BoolValue`], a `bool`.
    Bool,
    /// [`StringValue`], a `String`.
    String,
    /// [`BytesValue`], a `Vec<u8>`.
    Bytes,
}

impl WrapperKind {
    /// Every kind, in declaration order.
    pub const ALL: [WrapperKind; 9] = [
        WrapperKind::Double,
        WrapperKind::Float,
        WrapperKind::Int32,
        WrapperKind::Int64,
        WrapperKind::UInt32,
        WrapperKind::UInt64,
        WrapperKind::Bool,
        WrapperKind::String,
        WrapperKind::Bytes,
    ];

    /// The well-known type name, e.g. `"UInt32Value"`.
    pub const fn type_name(self) -> &'static str {
        match self {
            WrapperKind::Double => "DoubleValue",
            WrapperKind::Float => "FloatValue",
            WrapperKind::Int32 => "Int32Value",
            WrapperKind::Int64 => "Int64Value",
            WrapperKind::UInt32 => "UInt32Value",
            WrapperKind::UInt64 => "UInt64Value",
            WrapperKind::Bool => "BoolValue",
            WrapperKind::String => "StringValue",
            WrapperKind::Bytes => "BytesValue",
        }
    }
}

impl fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A tag that names no wrapper type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWrapper {
    /// The tag as given.
    pub tag: String,
}

impl fmt::Display for UnknownWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown wrapper type `{}`", self.tag)
    }
}

impl core::error::Error for UnknownWrapper {}

impl FromStr for WrapperKind {
    type Err = UnknownWrapper;

    /// Accepts `"Int64Value"` as well as `"google.protobuf.Int64Value"`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let name = tag.strip_prefix("google.protobuf.").unwrap_or(tag);
        WrapperKind::ALL
            .into_iter()
            .find(|kind| kind.type_name() == name)
            .ok_or_else(|| UnknownWrapper {
                tag: String::from(tag),
            })
    }
}

/// One wrapper record of any kind.
#[derive(Clone, PartialEq, Debug)]
pub enum Wrapper {
    /// A [`DoubleValue`].
    Double(DoubleValue),
    /// A [`FloatValue`].
    Float(FloatValue),
    /// An [`Int32Value`].
    Int32(Int32Value),
    /// An [`Int64Value`].
    Int64(Int64Value),
    /// A [`UInt32Value`].
    UInt32(UInt32Value),
    /// A [`UInt64Value`].
    UInt64(UInt64Value),
    /// A [`BoolValue`].
    Bool(BoolValue),
    /// A [`StringValue`].
    String(StringValue),
    /// A [`BytesValue`].
    Bytes(BytesValue),
}

impl Wrapper {
    /// The kind of record inside.
    pub const fn kind(&self) -> WrapperKind {
        match self {
            Wrapper::Double(_) => WrapperKind::Double,
            Wrapper::Float(_) => WrapperKind::Float,
            Wrapper::Int32(_) => WrapperKind::Int32,
            Wrapper::Int64(_) => WrapperKind::Int64,
            Wrapper::UInt32(_) => WrapperKind::UInt32,
            Wrapper::UInt64(_) => WrapperKind::UInt64,
            Wrapper::Bool(_) => WrapperKind::Bool,
            Wrapper::String(_) => WrapperKind::String,
            Wrapper::Bytes(_) => WrapperKind::Bytes,
        }
    }
}

/// A wrapper record type that reports which kind it boxes.
pub trait WellKnown: Sized + 'static {
    /// The boxed kind.
    const KIND: WrapperKind;

    /// Unwraps a record of this kind, handing the wrapper back otherwise.
    fn from_wrapper(wrapper: Wrapper) -> Result<Self, Wrapper>;
}

macro_rules! wrappers {
    ($(
        $(#[$meta:meta])*
        $name:ident($payload:ty) => $kind:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Default, PartialEq, Debug)]
            pub struct $name {
                /// The boxed value.
                pub value: $payload,
            }

            impl $name {
                /// Boxes `value`.
                pub fn new(value: $payload) -> Self {
                    Self { value }
                }
            }

            impl WellKnown for $name {
                const KIND: WrapperKind = WrapperKind::$kind;

                #[inline]
                fn from_wrapper(wrapper: Wrapper) -> Result<Self, Wrapper> {
                    match wrapper {
                        Wrapper::$kind(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }

            impl From<$name> for Wrapper {
                #[inline]
                fn from(value: $name) -> Self {
                    Wrapper::$kind(value)
                }
            }

            impl $crate::Nullable for $name {
                const OPTION_DEF: $crate::OptionDef = $crate::OptionDef::Wrapper(WrapperKind::$kind);

                #[inline]
                fn option_field_mut(slot: &mut Option<Self>) -> $crate::FieldMut<'_> {
                    $crate::FieldMut::Wrapper(slot)
                }
            }
        )*
    };
}

wrappers! {
    /// Wrapper for `f64`.
    DoubleValue(f64) => Double;
    /// Wrapper for `f32`.
    FloatValue(f32) => Float;
    /// Wrapper for `i32`.
    Int32Value(i32) => Int32;
    /// Wrapper for `i64`.
    Int64Value(i64) => Int64;
    /// Wrapper for `u32`.
    UInt32Value(u32) => UInt32;
    /// Wrapper for `u64`.
    UInt64Value(u64) => UInt64;
    /// Wrapper for `bool`.
    BoolValue(bool) => Bool;
    /// Wrapper for `String`.
    StringValue(String) => String;
    /// Wrapper for bytes.
    BytesValue(Vec<u8>) => Bytes;
}
