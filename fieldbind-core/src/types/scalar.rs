//! Scalar types a field can hold, and the typed values that fill them.

use alloc::string::String;
use core::fmt;

/// All scalar types a record field may declare.
///
/// This is the target vocabulary of string coercion: every variant has a
/// textual literal form, and nothing else does.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ScalarType {
    /// Primitive type `bool`.
    Bool,
    /// Primitive type `i8`.
    I8,
    /// Primitive type `i16`.
    I16,
    /// Primitive type `i32`.
    I32,
    /// Primitive type `i64`.
    I64,
    /// Primitive type `isize`.
    ISize,
    /// Primitive type `u8`.
    U8,
    /// Primitive type `u16`.
    U16,
    /// Primitive type `u32`.
    U32,
    /// Primitive type `u64`.
    U64,
    /// Primitive type `usize`.
    USize,
    /// Primitive type `f32`.
    F32,
    /// Primitive type `f64`.
    F64,
    /// `alloc::string::String`.
    String,
}

impl ScalarType {
    /// The Rust spelling of the type, e.g. `"u16"` or `"String"`.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::ISize => "isize",
            ScalarType::U8 => "u8",
            ScalarType::U16 => "u16",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
            ScalarType::USize => "usize",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::String => "String",
        }
    }

    /// Whether this is one of the unsigned integer types.
    pub const fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            ScalarType::U8 | ScalarType::U16 | ScalarType::U32 | ScalarType::U64 | ScalarType::USize
        )
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed scalar value, tagged with its [`ScalarType`].
#[derive(Clone, PartialEq, Debug)]
pub enum ScalarValue {
    /// A `bool`.
    Bool(bool),
    /// An `i8`.
    I8(i8),
    /// An `i16`.
    I16(i16),
    /// An `i32`.
    I32(i32),
    /// An `i64`.
    I64(i64),
    /// An `isize`.
    ISize(isize),
    /// A `u8`.
    U8(u8),
    /// A `u16`.
    U16(u16),
    /// A `u32`.
    U32(u32),
    /// A `u64`.
    U64(u64),
    /// A `usize`.
    USize(usize),
    /// An `f32`.
    F32(f32),
    /// An `f64`.
    F64(f64),
    /// A `String`.
    String(String),
}

impl ScalarValue {
    /// The type tag of this value.
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            ScalarValue::Bool(_) => ScalarType::Bool,
            ScalarValue::I8(_) => ScalarType::I8,
            ScalarValue::I16(_) => ScalarType::I16,
            ScalarValue::I32(_) => ScalarType::I32,
            ScalarValue::I64(_) => ScalarType::I64,
            ScalarValue::ISize(_) => ScalarType::ISize,
            ScalarValue::U8(_) => ScalarType::U8,
            ScalarValue::U16(_) => ScalarType::U16,
            ScalarValue::U32(_) => ScalarType::U32,
            ScalarValue::U64(_) => ScalarType::U64,
            ScalarValue::USize(_) => ScalarType::USize,
            ScalarValue::F32(_) => ScalarType::F32,
            ScalarValue::F64(_) => ScalarType::F64,
            ScalarValue::String(_) => ScalarType::String,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(v) => write!(f, "{v}"),
            ScalarValue::I8(v) => write!(f, "{v}"),
            ScalarValue::I16(v) => write!(f, "{v}"),
            ScalarValue::I32(v) => write!(f, "{v}"),
            ScalarValue::I64(v) => write!(f, "{v}"),
            ScalarValue::ISize(v) => write!(f, "{v}"),
            ScalarValue::U8(v) => write!(f, "{v}"),
            ScalarValue::U16(v) => write!(f, "{v}"),
            ScalarValue::U32(v) => write!(f, "{v}"),
            ScalarValue::U64(v) => write!(f, "{v}"),
            ScalarValue::USize(v) => write!(f, "{v}"),
            ScalarValue::F32(v) => write!(f, "{v}"),
            ScalarValue::F64(v) => write!(f, "{v}"),
            ScalarValue::String(v) => write!(f, "{v:?}"),
        }
    }
}

/// A Rust type that is one of the [`ScalarType`]s.
pub trait Scalar: Sized + 'static {
    /// The tag for this type.
    const SCALAR_TYPE: ScalarType;

    /// Unwraps a value of this type, handing the value back if it has a different tag.
    fn from_scalar(value: ScalarValue) -> Result<Self, ScalarValue>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const SCALAR_TYPE: ScalarType = ScalarType::$variant;

                #[inline]
                fn from_scalar(value: ScalarValue) -> Result<Self, ScalarValue> {
                    match value {
                        ScalarValue::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }

            impl From<$ty> for ScalarValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    ScalarValue::$variant(value)
                }
            }

            impl $crate::Slot for $ty {
                const DEF: $crate::Def = $crate::Def::Scalar(ScalarType::$variant);

                #[inline]
                fn as_field_mut(&mut self) -> $crate::FieldMut<'_> {
                    $crate::FieldMut::Scalar(self)
                }
            }

            impl $crate::Nullable for $ty {
                const OPTION_DEF: $crate::OptionDef =
                    $crate::OptionDef::Scalar(ScalarType::$variant);

                #[inline]
                fn option_field_mut(slot: &mut Option<Self>) -> $crate::FieldMut<'_> {
                    $crate::FieldMut::OptionScalar(slot)
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => ISize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => USize,
    f32 => F32,
    f64 => F64,
    String => String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_follow_values() {
        assert_eq!(ScalarValue::from(3u8).scalar_type(), ScalarType::U8);
        assert_eq!(ScalarValue::from(-3i64).scalar_type(), ScalarType::I64);
        assert_eq!(
            ScalarValue::from(String::from("x")).scalar_type(),
            ScalarType::String
        );
        assert_eq!(<usize as Scalar>::SCALAR_TYPE, ScalarType::USize);
    }

    #[test]
    fn from_scalar_rejects_other_tags() {
        assert_eq!(i16::from_scalar(ScalarValue::I16(-4)), Ok(-4));
        assert_eq!(
            i16::from_scalar(ScalarValue::I32(-4)),
            Err(ScalarValue::I32(-4))
        );
    }

    #[test]
    fn classification() {
        assert!(ScalarType::USize.is_unsigned_integer());
        assert!(!ScalarType::ISize.is_unsigned_integer());
        assert!(!ScalarType::F32.is_unsigned_integer());
        assert_eq!(ScalarType::String.to_string(), "String");
    }
}
