use alloc::string::String;

use fieldbind_core::ScalarValue;

/// A value in the input mapping.
///
/// Only [`RawValue::String`] can be coerced. Pre-typed values are accepted in
/// the mapping but binding one fails with
/// [`TypeMismatch`](crate::BindErrorKind::TypeMismatch).
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Raw text, to be parsed into the target field's type.
    String(String),

    /// A value that already carries a type.
    Typed(ScalarValue),
}

impl RawValue {
    /// The text, if this is a raw string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::String(s) => Some(s),
            RawValue::Typed(_) => None,
        }
    }

    /// What kind of input this is, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawValue::String(_) => "string",
            RawValue::Typed(value) => value.scalar_type().name(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(String::from(value))
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<ScalarValue> for RawValue {
    fn from(value: ScalarValue) -> Self {
        RawValue::Typed(value)
    }
}
