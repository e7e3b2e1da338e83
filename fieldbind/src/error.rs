use alloc::string::String;
use core::fmt;

/// A bind error, tagged with the mapping key that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct BindError {
    /// The mapping key being bound when the error occurred.
    pub key: String,

    /// What went wrong.
    pub kind: BindErrorKind,
}

impl BindError {
    /// Creates a new bind error.
    pub fn new(key: impl Into<String>, kind: BindErrorKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot bind `{}`: {}", self.key, self.kind)
    }
}

impl core::error::Error for BindError {}

/// An error kind for binding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindErrorKind {
    /// No field with this name anywhere in the record graph.
    ///
    /// The binder skips such keys instead of returning this.
    NotFound,

    /// The input is not of the representation the target needs, e.g. a
    /// pre-typed value where a string was required.
    TypeMismatch {
        /// What was required.
        expected: &'static str,
        /// What was given.
        found: &'static str,
    },

    /// The input is not a valid literal for the target type.
    ParseError {
        /// Target type name.
        target: &'static str,
        /// The offending input.
        input: String,
    },

    /// The literal is well-formed but out of range for the target type.
    OverflowError {
        /// Target type name.
        target: &'static str,
        /// The offending input.
        input: String,
    },

    /// The target field has no coercion from a string: a nested record or a
    /// collection.
    UnsupportedKind {
        /// Name of the target type.
        type_name: &'static str,
    },

    /// A record handed out no field, or a field of another category, where
    /// its shape declares one.
    ShapeMismatch {
        /// Dotted path of the field, as declared by the shape.
        path: String,
    },

    /// A wrapper tag outside the known family, or a wrapper of the wrong
    /// kind for its slot.
    NotAWrapper {
        /// The tag as given.
        tag: String,
    },
}

impl fmt::Display for BindErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindErrorKind::NotFound => write!(f, "no field with this name"),
            BindErrorKind::TypeMismatch { expected, found } => {
                write!(f, "expected {expected} input, found {found}")
            }
            BindErrorKind::ParseError { target, input } => {
                write!(f, "invalid {target} literal `{input}`")
            }
            BindErrorKind::OverflowError { target, input } => {
                write!(f, "`{input}` is out of range for {target}")
            }
            BindErrorKind::UnsupportedKind { type_name } => {
                write!(f, "no coercion from a string into {type_name}")
            }
            BindErrorKind::ShapeMismatch { path } => {
                write!(f, "record does not match its shape at `{path}`")
            }
            BindErrorKind::NotAWrapper { tag } => {
                write!(f, "`{tag}` is not a known wrapper type")
            }
        }
    }
}

impl BindErrorKind {
    /// Tags this kind with the key being bound.
    pub fn at(self, key: impl Into<String>) -> BindError {
        BindError::new(key, self)
    }
}
