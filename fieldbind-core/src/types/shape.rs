use core::fmt;

use crate::{ScalarType, WrapperKind};

/// Static descriptor table of a record type.
///
/// A shape lists the fields of a record in declaration order. Nested records
/// point at their own shapes, so a shape is the root of a finite tree that can
/// be searched without an instance of the record.
pub struct Shape {
    /// Name of the record type, as written in its declaration.
    pub type_name: &'static str,

    /// Fields, in declaration order.
    pub fields: &'static [Field],
}

impl Shape {
    /// Index of the field directly declared with this name, if any.
    ///
    /// Nested records are not searched.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        // consts may be duplicated per use site, so address is only a shortcut
        core::ptr::eq(self, other)
            || (self.type_name == other.type_name && self.fields == other.fields)
    }
}

impl Eq for Shape {}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("type_name", &self.type_name)
            .field(
                "fields",
                &self.fields.iter().map(|f| f.name).collect::<alloc::vec::Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// One named field of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Key under which the field is bound.
    pub name: &'static str,

    /// What the field holds.
    pub def: Def,
}

impl Field {
    /// Shape of the record this field leads to, if the binder may descend
    /// into it while searching (a nested record, optional or not).
    pub fn nested_shape(&self) -> Option<&'static Shape> {
        match self.def {
            Def::Record(shape) | Def::Option(OptionDef::Record(shape)) => Some(shape),
            _ => None,
        }
    }
}

/// The category of a field, with whatever is needed to fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Def {
    /// A plain scalar, always present.
    Scalar(ScalarType),

    /// A nested record stored by value.
    Record(&'static Shape),

    /// An `Option<T>`, empty until assigned.
    Option(OptionDef),

    /// A type the binder can name but never fill: sequences, maps.
    /// Carries the type's name.
    Opaque(&'static str),
}

/// What an optional field points to once it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDef {
    /// `Option<scalar>`.
    Scalar(ScalarType),

    /// `Option<wrapper>`, one of the well-known boxed scalars.
    Wrapper(WrapperKind),

    /// `Option<record>`, allocated with `Default` when the binder descends into it.
    Record(&'static Shape),
}

impl Def {
    /// A short human-readable name of the type behind this definition.
    pub fn type_name(&self) -> &'static str {
        match *self {
            Def::Scalar(scalar) => scalar.name(),
            Def::Record(shape) => shape.type_name,
            Def::Option(OptionDef::Scalar(scalar)) => scalar.name(),
            Def::Option(OptionDef::Wrapper(kind)) => kind.type_name(),
            Def::Option(OptionDef::Record(shape)) => shape.type_name,
            Def::Opaque(name) => name,
        }
    }
}
